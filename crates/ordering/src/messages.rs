//! Customer-facing message text
//!
//! Everything the bot says back to the customer about an order is built
//! here, so wording lives in one place.

use snacktrack_core::{MenuItemRef, Order, OrderStatus, OrderType};

/// Confirmation sent right after an order is created.
pub fn order_confirmation(order: &Order) -> String {
    let mut text = format!(
        "Thank you! Your order #{} has been received and is being processed.\n\n",
        order.id
    );

    for item in &order.items {
        text.push_str(&format!(
            "• {}x {} - ₱{}\n",
            item.quantity,
            item.name,
            item.line_total().round_dp(2)
        ));
    }
    text.push_str(&format!("\nTotal: ₱{}\n", order.total_price.round_dp(2)));

    match order.order_type {
        OrderType::Delivery => {
            if let Some(address) = &order.delivery_address {
                text.push_str(&format!("Deliver to: {address}\n"));
            }
        }
        OrderType::Pickup => text.push_str("For pickup.\n"),
    }

    if let Some(instructions) = &order.special_instructions {
        text.push_str(&format!("Instructions: {instructions}\n"));
    }

    text
}

/// Status-specific customer update, None for statuses that do not notify
/// (an order landing in `New` was just confirmed).
pub fn status_update(status: OrderStatus) -> Option<&'static str> {
    match status {
        OrderStatus::New => None,
        OrderStatus::Accepted => Some("Your order has been accepted and is being prepared!"),
        OrderStatus::Finished => Some("Your order is made and will be delivered shortly."),
        OrderStatus::Completed => {
            Some("Your order has been completed. Thank you for ordering with us!")
        }
        OrderStatus::Voided => {
            Some("Your order has been voided. Please contact us if you have any questions.")
        }
    }
}

/// The menu, grouped by category with ordering instructions appended.
pub fn menu_message(items: &[MenuItemRef]) -> String {
    let mut sorted: Vec<&MenuItemRef> = items.iter().collect();
    sorted.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));

    let mut text = String::from("🍽️ Welcome to SnackTrack! Here's our menu:\n\n");
    let mut current_category: Option<&str> = None;
    for item in sorted {
        if current_category != Some(item.category.as_str()) {
            if current_category.is_some() {
                text.push('\n');
            }
            text.push_str(&format!("📌 {}\n", item.category));
            current_category = Some(item.category.as_str());
        }
        text.push_str(&format!("• {} - ₱{}\n", item.name, item.price.round_dp(2)));
    }

    text.push_str(
        "\nTo place an order, just send it in chat, for example:\n\n\
         Name: Juan Dela Cruz\n\
         Phone: 09123456789\n\
         2 Burger and 1 French Fries, deliver to 123 Main St\n",
    );
    text
}
