use crate::labels::Labels;
use crate::order::{OrderField, OrderSnapshot};
use crate::share::{ShareError, ShareMessage};

/// Build the share text for a complete order.
///
/// The body lists quantity, flavor, pickup date and total, one per line.
pub fn compose_summary(
    order: &OrderSnapshot,
    labels: &dyn Labels,
) -> Result<ShareMessage, ShareError> {
    let quantity = order.quantity.ok_or(ShareError::IncompleteOrder {
        missing: OrderField::Quantity,
    })?;
    let flavor = order.flavor.ok_or(ShareError::IncompleteOrder {
        missing: OrderField::Flavor,
    })?;
    let pickup = order
        .pickup_date
        .as_deref()
        .ok_or(ShareError::IncompleteOrder {
            missing: OrderField::PickupDate,
        })?;

    let body = [
        format!("{}: {}", labels.summary_quantity(), labels.quantity(quantity)),
        format!("{}: {}", labels.summary_flavor(), labels.flavor_name(flavor)),
        format!("{}: {}", labels.summary_pickup(), pickup),
        format!("{}: {}", labels.summary_total(), order.price_formatted),
    ]
    .join("\n");

    Ok(ShareMessage {
        subject: labels.summary_subject().to_string(),
        body,
    })
}
