/// Shared data structures for the orders screen
///
/// These structs mirror the JSON documents served by the order store
/// and flow between the HTTP client and the UI layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fulfilment status of an order
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    #[serde(rename = "Ready for Dispatch")]
    ReadyForDispatch,
    Delivered,
}

impl OrderStatus {
    /// Every status, in the order the selector offers them
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::ReadyForDispatch,
        OrderStatus::Delivered,
    ];

    /// Wire representation used by the order store
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::ReadyForDispatch => "Ready for Dispatch",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Buyer address attached to an order. Every field may be missing.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Street line
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub pincode: Option<String>,
}

/// One product line of an order
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    /// URL of the product picture
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_image: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

/// An order as served by `GET /api/orders`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned identifier (empty if the server omitted it)
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_mode: String,
    /// Raw creation timestamp, formatted lazily for display
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    /// `None` when the server sent nothing usable
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<LineItem>,
}

impl Order {
    /// The order's status, falling back to `Pending` when absent
    pub fn effective_status(&self) -> OrderStatus {
        self.status.unwrap_or_default()
    }

    /// Whether the order can be addressed by `PUT /api/orders/{id}`
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

fn default_quantity() -> u32 {
    1
}

/// `null` gets the same value as a missing key, so one sparse order cannot fail the whole list
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_quantity))
}

/// Accept `"560001"` as well as `560001`
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Unknown, empty or null statuses are treated as absent instead of failing the whole list
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<OrderStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        None | Some("") => None,
        Some(s) => match s.parse() {
            Ok(status) => Some(status),
            Err(UnknownStatus(tag)) => {
                tracing::warn!(status = %tag, "Unknown order status, treating as Pending");
                None
            }
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_order_from_store_json() {
        let json = r#"{
            "_id": "65f0c0ffee",
            "address": {
                "firstName": "Asha",
                "lastName": "Rao",
                "address": "12 MG Road",
                "city": "Mysuru",
                "state": "Karnataka",
                "pincode": 570001
            },
            "amount": "1249.5",
            "paymentMode": "COD",
            "createdAt": "2024-03-05T10:00:00Z",
            "status": "Ready for Dispatch",
            "items": [
                {"_id": "i1", "productName": "Groundnut Oil", "productImage": "https://cdn/x.png", "price": 450, "quantity": 2}
            ],
            "userId": "ignored"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.id, "65f0c0ffee");
        assert_eq!(order.amount, Some(Decimal::new(12495, 1)));
        assert_eq!(order.status, Some(OrderStatus::ReadyForDispatch));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].price, Some(Decimal::from(450)));

        let address = order.address.unwrap();
        assert_eq!(address.pincode.as_deref(), Some("570001"));
        assert_eq!(address.first_name.as_deref(), Some("Asha"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let order: Order = serde_json::from_str(r#"{"_id": "a"}"#).unwrap();

        assert!(order.address.is_none());
        assert!(order.amount.is_none());
        assert!(order.items.is_empty());
        assert_eq!(order.effective_status(), OrderStatus::Pending);
    }

    #[test]
    fn test_null_fields_do_not_fail_the_list() {
        let json = r#"[
            {"_id": "a", "paymentMode": null, "createdAt": null, "items": null},
            {"_id": null, "items": [
                {"_id": null, "productName": null, "productImage": null, "price": null, "quantity": null}
            ]},
            {"_id": "c", "paymentMode": "COD", "items": []}
        ]"#;

        let orders: Vec<Order> = serde_json::from_str(json).unwrap();
        assert_eq!(orders.len(), 3);

        assert_eq!(orders[0].payment_mode, "");
        assert_eq!(orders[0].created_at, "");
        assert!(orders[0].items.is_empty());

        assert!(!orders[1].has_id());
        let item = &orders[1].items[0];
        assert_eq!(item.product_name, "");
        assert_eq!(item.product_image, "");
        assert_eq!(item.price, None);
        assert_eq!(item.quantity, 1);

        assert_eq!(orders[2].payment_mode, "COD");
    }

    #[test]
    fn test_unusable_status_falls_back_to_pending() {
        for raw in [r#""""#, "null", r#""Shipped""#] {
            let json = format!(r#"{{"_id": "a", "status": {raw}}}"#);
            let order: Order = serde_json::from_str(&json).unwrap();
            assert_eq!(order.status, None, "status {raw}");
            assert_eq!(order.effective_status(), OrderStatus::Pending);
        }
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::ReadyForDispatch).unwrap();
        assert_eq!(json, r#""Ready for Dispatch""#);
        assert_eq!("Delivered".parse::<OrderStatus>(), Ok(OrderStatus::Delivered));
        assert!("delivered".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_has_id() {
        let mut order: Order = serde_json::from_str(r#"{"_id": "a"}"#).unwrap();
        assert!(order.has_id());

        order.id = "  ".to_string();
        assert!(!order.has_id());
    }
}
