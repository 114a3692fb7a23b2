use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::text_utils::parse_quantity;

/// Quantity marker the model uses for components the customer never mentioned.
pub const UNCONFIRMED_MARKER: &str = "미확인";

const DELIVERY_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// One ordered menu set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_name: String,
    #[serde(default)]
    pub menu_style: Option<String>,
    /// Free-form `component=quantity` pairs, e.g. `"에그 스크램블=1, 베이컨=2"`.
    #[serde(default)]
    pub menu_items: Option<String>,
    /// Number of sets, always positive. Missing, zero, negative or
    /// non-numeric values decode as 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuComponent {
    pub name: String,
    pub quantity: u32,
}

impl OrderItem {
    /// Confirmed components listed in `menu_items`.
    ///
    /// Pairs without `=`, with an unconfirmed marker or with a non-positive
    /// quantity are dropped.
    pub fn components(&self) -> Vec<MenuComponent> {
        let Some(raw) = self.menu_items.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .filter_map(|pair| {
                let (name, quantity) = pair.split_once('=')?;
                let name = name.trim();
                let quantity = quantity.trim();
                if name.is_empty()
                    || quantity == UNCONFIRMED_MARKER
                    || quantity.eq_ignore_ascii_case("null")
                {
                    trace!(pair, "Skipping unconfirmed component");
                    return None;
                }
                Some(MenuComponent {
                    name: name.to_string(),
                    quantity: parse_quantity(quantity)?,
                })
            })
            .collect()
    }
}

/// Structured result of decoding a summary reply.
///
/// `menu_name`, `menu_style`, `menu_items` and `quantity` mirror the old
/// single-menu format; new callers should read `order_items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub menu_name: Option<String>,
    #[serde(default)]
    pub menu_style: Option<String>,
    #[serde(default)]
    pub menu_items: Option<String>,
    /// ISO-8601 local date-time, e.g. `2025-12-08T18:00:00`.
    #[serde(default)]
    pub delivery_time: Option<String>,
    /// Positive set count. Zero, negative and non-numeric values decode as
    /// absent.
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub use_coupon: Option<bool>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl OrderSummary {
    /// Encode the scalar fields in the single-menu reply grammar.
    ///
    /// Absent values are written as `null`. `order_items` is not encoded.
    pub fn to_reply_text(&self) -> String {
        let text = |v: &Option<String>| v.clone().unwrap_or_else(|| "null".to_string());
        let lines = [
            format!("customerName = {}", text(&self.customer_name)),
            format!("customerAddress = {}", text(&self.customer_address)),
            format!("deliveryTime = {}", text(&self.delivery_time)),
            format!("couponCode = {}", text(&self.coupon_code)),
            format!(
                "useCoupon = {}",
                self.use_coupon
                    .map_or_else(|| "null".to_string(), |b| b.to_string())
            ),
            format!("menuName = {}", text(&self.menu_name)),
            format!("menuStyle = {}", text(&self.menu_style)),
            format!("menuItems = {}", text(&self.menu_items)),
            format!(
                "quantity = {}",
                self.quantity
                    .map_or_else(|| "null".to_string(), |q| q.to_string())
            ),
        ];
        lines.join("\n")
    }

    /// Requested delivery time, if `delivery_time` holds a parseable local
    /// date-time.
    pub fn delivery_at(&self) -> Option<NaiveDateTime> {
        let raw = self.delivery_time.as_deref()?.trim();
        DELIVERY_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

    /// Whether delivery is booked for later than `now`. Orders without a
    /// usable delivery time are delivered immediately.
    pub fn is_reservation(&self, now: NaiveDateTime) -> bool {
        self.delivery_at().is_some_and(|at| at > now)
    }
}
