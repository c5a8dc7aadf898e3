use serde::{Deserialize, Serialize};

/// A synthetic line item generated by the enricher.
///
/// Price and quantity are plain integers; the generator never produces
/// fractional unit prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

/// The order record round-tripped through the orders JSON file.
///
/// Only the fields the enricher reads or writes are typed; everything else
/// the file carries (customer details, addresses, ...) is preserved
/// verbatim in `extra` and written back untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Tax rate in percent, e.g. `10` for 10%.
    #[serde(rename = "Price_Tax_Percentise", skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<f64>,

    #[serde(rename = "Shipping_Cost", skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,

    #[serde(rename = "Discount_Amount", skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,

    /// Generated line items. Index order is significant: it determines each
    /// product's name, price and quantity.
    #[serde(rename = "Products", skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,

    #[serde(rename = "Price_Subtotal", skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<i64>,

    #[serde(rename = "Total", skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,

    /// Fields this service does not own. Round-tripped as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
