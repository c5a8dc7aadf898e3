use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully priced order in the slip format (`data/orderformat.json`).
///
/// Unlike the enricher's record this one is read-only: totals arrive
/// pre-computed and the renderer only formats them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlipOrder {
    pub id: String,

    #[serde(rename = "orderCode")]
    pub order_code: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    pub status: String,

    #[serde(rename = "paymentMethod")]
    pub payment_method: String,

    /// Payload encoded into the slip's QR code.
    #[serde(rename = "QRCode")]
    pub qr_code: String,

    #[serde(rename = "User")]
    pub user: SlipUser,

    #[serde(rename = "billingAddressSnapshot", default)]
    pub billing_address: Option<BillingAddress>,

    pub items: Vec<SlipItem>,

    #[serde(rename = "PriceSubTotal")]
    pub subtotal: f64,

    #[serde(rename = "discountAmount")]
    pub discount_amount: f64,

    #[serde(rename = "shippingCost")]
    pub shipping_cost: f64,

    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlipUser {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingAddress {
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,

    #[serde(rename = "contactNo", default)]
    pub contact_no: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlipItem {
    #[serde(rename = "unitQuantity")]
    pub unit_quantity: i64,

    #[serde(rename = "Product")]
    pub product: SlipProduct,
}

impl SlipItem {
    /// Unit price from the first pricing tier, 0 when none is attached.
    pub fn unit_price(&self) -> f64 {
        self.product
            .pricing
            .first()
            .map(|tier| tier.unit_price)
            .unwrap_or(0.0)
    }

    pub fn amount(&self) -> f64 {
        self.unit_price() * self.unit_quantity as f64
    }

    /// "Name(strength) Type", as printed in the item column.
    pub fn description(&self) -> String {
        format!(
            "{}({}) {}",
            self.product.name, self.product.strength, self.product.product_type.name
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlipProduct {
    pub name: String,
    pub strength: String,

    #[serde(rename = "productType")]
    pub product_type: ProductTypeRef,

    #[serde(default)]
    pub pricing: Vec<PricingTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTypeRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTier {
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}
