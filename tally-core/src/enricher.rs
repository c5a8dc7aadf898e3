use crate::models::{Order, Product};

/// Number of placeholder products generated per run.
pub const GENERATED_PRODUCT_COUNT: usize = 100;

/// Base unit price of the first generated product.
const BASE_PRICE: i64 = 10;

/// Quantities cycle 1..=QUANTITY_CYCLE across the generated sequence.
const QUANTITY_CYCLE: i64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Populates an order with deterministic placeholder line items and the
/// derived money fields.
///
/// For a fixed input order the result is identical on every run: generation
/// depends only on the loop index, never on randomness or prior state.
pub struct OrderEnricher {
    product_count: usize,
}

impl OrderEnricher {
    pub fn new() -> Self {
        Self {
            product_count: GENERATED_PRODUCT_COUNT,
        }
    }

    /// Generate products, compute subtotal and total, and write all three
    /// output fields onto the order, overwriting any previous values.
    ///
    /// Fails with `MissingField` if any of the tax, shipping or discount
    /// inputs is absent; the order is left untouched in that case.
    pub fn enrich(&self, order: &mut Order) -> Result<(), EnrichError> {
        let mut products = Vec::with_capacity(self.product_count);
        let mut subtotal: i64 = 0;

        for i in 0..self.product_count as i64 {
            let price = BASE_PRICE + i;
            let quantity = i % QUANTITY_CYCLE + 1;
            products.push(Product {
                name: format!("Product {}", i + 1),
                price,
                quantity,
            });
            subtotal += price * quantity;
        }

        let tax_percentage = order
            .tax_percentage
            .ok_or(EnrichError::MissingField("Price_Tax_Percentise"))?;
        let shipping_cost = order
            .shipping_cost
            .ok_or(EnrichError::MissingField("Shipping_Cost"))?;
        let discount_amount = order
            .discount_amount
            .ok_or(EnrichError::MissingField("Discount_Amount"))?;

        let tax = subtotal as f64 * tax_percentage / 100.0;
        let total = subtotal as f64 + tax + shipping_cost - discount_amount;

        order.products = Some(products);
        order.subtotal = Some(subtotal);
        order.total = Some(total);
        Ok(())
    }
}

impl Default for OrderEnricher {
    fn default() -> Self {
        Self::new()
    }
}
