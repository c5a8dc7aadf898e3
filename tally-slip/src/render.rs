use crate::models::SlipOrder;

/// Default slip width in characters, sized for a 57mm thermal printer.
pub const DEFAULT_WIDTH: usize = 42;

const MIN_WIDTH: usize = 24;

/// Renders a slip order as a fixed-width plain-text receipt.
///
/// Layout follows the printed slip: order details and bill-to header, an
/// item table split 60/10/30 between description, quantity and amount,
/// a right-half totals block and a centered footer.
#[derive(Debug, Clone)]
pub struct SlipRenderer {
    width: usize,
}

impl SlipRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
        }
    }

    pub fn render(&self, order: &SlipOrder) -> String {
        let name_w = self.width * 6 / 10;
        let qty_w = self.width / 10;
        let amount_w = self.width - name_w - qty_w;

        let mut lines: Vec<String> = Vec::new();

        // Order details
        lines.push("Order details:".to_string());
        lines.push(format!("Code: {}", order.order_code));
        lines.push(format!("Date: {}", order.created_at.format("%Y-%m-%d %H:%M")));
        lines.push(format!("Stat: {}", order.status));
        lines.push(format!("Payment: {}", order.payment_method));
        lines.push(format!("QR: {}", order.qr_code));
        lines.push(String::new());

        // Bill to
        lines.push("Bill to:".to_string());
        if let Some(address) = &order.billing_address {
            if let Some(name) = &address.full_name {
                lines.push(name.clone());
            }
        }
        lines.push(format!("CId: {}", order.user.username));
        if let Some(address) = &order.billing_address {
            if let Some(contact) = &address.contact_no {
                lines.push(contact.clone());
            }
        }
        lines.push(String::new());

        // Item table
        lines.push("-".repeat(self.width));
        lines.push(format!(
            "{:<name_w$}{:>qty_w$}{:>amount_w$}",
            "Item Description", "Qty", "Amount"
        ));
        lines.push("-".repeat(self.width));

        for item in &order.items {
            let qty = item.unit_quantity.to_string();
            let amount = format!("{:.2}", item.amount());
            for (row, chunk) in wrap(&item.description(), name_w).iter().enumerate() {
                if row == 0 {
                    lines.push(format!("{chunk:<name_w$}{qty:>qty_w$}{amount:>amount_w$}"));
                } else {
                    lines.push(chunk.clone());
                }
            }
        }

        // Totals block on the right half
        let half = self.width / 2;
        lines.push(format!("{}{}", " ".repeat(half), "-".repeat(self.width - half)));
        lines.push(self.total_line("Subtotal:", format!("{:.2}", order.subtotal)));
        lines.push(self.total_line("Discount:", format!("(-) {:.2}", order.discount_amount)));
        lines.push(self.total_line("Shipping:", format!("{:.2}", order.shipping_cost)));
        lines.push(self.total_line("Total:", format!("{:.2}", order.total_amount)));

        // Footer
        lines.push("-".repeat(self.width));
        lines.push(self.center("Thank you for your purchase!"));
        lines.push(self.center("Visit us again!"));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn total_line(&self, label: &str, value: String) -> String {
        let pad = self.width / 2;
        let value_w = (self.width - pad).saturating_sub(9).max(1);
        format!("{}{label:<9}{value:>value_w$}", " ".repeat(pad))
    }

    fn center(&self, text: &str) -> String {
        let len = text.chars().count();
        if len >= self.width {
            return text.to_string();
        }
        format!("{}{}", " ".repeat((self.width - len) / 2), text)
    }
}

impl Default for SlipRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

/// Greedy word wrap; words wider than the column are hard-split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }
        let word_len = word.chars().count();
        let current_len = current.chars().count();
        if current.is_empty() {
            current = word;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> SlipOrder {
        serde_json::from_value(serde_json::json!({
            "id": "a3f1c2d4",
            "orderCode": "ORD-2024-0042",
            "createdAt": "2025-01-15T10:30:00Z",
            "status": "DELIVERED",
            "paymentMethod": "CASH",
            "QRCode": "ORD-2024-0042",
            "User": { "username": "jdoe" },
            "billingAddressSnapshot": {
                "fullName": "Jane Doe",
                "contactNo": "+8801700000000"
            },
            "items": [
                {
                    "unitQuantity": 10,
                    "Product": {
                        "name": "Paracetamol",
                        "strength": "500mg",
                        "productType": { "name": "Tablet" },
                        "pricing": [ { "unitPrice": 2.5 } ]
                    }
                },
                {
                    "unitQuantity": 1,
                    "Product": {
                        "name": "Cough Syrup",
                        "strength": "100ml",
                        "productType": { "name": "Syrup" },
                        "pricing": []
                    }
                }
            ],
            "PriceSubTotal": 25.0,
            "discountAmount": 2.0,
            "shippingCost": 5.0,
            "totalAmount": 28.0
        }))
        .unwrap()
    }

    #[test]
    fn test_header_and_footer() {
        let slip = SlipRenderer::default().render(&sample_order());
        assert!(slip.contains("Code: ORD-2024-0042"));
        assert!(slip.contains("Date: 2025-01-15 10:30"));
        assert!(slip.contains("CId: jdoe"));
        assert!(slip.contains("Thank you for your purchase!"));
        assert!(slip.contains("Visit us again!"));
    }

    #[test]
    fn test_item_rows_and_amounts() {
        let slip = SlipRenderer::default().render(&sample_order());
        let row = slip
            .lines()
            .find(|l| l.contains("Paracetamol(500mg) Tablet"))
            .unwrap();
        assert!(row.ends_with("25.00"));

        // Missing pricing tier renders as zero
        let row = slip
            .lines()
            .find(|l| l.contains("Cough Syrup(100ml) Syrup"))
            .unwrap();
        assert!(row.ends_with("0.00"));
    }

    #[test]
    fn test_totals_block() {
        let slip = SlipRenderer::default().render(&sample_order());
        assert!(slip.contains("Subtotal:"));
        assert!(slip.contains("(-) 2.00"));
        assert!(slip.contains("Shipping:"));
        let total_row = slip.lines().find(|l| l.contains("Total:") && !l.contains("Sub")).unwrap();
        assert!(total_row.ends_with("28.00"));
    }

    #[test]
    fn test_lines_fit_width() {
        let slip = SlipRenderer::default().render(&sample_order());
        for line in slip.lines() {
            assert!(line.chars().count() <= DEFAULT_WIDTH, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_long_description_wraps() {
        let renderer = SlipRenderer::new(30);
        let mut order = sample_order();
        order.items[0].product.name = "Extended Release Combination Pack".to_string();
        let slip = renderer.render(&order);
        // The description spills onto a continuation row instead of widening the line
        assert!(slip.lines().count() > SlipRenderer::new(30).render(&sample_order()).lines().count());
    }
}
