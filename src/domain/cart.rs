use super::product::Product;
use super::settings::AdminSettings;

/// One line of the cart. Name and price are copied from the product when it is added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.qty as f64
    }
}

/// Anything the cart can copy a line from: a catalog product or a historical line.
pub trait LineSource {
    fn sku(&self) -> &str;
    fn name(&self) -> &str;
    fn price(&self) -> f64;
}

impl LineSource for Product {
    fn sku(&self) -> &str { &self.sku }
    fn name(&self) -> &str { &self.name }
    fn price(&self) -> f64 { self.price }
}

impl LineSource for CartItem {
    fn sku(&self) -> &str { &self.sku }
    fn name(&self) -> &str { &self.name }
    fn price(&self) -> f64 { self.price }
}

/// Priced breakdown of a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub vat: f64,
    pub delivery: f64,
    pub total: f64,
}

impl Invoice {
    pub fn compute(items: &[CartItem], vat_rate: f64, delivery_fee: f64) -> Self {
        let subtotal: f64 = items.iter().map(CartItem::line_total).sum();
        let vat = subtotal * vat_rate;
        Self {
            items: items.to_vec(),
            subtotal,
            vat,
            delivery: delivery_fee,
            total: subtotal + vat + delivery_fee,
        }
    }
}

/// Shopper's cart. Lines keep the order in which they were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjusts the quantity of `source` by `delta` and returns the new quantity.
    ///
    /// Quantities clamp at zero and a zero quantity drops the line.
    pub fn update(&mut self, source: &impl LineSource, delta: i32) -> u32 {
        let current = self.qty(source.sku());
        let new_qty = (current as i64 + delta as i64).clamp(0, u32::MAX as i64) as u32;
        self.set_line(source, new_qty);
        new_qty
    }

    /// Sets the quantity of `source` outright, adding or refreshing the line.
    /// A zero quantity drops the line.
    pub fn set_line(&mut self, source: &impl LineSource, qty: u32) {
        let position = self.items.iter().position(|it| it.sku == source.sku());
        match (position, qty) {
            (Some(i), 0) => {
                self.items.remove(i);
            }
            (None, 0) => {}
            (Some(i), qty) => {
                let line = &mut self.items[i];
                line.name = source.name().to_string();
                line.price = source.price();
                line.qty = qty;
            }
            (None, qty) => self.items.push(CartItem {
                sku: source.sku().to_string(),
                name: source.name().to_string(),
                price: source.price(),
                qty,
            }),
        }
    }

    pub fn qty(&self, sku: &str) -> u32 {
        self.get(sku).map(|it| it.qty).unwrap_or(0)
    }

    pub fn get(&self, sku: &str) -> Option<&CartItem> {
        self.items.iter().find(|it| it.sku == sku)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct products in the cart (the header badge count).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn invoice(&self, settings: &AdminSettings) -> Invoice {
        Invoice::compute(&self.items, settings.vat_rate, settings.delivery_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category;

    fn brew() -> Product {
        Product::new("DRK-01", "Midnight Cold Brew", 4.50, category::COFFEE)
    }

    #[test]
    fn test_update_adds_increments_and_removes() {
        let mut cart = Cart::new();
        assert_eq!(cart.update(&brew(), 1), 1);
        assert_eq!(cart.update(&brew(), 2), 3);
        assert_eq!(cart.line_count(), 1);

        assert_eq!(cart.update(&brew(), -5), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_negative_delta_on_missing_line_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.update(&brew(), -1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_refreshes_name_and_price() {
        let mut cart = Cart::new();
        cart.update(&brew(), 1);

        let mut repriced = brew();
        repriced.price = 5.00;
        cart.update(&repriced, 1);

        let line = cart.get("DRK-01").unwrap();
        assert_eq!(line.qty, 2);
        assert_eq!(line.price, 5.00);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.update(&Product::new("SNK-01", "Truffle Fries", 6.00, category::SNACK), 1);
        cart.update(&brew(), 1);
        cart.update(&Product::new("SNK-01", "Truffle Fries", 6.00, category::SNACK), 1);

        let skus: Vec<&str> = cart.items().iter().map(|it| it.sku.as_str()).collect();
        assert_eq!(skus, vec!["SNK-01", "DRK-01"]);
    }

    #[test]
    fn test_set_line_keeps_quantities_beyond_i32() {
        let big = i32::MAX as u32 + 10;
        let mut cart = Cart::new();
        cart.set_line(&brew(), big);
        assert_eq!(cart.qty("DRK-01"), big);

        assert_eq!(cart.update(&brew(), i32::MAX), u32::MAX);
        cart.set_line(&brew(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_invoice_totals() {
        let mut cart = Cart::new();
        cart.update(&brew(), 2);
        cart.update(&Product::new("SNK-01", "Truffle Fries", 6.00, category::SNACK), 1);

        let invoice = cart.invoice(&AdminSettings::default());
        assert!((invoice.subtotal - 15.00).abs() < 1e-9);
        assert!((invoice.vat - 1.80).abs() < 1e-9);
        assert!((invoice.delivery - 2.50).abs() < 1e-9);
        assert!((invoice.total - 19.30).abs() < 1e-9);
    }

    #[test]
    fn test_empty_cart_still_pays_delivery() {
        let invoice = Cart::new().invoice(&AdminSettings::default());
        assert_eq!(invoice.subtotal, 0.0);
        assert_eq!(invoice.total, 2.50);
    }
}
