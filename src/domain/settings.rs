use super::product::category;

/// Store-wide settings managed from the admin console.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSettings {
    /// Fraction of the subtotal charged as VAT, e.g. `0.12`.
    pub vat_rate: f64,
    pub delivery_fee: f64,
    pub owner_email: String,
    pub is_locked: bool,
    pub categories: Vec<String>,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            vat_rate: 0.12,
            delivery_fee: 2.50,
            owner_email: "manager@elitecafe.com".to_string(),
            is_locked: true,
            categories: [category::COMBO, category::DRINK, category::COFFEE, category::TEA, category::SNACK]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl AdminSettings {
    /// Checks the invariants a saved settings record must hold.
    ///
    /// Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        if !self.vat_rate.is_finite() || !(0.0..=1.0).contains(&self.vat_rate) {
            return Err(format!("VAT rate must be between 0 and 1, got {}", self.vat_rate));
        }
        if !self.delivery_fee.is_finite() || self.delivery_fee < 0.0 {
            return Err(format!("Delivery fee must be non-negative, got {}", self.delivery_fee));
        }
        if self.categories.is_empty() {
            return Err("At least one category is required".to_string());
        }
        for (i, cat) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(cat) {
                return Err(format!("Duplicate category: {}", cat));
            }
        }
        Ok(())
    }
}
