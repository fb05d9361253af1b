use thiserror::Error;
use tracing::{debug, info};
use crate::actor_framework::Entity;
use crate::domain::{AdminSettings, Product, ProductPatch, UserProfile};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    #[error("Only the owner can open the admin console")]
    Forbidden,
    #[error("Admin console is locked")]
    Locked,
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
    #[error("Invalid category: {0:?}")]
    InvalidCategory(String),
    #[error("Cannot delete {0:?}: it is assigned to one or more products")]
    CategoryInUse(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Changes to persist when the console is locked again.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCommit {
    pub settings: AdminSettings,
    /// Products that differ from the state the console last committed or opened with.
    pub products: Vec<Product>,
}

/// Draft copy of the settings and catalog, edited by the owner.
///
/// Nothing is written back until [`AdminConsole::toggle_lock`] locks the console and the
/// returned [`AdminCommit`] is handed to the session.
#[derive(Debug, Clone)]
pub struct AdminConsole {
    settings: AdminSettings,
    products: Vec<Product>,
    baseline: Vec<Product>,
    snapshot: Option<(AdminSettings, Vec<Product>)>,
    locked: bool,
}

fn normalize_category(name: &str) -> Result<String, AdminError> {
    let name = name.trim().to_uppercase();
    if name.is_empty() {
        return Err(AdminError::InvalidCategory(name));
    }
    Ok(name)
}

impl AdminConsole {
    pub fn open(user: &UserProfile, settings: AdminSettings, products: Vec<Product>) -> Result<Self, AdminError> {
        if !user.is_owner() {
            return Err(AdminError::Forbidden);
        }
        info!(user_id = %user.id, locked = settings.is_locked, "Admin console opened");
        Ok(Self {
            locked: settings.is_locked,
            settings,
            baseline: products.clone(),
            products,
            snapshot: None,
        })
    }

    pub fn settings(&self) -> &AdminSettings {
        &self.settings
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn can_undo(&self) -> bool {
        !self.locked && self.snapshot.is_some()
    }

    pub fn category_in_use(&self, category: &str) -> bool {
        self.products.iter().any(|p| p.category == category)
    }

    fn ensure_unlocked(&self) -> Result<(), AdminError> {
        if self.locked { Err(AdminError::Locked) } else { Ok(()) }
    }

    // Only the first edit after unlocking is kept, so undo returns to that point.
    fn take_snapshot(&mut self) {
        if self.snapshot.is_none() {
            debug!("Snapshot taken");
            self.snapshot = Some((self.settings.clone(), self.products.clone()));
        }
    }

    pub fn set_vat_rate(&mut self, rate: f64) -> Result<(), AdminError> {
        self.ensure_unlocked()?;
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(AdminError::InvalidValue(format!("VAT rate {}", rate)));
        }
        self.take_snapshot();
        self.settings.vat_rate = rate;
        Ok(())
    }

    pub fn set_delivery_fee(&mut self, fee: f64) -> Result<(), AdminError> {
        self.ensure_unlocked()?;
        if !fee.is_finite() || fee < 0.0 {
            return Err(AdminError::InvalidValue(format!("delivery fee {}", fee)));
        }
        self.take_snapshot();
        self.settings.delivery_fee = fee;
        Ok(())
    }

    pub fn set_owner_email(&mut self, email: impl Into<String>) -> Result<(), AdminError> {
        self.ensure_unlocked()?;
        self.take_snapshot();
        self.settings.owner_email = email.into();
        Ok(())
    }

    /// Edits one draft product. A category must be one of the configured categories.
    pub fn update_product(&mut self, sku: &str, patch: ProductPatch) -> Result<&Product, AdminError> {
        self.ensure_unlocked()?;
        let index = self.products.iter().position(|p| p.sku == sku)
            .ok_or_else(|| AdminError::UnknownProduct(sku.to_string()))?;
        if let Some(category) = &patch.category {
            if !self.settings.categories.contains(category) {
                return Err(AdminError::InvalidCategory(category.clone()));
            }
        }

        let mut edited = self.products[index].clone();
        edited.on_update(patch).map_err(|e| AdminError::InvalidValue(e.to_string()))?;

        self.take_snapshot();
        self.products[index] = edited;
        Ok(&self.products[index])
    }

    /// Adds a category (trimmed, upper-cased). Returns `false` if it already existed.
    pub fn add_category(&mut self, name: &str) -> Result<bool, AdminError> {
        self.ensure_unlocked()?;
        let name = normalize_category(name)?;
        if self.settings.categories.contains(&name) {
            return Ok(false);
        }
        self.take_snapshot();
        self.settings.categories.push(name);
        Ok(true)
    }

    /// Renames a category in the list and on every product that uses it.
    ///
    /// Returns `false` when the new name equals the old one.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<bool, AdminError> {
        self.ensure_unlocked()?;
        let new = normalize_category(new)?;
        if new == old {
            return Ok(false);
        }
        let index = self.settings.categories.iter().position(|c| c == old)
            .ok_or_else(|| AdminError::InvalidCategory(old.to_string()))?;
        if self.settings.categories.contains(&new) {
            return Err(AdminError::InvalidCategory(new));
        }

        self.take_snapshot();
        self.settings.categories[index] = new.clone();
        for product in self.products.iter_mut().filter(|p| p.category == old) {
            product.category = new.clone();
        }
        Ok(true)
    }

    pub fn remove_category(&mut self, category: &str) -> Result<(), AdminError> {
        self.ensure_unlocked()?;
        if self.category_in_use(category) {
            return Err(AdminError::CategoryInUse(category.to_string()));
        }
        let index = self.settings.categories.iter().position(|c| c == category)
            .ok_or_else(|| AdminError::InvalidCategory(category.to_string()))?;
        self.take_snapshot();
        self.settings.categories.remove(index);
        Ok(())
    }

    /// Restores the state from before the first edit. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, AdminError> {
        self.ensure_unlocked()?;
        match self.snapshot.take() {
            Some((settings, products)) => {
                self.settings = settings;
                self.products = products;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Unlocks the console, or locks it and returns the changes to persist.
    pub fn toggle_lock(&mut self) -> Option<AdminCommit> {
        if self.locked {
            self.locked = false;
            info!("Admin console unlocked");
            return None;
        }

        self.locked = true;
        self.snapshot = None;
        self.settings.is_locked = true;
        let changed: Vec<Product> = self.products
            .iter()
            .filter(|p| !self.baseline.contains(p))
            .cloned()
            .collect();
        self.baseline = self.products.clone();
        info!(changed_products = changed.len(), "Admin console locked");
        Some(AdminCommit { settings: self.settings.clone(), products: changed })
    }
}
