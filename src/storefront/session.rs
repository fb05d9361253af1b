use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use crate::app_system::{StoreClients, StoreError};
use crate::domain::{
    self, AdminSettings, Cart, CategoryFilter, Credentials, CustomerDetails, Invoice, Order, Product,
    UserProfile,
};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::recommend::{recommend_with, ComplementRules};
use crate::settings_actor::SettingsError;
use crate::user_actor::UserError;
use super::admin::{AdminCommit, AdminConsole, AdminError};
use super::scanner::{scan, ScannedItem};

/// One shopper's view of the store: who is signed in and what is in the cart.
///
/// Catalog, settings and order state live in the actors; the session only holds
/// client handles and passes snapshots into the pure modules.
pub struct Session {
    clients: StoreClients,
    rules: ComplementRules,
    prep_delay: Duration,
    user: Option<UserProfile>,
    cart: Cart,
    delivery_fee_override: Option<f64>,
}

impl Session {
    pub fn new(clients: StoreClients, rules: ComplementRules, prep_delay: Duration) -> Self {
        Self {
            clients,
            rules,
            prep_delay,
            user: None,
            cart: Cart::new(),
            delivery_fee_override: None,
        }
    }

    // --- Sign-in ---

    pub async fn sign_in(&mut self, credentials: Credentials) -> Result<&UserProfile, StoreError> {
        let user = self.clients.users.sign_in(&credentials).await?;
        Ok(self.user.insert(user))
    }

    /// Forgets the shopper. The cart is kept.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "Signed out");
        }
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    fn signed_in_user(&self) -> Result<&UserProfile, UserError> {
        self.user.as_ref().ok_or(UserError::NotSignedIn)
    }

    /// Reloads the profile, e.g. to pick up order history.
    pub async fn refresh_user(&mut self) -> Result<&UserProfile, StoreError> {
        let id = self.signed_in_user()?.id.clone();
        let user = self.clients.users.get_user(id.clone()).await?
            .ok_or(UserError::NotFound(id))?;
        Ok(self.user.insert(user))
    }

    // --- Browsing ---

    pub async fn catalog(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.clients.products.list_products().await?)
    }

    pub async fn combos(&self) -> Result<Vec<Product>, StoreError> {
        let catalog = self.catalog().await?;
        Ok(domain::combos(&catalog).into_iter().cloned().collect())
    }

    pub async fn menu(&self, filter: &CategoryFilter) -> Result<Vec<Product>, StoreError> {
        let catalog = self.catalog().await?;
        Ok(domain::menu(&catalog, filter).into_iter().cloned().collect())
    }

    pub async fn categories(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.clients.settings.get_settings().await?.categories)
    }

    // --- Cart ---

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Changes the quantity of `sku` by `delta` and returns the new quantity.
    ///
    /// Adding requires an active catalog product. Removing works from the cart line
    /// alone, so archived products can still be taken out.
    #[instrument(skip(self))]
    pub async fn update_cart(&mut self, sku: &str, delta: i32) -> Result<u32, StoreError> {
        if delta <= 0 {
            let Some(line) = self.cart.get(sku).cloned() else {
                return Ok(0);
            };
            return Ok(self.cart.update(&line, delta));
        }

        let product = self.clients.products.get_product(sku.to_string()).await?
            .ok_or_else(|| ProductError::NotFound(sku.to_string()))?;
        if !product.active {
            warn!("Archived product cannot be added");
            return Err(ProductError::Unavailable(sku.to_string()).into());
        }
        let qty = self.cart.update(&product, delta);
        debug!(qty, "Cart updated");
        Ok(qty)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Complementary suggestions for the current cart, from the live catalog.
    pub async fn recommendations(&self) -> Result<Vec<Product>, StoreError> {
        if self.cart.is_empty() {
            return Ok(Vec::new());
        }
        let catalog = self.catalog().await?;
        Ok(recommend_with(&self.rules, self.cart.items(), &catalog).into_iter().cloned().collect())
    }

    // --- Invoice and checkout ---

    /// Overrides the delivery fee for this session only; the stored settings are untouched.
    pub fn set_delivery_fee(&mut self, fee: f64) -> Result<(), StoreError> {
        if !fee.is_finite() || fee < 0.0 {
            return Err(SettingsError::Invalid(format!("Delivery fee must be non-negative, got {}", fee)).into());
        }
        self.delivery_fee_override = Some(fee);
        Ok(())
    }

    async fn effective_settings(&self) -> Result<AdminSettings, StoreError> {
        let mut settings = self.clients.settings.get_settings().await?;
        if let Some(fee) = self.delivery_fee_override {
            settings.delivery_fee = fee;
        }
        Ok(settings)
    }

    pub async fn invoice(&self) -> Result<Invoice, StoreError> {
        let settings = self.effective_settings().await?;
        Ok(self.cart.invoice(&settings))
    }

    /// Places the order for the current cart. The cart is emptied on success.
    #[instrument(skip(self, customer))]
    pub async fn checkout(&mut self, customer: CustomerDetails) -> Result<Order, StoreError> {
        let user_id = self.signed_in_user()?.id.clone();
        if self.cart.is_empty() {
            return Err(OrderError::EmptyCart.into());
        }
        let invoice = self.invoice().await?;

        let order = self.clients.orders
            .place_order(user_id, customer, invoice, self.prep_delay)
            .await?;

        self.cart.clear();
        info!(order_id = %order.id, "Checkout complete");

        // Order already placed; a stale profile only misses the new history entry.
        if let Err(e) = self.refresh_user().await {
            warn!(error = %e, "Profile refresh after checkout failed");
        }
        Ok(order)
    }

    /// Replaces the cart with the lines of a past order, at the prices paid back then.
    pub fn reorder(&mut self, order_id: &str) -> Result<usize, StoreError> {
        let order = self.signed_in_user()?
            .find_order(order_id)
            .cloned()
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        self.cart.clear();
        for item in &order.items {
            self.cart.set_line(item, item.qty);
        }
        Ok(self.cart.line_count())
    }

    /// Adds whatever the scanner recognises in `image` to the cart.
    #[instrument(skip(self, image), fields(bytes = image.len()))]
    pub async fn scan_menu(&mut self, image: &[u8]) -> Result<Vec<ScannedItem>, StoreError> {
        let catalog = self.catalog().await?;
        let found = scan(image, &catalog)?;
        for item in &found {
            if let Some(product) = catalog.iter().find(|p| p.sku == item.sku) {
                self.cart.update(product, item.qty as i32);
            }
        }
        info!(items = found.len(), "Menu scanned");
        Ok(found)
    }

    // --- Admin ---

    pub async fn open_admin(&self) -> Result<AdminConsole, StoreError> {
        let user = self.signed_in_user()?;
        if !user.is_owner() {
            return Err(AdminError::Forbidden.into());
        }
        let settings = self.clients.settings.get_settings().await?;
        let catalog = self.catalog().await?;
        Ok(AdminConsole::open(user, settings, catalog)?)
    }

    /// Writes a locked console's changes back to the settings and catalog actors.
    #[instrument(skip(self, commit), fields(products = commit.products.len()))]
    pub async fn commit_admin(&self, commit: AdminCommit) -> Result<(), StoreError> {
        if !self.signed_in_user()?.is_owner() {
            return Err(AdminError::Forbidden.into());
        }
        self.clients.settings.save_settings(commit.settings).await?;
        for product in &commit.products {
            self.clients.products
                .update_product(product.sku.clone(), product.full_patch())
                .await?;
        }
        info!("Admin changes saved");
        Ok(())
    }
}
