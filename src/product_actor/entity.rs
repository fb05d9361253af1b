use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Product, ProductCreate, ProductPatch};
use super::actions::{ProductAction, ProductActionResult};

fn check_price(price: f64) -> Result<(), FrameworkError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(FrameworkError::Rejected(format!("price must be a non-negative amount, got {}", price)))
    }
}

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &String { &self.sku }

    fn natural_id(params: &ProductCreate) -> Option<String> {
        Some(params.sku.clone())
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Rejects an empty SKU or name and negative or non-finite prices.
    fn from_create_params(sku: String, params: ProductCreate) -> Result<Self, FrameworkError> {
        if sku.trim().is_empty() {
            return Err(FrameworkError::Rejected("sku is required".to_string()));
        }
        if params.name.trim().is_empty() {
            return Err(FrameworkError::Rejected(format!("name is required for {}", sku)));
        }
        check_price(params.price)?;
        Ok(Self {
            sku,
            name: params.name,
            price: params.price,
            category: params.category,
            image_url: params.image_url,
            active: params.active,
            description: params.description,
        })
    }

    /// Applies an admin edit. Fields left as `None` are untouched.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), FrameworkError> {
        if let Some(price) = patch.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, FrameworkError> {
        match action {
            ProductAction::CheckSellable => {
                Ok(ProductActionResult::Sellable(self.active))
            }
            ProductAction::SetActive(active) => {
                let changed = self.active != active;
                self.active = active;
                Ok(ProductActionResult::ActiveChanged(changed))
            }
        }
    }
}
