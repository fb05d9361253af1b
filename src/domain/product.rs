/// Category labels used by the demo café catalog.
pub mod category {
    pub const COMBO: &str = "COMBO";
    pub const DRINK: &str = "DRINK";
    pub const COFFEE: &str = "COFFEE";
    pub const TEA: &str = "TEA";
    pub const SNACK: &str = "SNACK";
}

/// A sellable item in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
    /// Whether the product can be sold right now. Archived products stay in the catalog.
    pub active: bool,
    pub description: Option<String>,
}

/// Params for adding a product to the catalog. The SKU doubles as the catalog key.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
    pub active: bool,
    pub description: Option<String>,
}

/// Partial update applied from the admin console.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
    pub description: Option<String>,
}

impl Product {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
            category: category.into(),
            image_url: None,
            active: true,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn archived(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn is_combo(&self) -> bool {
        self.category == category::COMBO
    }

    /// Patch that rewrites every editable field to this product's values.
    pub fn full_patch(&self) -> ProductPatch {
        ProductPatch {
            name: Some(self.name.clone()),
            price: Some(self.price),
            category: Some(self.category.clone()),
            image_url: self.image_url.clone(),
            active: Some(self.active),
            description: self.description.clone(),
        }
    }
}

impl From<Product> for ProductCreate {
    fn from(product: Product) -> Self {
        Self {
            sku: product.sku,
            name: product.name,
            price: product.price,
            category: product.category,
            image_url: product.image_url,
            active: product.active,
            description: product.description,
        }
    }
}

/// Filter for the regular (non-combo) menu grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

/// Active combos, in catalog order. These headline the storefront.
pub fn combos(catalog: &[Product]) -> Vec<&Product> {
    catalog.iter().filter(|p| p.active && p.is_combo()).collect()
}

/// Active non-combo products, optionally narrowed to a single category.
pub fn menu<'a>(catalog: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|p| p.active && !p.is_combo())
        .filter(|p| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &p.category == category,
        })
        .collect()
}
