/// Custom actions for Product entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond standard CRUD operations.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reports whether the product can currently be sold.
    CheckSellable,
    /// Activates or archives the product.
    SetActive(bool),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    Sellable(bool),
    /// `true` when the flag actually changed.
    ActiveChanged(bool),
}
