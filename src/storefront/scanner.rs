use thiserror::Error;
use crate::domain::Product;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScanError {
    #[error("No image data to scan")]
    EmptyImage,
    #[error("No active items available to match")]
    NoActiveProducts,
}

/// One product recognised on a scanned menu photo.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedItem {
    pub sku: String,
    pub qty: u32,
}

/// Stand-in for photo recognition: derives picks from the image bytes.
///
/// The same image always yields the same picks. With `h = len + first byte + last byte`,
/// it picks `h % 3 + 1` consecutive active products starting at `h % active`, wrapping
/// around the catalog; pick `i` gets quantity `(h + i) % 2 + 1`.
pub fn scan(image: &[u8], catalog: &[Product]) -> Result<Vec<ScannedItem>, ScanError> {
    let (Some(&first), Some(&last)) = (image.first(), image.last()) else {
        return Err(ScanError::EmptyImage);
    };
    let active: Vec<&Product> = catalog.iter().filter(|p| p.active).collect();
    if active.is_empty() {
        return Err(ScanError::NoActiveProducts);
    }

    let hash = image.len() + first as usize + last as usize;
    let pick_count = hash % 3 + 1;
    let start = hash % active.len();

    Ok((0..pick_count)
        .map(|i| ScannedItem {
            sku: active[(start + i) % active.len()].sku.clone(),
            qty: ((hash + i) % 2 + 1) as u32,
        })
        .collect())
}
