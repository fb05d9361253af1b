use crate::domain::{category, Product};

fn photo(id: &str, width: u32) -> Option<String> {
    Some(format!("https://images.unsplash.com/photo-{}?q=80&w={}&auto=format&fit=crop", id, width))
}

/// The café's opening menu, loaded into a fresh catalog.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            image_url: photo("1533089860892-a7c6f0a88666", 800),
            ..Product::new("CMB-01", "Golden Morning Combo", 8.50, category::COMBO)
                .with_description("Espresso, Avocado Toast, and a Fresh Fruit Bowl.")
        },
        Product {
            image_url: photo("1547592166-23ac45744acd", 800),
            ..Product::new("CMB-02", "Executive Lunch", 12.90, category::COMBO)
                .with_description("Grilled Salmon, Quinoa Salad, and Sparkling Water.")
        },
        Product {
            image_url: photo("1495474472287-4d71bcdd2085", 800),
            ..Product::new("CMB-03", "Artisan Coffee Flight", 9.20, category::COMBO)
                .with_description("Three single-origin roasts with almond biscotti.")
        },
        Product {
            image_url: photo("1559622214-f8a9850965bb", 800),
            ..Product::new("CMB-04", "Sweet Afternoon", 7.50, category::COMBO)
                .with_description("Latte with a handcrafted pistachio macaron.")
        },
        Product {
            image_url: photo("1517701604599-bb29b565090c", 400),
            ..Product::new("DRK-01", "Midnight Cold Brew", 4.50, category::COFFEE)
        },
        Product {
            image_url: photo("1515823064-d6e0c04616a7", 400),
            ..Product::new("DRK-02", "Matcha Zen Latte", 5.20, category::TEA)
        },
        Product {
            image_url: photo("1573016608244-7d5f17136f86", 400),
            ..Product::new("SNK-01", "Truffle Fries", 6.00, category::SNACK)
        },
        Product {
            image_url: photo("1581451006509-0d268595462f", 400),
            ..Product::new("SNK-02", "Artisan Scone", 3.50, category::SNACK)
        },
        Product {
            image_url: photo("1556679343-c7306c1976bc", 400),
            ..Product::new("DRK-03", "Sparkling Hibiscus", 4.00, category::DRINK)
        },
    ]
}
