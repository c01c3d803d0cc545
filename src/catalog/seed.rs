//! Built-in demo catalog used when no catalog file is configured.

use super::models::{Category, Product, Shipping, Variant, Vendor};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).single().unwrap_or_default()
}

fn vendor(id: &str, name: &str, rating: f64) -> Vendor {
    Vendor { id: id.to_string(), name: name.to_string(), rating, verified: true }
}

fn variant(id: &str, name: &str, options: &[&str], price_modifier: Option<f64>) -> Variant {
    Variant {
        id: id.to_string(),
        name: name.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        price_modifier,
    }
}

fn specs(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
    Some(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Returns the four demo products, in catalog order.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "prod_1".to_string(),
            name: "Premium Wireless Headphones".to_string(),
            description: "Experience superior sound quality with our premium wireless headphones \
                          featuring active noise cancellation, 30-hour battery life, and premium comfort."
                .to_string(),
            price: 199.99,
            compare_price: Some(249.99),
            images: strings(&[
                "https://images.unsplash.com/photo-1609255386725-b9b6a8ad829c?w=800&h=800&fit=crop",
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800&h=800&fit=crop",
            ]),
            category: Category::new("cat_electronics", "Electronics"),
            vendor: vendor("vendor_1", "TechStore Inc", 4.8),
            stock_quantity: 50,
            average_rating: 4.7,
            total_reviews: 1248,
            tags: strings(&["bluetooth", "wireless", "noise-cancellation", "premium"]),
            featured: true,
            specifications: specs(&[
                ("Battery Life", "30 hours"),
                ("Connectivity", "Bluetooth 5.0"),
                ("Driver Size", "40mm"),
                ("Frequency Response", "20Hz - 20kHz"),
                ("Weight", "250g"),
            ]),
            variants: Some(vec![variant("color", "Color", &["Black", "White", "Navy Blue"], None)]),
            shipping: Some(Shipping { free: true, cost: 0.0, estimated_days: 2 }),
            created_at: day(1),
            updated_at: day(15),
        },
        Product {
            id: "prod_2".to_string(),
            name: "MacBook Pro 16-inch".to_string(),
            description: "The most powerful MacBook Pro ever, featuring the M3 Pro or M3 Max chip, \
                          incredible performance, and up to 22 hours of battery life."
                .to_string(),
            price: 2399.99,
            compare_price: Some(2599.99),
            images: strings(&[
                "https://images.unsplash.com/photo-1737868131581-6379cdee4ec3?w=800&h=800&fit=crop",
                "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=800&h=800&fit=crop",
            ]),
            category: Category::new("cat_computers", "Computers"),
            vendor: vendor("vendor_2", "Apple Authorized", 4.9),
            stock_quantity: 25,
            average_rating: 4.9,
            total_reviews: 856,
            tags: strings(&["laptop", "apple", "macbook", "professional"]),
            featured: true,
            specifications: specs(&[
                ("Processor", "Apple M3 Pro chip"),
                ("Memory", "18GB unified memory"),
                ("Storage", "512GB SSD"),
                ("Display", "16.2-inch Liquid Retina XDR"),
                ("Battery", "Up to 22 hours"),
            ]),
            variants: Some(vec![
                variant("storage", "Storage", &["512GB", "1TB", "2TB"], Some(200.0)),
                variant("color", "Color", &["Space Gray", "Silver"], None),
            ]),
            shipping: Some(Shipping { free: true, cost: 0.0, estimated_days: 1 }),
            created_at: day(2),
            updated_at: day(16),
        },
        Product {
            id: "prod_3".to_string(),
            name: "iPhone 15 Pro Max".to_string(),
            description: "The ultimate iPhone with titanium design, advanced camera system, \
                          and A17 Pro chip for incredible performance."
                .to_string(),
            price: 1199.99,
            compare_price: Some(1299.99),
            images: strings(&[
                "https://images.unsplash.com/photo-1640936343842-268f9d87e764?w=800&h=800&fit=crop",
                "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800&h=800&fit=crop",
            ]),
            category: Category::new("cat_phones", "Smartphones"),
            vendor: vendor("vendor_2", "Mobile World", 4.6),
            stock_quantity: 30,
            average_rating: 4.6,
            total_reviews: 2341,
            tags: strings(&["smartphone", "iphone", "apple", "pro"]),
            featured: true,
            specifications: specs(&[
                ("Processor", "A17 Pro chip"),
                ("Storage", "256GB"),
                ("Display", "6.7-inch Super Retina XDR"),
                ("Camera", "48MP Main + 12MP Ultra Wide"),
                ("Battery", "All-day battery life"),
            ]),
            variants: Some(vec![
                variant("storage", "Storage", &["256GB", "512GB", "1TB"], Some(100.0)),
                variant(
                    "color",
                    "Color",
                    &["Natural Titanium", "Blue Titanium", "White Titanium", "Black Titanium"],
                    None,
                ),
            ]),
            shipping: Some(Shipping { free: true, cost: 0.0, estimated_days: 1 }),
            created_at: day(3),
            updated_at: day(17),
        },
        Product {
            id: "prod_4".to_string(),
            name: "Premium Gaming Chair".to_string(),
            description: "Ergonomic gaming chair with lumbar support, adjustable armrests, \
                          and premium leather finish for ultimate comfort."
                .to_string(),
            price: 299.99,
            compare_price: Some(399.99),
            images: strings(&[
                "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=800&h=800&fit=crop",
            ]),
            category: Category::new("cat_furniture", "Furniture"),
            vendor: vendor("vendor_3", "Comfort Zone", 4.4),
            stock_quantity: 15,
            average_rating: 4.3,
            total_reviews: 567,
            tags: strings(&["gaming", "chair", "ergonomic", "office"]),
            featured: false,
            specifications: specs(&[
                ("Material", "Premium PU Leather"),
                ("Weight Capacity", "300 lbs"),
                ("Height Adjustment", "16\" - 20\""),
                ("Armrests", "Adjustable"),
                ("Recline", "90° - 160°"),
            ]),
            variants: Some(vec![variant("color", "Color", &["Black", "Red", "Blue", "White"], None)]),
            shipping: Some(Shipping { free: false, cost: 49.99, estimated_days: 5 }),
            created_at: day(4),
            updated_at: day(18),
        },
    ]
}
