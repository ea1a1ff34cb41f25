//! Seed catalog loaded at startup.
//!
//! The service holds no persistence, so every boot starts from this list.

use crate::domain::product::Product;
use crate::infra::id;

fn product(
    name: &str,
    category: &str,
    description: &str,
    price: f64,
    stock: f64,
    rating: f64,
) -> Product {
    Product {
        id: id::generate(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price,
        stock,
        rating: Some(rating),
        image: Some("https://via.placeholder.com/150".to_string()),
    }
}

/// The initial product catalog (10+ items, matching the demo storefront).
pub fn initial_products() -> Vec<Product> {
    vec![
        product(
            "Acer Aspire 5 Laptop",
            "Laptops",
            "15.6\" IPS, Intel Core i5, 8GB RAM, 512GB SSD",
            54990.0,
            12.0,
            4.5,
        ),
        product(
            "Xiaomi Redmi Note 11",
            "Smartphones",
            "6.43\" AMOLED, 128GB, 4GB RAM",
            19990.0,
            25.0,
            4.3,
        ),
        product(
            "Samsung Galaxy Tab A8",
            "Tablets",
            "10.5\" TFT, 64GB, 4GB RAM",
            17990.0,
            8.0,
            4.2,
        ),
        product(
            "JBL Tune 510BT Headphones",
            "Accessories",
            "Bluetooth, wireless, built-in microphone",
            3290.0,
            40.0,
            4.6,
        ),
        product(
            "LG 24MK600M Monitor",
            "Monitors",
            "24\" IPS, FullHD, FreeSync",
            13990.0,
            6.0,
            4.4,
        ),
        product(
            "Logitech K380 Keyboard",
            "Accessories",
            "Bluetooth, compact, tablet-friendly",
            3490.0,
            18.0,
            4.7,
        ),
        product(
            "Logitech MX Master 3 Mouse",
            "Accessories",
            "Wireless, touch scroll wheel",
            7990.0,
            10.0,
            4.8,
        ),
        product(
            "WD 1TB External Drive",
            "Storage",
            "USB 3.0, black",
            4990.0,
            22.0,
            4.5,
        ),
        product(
            "TP-Link Archer AX10 Router",
            "Networking",
            "Wi-Fi 6, 4 ports",
            3990.0,
            14.0,
            4.2,
        ),
        product(
            "Huawei Watch GT 3",
            "Gadgets",
            "46mm, GPS, heart-rate monitor",
            14990.0,
            5.0,
            4.6,
        ),
        product(
            "Sony PlayStation 5",
            "Gaming",
            "Digital Edition, 825GB",
            49990.0,
            2.0,
            4.9,
        ),
    ]
}
