use std::collections::HashSet;

/// A fragrance shown in the product grid
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: f64,
    pub image: &'static str,
    pub notes: &'static str,
}

/// Errors found while checking the built-in catalog
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Product {id} has an invalid price: {price}")]
    InvalidPrice { id: u32, price: f64 },
    #[error("Product {0} has an empty name")]
    EmptyName(u32),
    #[error("Product {0} has an empty image URL")]
    EmptyProductImage(u32),
    #[error("Duplicate product id: {0}")]
    DuplicateId(u32),
    #[error("Marquee image {0} has an empty URL")]
    EmptyMarqueeImage(usize),
}

pub static PRODUCTS: [Product; 3] = [
    Product {
        id: 1,
        name: "Yara Pink",
        price: 270.0,
        image: "https://picsum.photos/id/1011/600/800",
        notes: "Sweet Orchid • Vanilla • Tropical Fruits",
    },
    Product {
        id: 2,
        name: "9pm Rebel",
        price: 280.0,
        image: "https://picsum.photos/id/1059/600/800",
        notes: "Bergamot • Wild Lavender • Amber Woods",
    },
    Product {
        id: 3,
        name: "Club de Nuit Iconic",
        price: 270.0,
        image: "https://picsum.photos/id/1027/600/800",
        notes: "Lemon • Ginger • Mint • Grapefruit",
    },
];

pub static MARQUEE_IMAGES: [&str; 5] = [
    "https://pngimg.com/uploads/perfume/perfume_PNG10275.png",
    "https://pngimg.com/uploads/perfume/perfume_PNG10281.png",
    "https://pngimg.com/uploads/perfume/perfume_PNG10252.png",
    "https://pngimg.com/uploads/perfume/perfume_PNG10234.png",
    "https://pngimg.com/uploads/perfume/perfume_PNG10237.png",
];

/// How many times the marquee strip repeats the image list so the wrap point is seamless
pub const MARQUEE_REPEAT: usize = 4;

pub const HERO_IMAGE: &str = "https://pngimg.com/uploads/perfume/perfume_PNG10275.png";

pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1595425970377-c9703cf48b6d?q=80&w=2574&auto=format&fit=crop";

/// The marquee image list repeated `MARQUEE_REPEAT` times, in order
pub fn marquee_sequence<'a>(images: &[&'a str]) -> Vec<&'a str> {
    images
        .iter()
        .copied()
        .cycle()
        .take(images.len() * MARQUEE_REPEAT)
        .collect()
}

/// Price label as shown on a card, e.g. `$270`
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${}", price as u64)
    } else {
        format!("${:.2}", price)
    }
}

/// Check the only invariants the catalog carries: non-negative prices,
/// non-empty names and URLs, unique ids.
pub fn validate_catalog(products: &[Product], images: &[&str]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for product in products {
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::InvalidPrice {
                id: product.id,
                price: product.price,
            });
        }
        if product.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(product.id));
        }
        if product.image.trim().is_empty() {
            return Err(CatalogError::EmptyProductImage(product.id));
        }
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
    }

    if let Some(index) = images.iter().position(|url| url.trim().is_empty()) {
        return Err(CatalogError::EmptyMarqueeImage(index));
    }

    Ok(())
}
