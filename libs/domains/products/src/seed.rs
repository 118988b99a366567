use crate::models::CreateProduct;

/// The fixed demo catalog inserted by the seed endpoint
pub fn sample_products() -> Vec<CreateProduct> {
    vec![
        sample(
            "Minimal Tee",
            "Soft cotton t‑shirt with relaxed fit.",
            24.00,
            "Apparel",
            "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?q=80&w=800&auto=format&fit=crop",
        ),
        sample(
            "Everyday Backpack",
            "Water‑resistant with laptop sleeve.",
            79.00,
            "Bags",
            "https://images.unsplash.com/photo-1547949003-9792a18a2601?q=80&w=800&auto=format&fit=crop",
        ),
        sample(
            "Ceramic Mug",
            "12oz glazed mug for hot and cold drinks.",
            14.00,
            "Home",
            "https://images.unsplash.com/photo-1520975661595-6453be3f7070?q=80&w=800&auto=format&fit=crop",
        ),
        sample(
            "Running Sneakers",
            "Breathable mesh, cushioned sole.",
            110.00,
            "Footwear",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=800&auto=format&fit=crop",
        ),
    ]
}

fn sample(title: &str, description: &str, price: f64, category: &str, image: &str) -> CreateProduct {
    CreateProduct {
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock: true,
        image: Some(image.to_string()),
    }
}
