// core/src/catalog.rs

//! The compiled-in product catalog. There is no load or parse step: the
//! eight products below are the entire inventory, constructed once at
//! startup and shared read-only for the life of the process.

use crate::models::product::{Category, Product};

/// Read-only product listing with lookup by id and filtering by category.
#[derive(Debug)]
pub struct Catalog {
  products: Vec<Product>,
}

fn p(id: u32, name: &str, price_cents: i64, description: &str, details: &str, category: Category) -> Product {
  Product {
    id,
    name: name.to_string(),
    price_cents,
    description: description.to_string(),
    details: details.to_string(),
    image_url: "https://images.unsplash.com/photo-1582735689369-4fe89db7114c?w=400&h=400&fit=crop".to_string(),
    category,
  }
}

impl Catalog {
  /// Builds the fixed tape-store inventory.
  pub fn built_in() -> Self {
    Catalog {
      products: vec![
        p(
          1,
          "3M Scotch Magic Tape",
          8500,
          "Premium invisible tape that disappears on paper. Perfect for documents, photos, and \
           crafts. Leaves no residue and won't yellow over time.",
          "This exceptional adhesive tape is designed with advanced technology that makes it \
           virtually invisible when applied to paper, making it ideal for professional \
           presentations, photo mounting, and delicate craft projects where appearance matters.",
          Category::Invisible,
        ),
        p(
          2,
          "Scotch Heavy Duty Packing Tape",
          12000,
          "Strong adhesive packing tape for heavy boxes and packages. Weather-resistant and \
           provides secure sealing for shipping and storage.",
          "This heavy-duty tape is engineered with reinforced backing and aggressive adhesive \
           that can withstand extreme temperatures, moisture, and rough handling during transit, \
           making it the perfect choice for e-commerce businesses and frequent movers.",
          Category::Packing,
        ),
        p(
          3,
          "Scotch Double-Sided Tape",
          9500,
          "Versatile double-sided adhesive tape for mounting, crafting, and DIY projects. Strong \
           bond with easy application.",
          "This innovative tape features adhesive on both sides, allowing for clean mounting of \
           posters, signs, and decorative items without visible tape or hardware, making it \
           perfect for home decor and professional installations.",
          Category::DoubleSided,
        ),
        p(
          4,
          "Scotch Duct Tape",
          15000,
          "Heavy-duty duct tape for repairs, sealing, and temporary fixes. Water-resistant and \
           extremely durable for various applications.",
          "This industrial-strength tape is made with reinforced fabric backing and aggressive \
           adhesive that can bond to almost any surface, making it essential for emergency \
           repairs, construction projects, and outdoor applications.",
          Category::Duct,
        ),
        p(
          5,
          "Scotch Masking Tape",
          6500,
          "Low-tack masking tape for painting, labeling, and temporary adhesion. Easy to remove \
           without damaging surfaces.",
          "This gentle adhesive tape is specifically designed for temporary applications where \
           clean removal is essential, making it perfect for painting projects, temporary \
           labeling, and delicate surface protection.",
          Category::Masking,
        ),
        p(
          6,
          "Scotch Electrical Tape",
          7500,
          "Insulating electrical tape for wire connections and electrical repairs. \
           Flame-retardant and weather-resistant.",
          "This specialized tape is engineered with electrical insulating properties and \
           flame-retardant materials, making it essential for electrical work, automotive \
           repairs, and any application requiring electrical insulation and protection.",
          Category::Electrical,
        ),
        p(
          7,
          "Scotch Painter's Tape",
          8000,
          "Professional painter's tape for clean paint lines and edge protection. Removes \
           cleanly without leaving residue.",
          "This precision-engineered tape features advanced adhesive technology that provides \
           clean paint lines while ensuring easy removal without damaging underlying surfaces, \
           making it the choice of professional painters and DIY enthusiasts.",
          Category::Painting,
        ),
        p(
          8,
          "Scotch Mounting Tape",
          11000,
          "Heavy-duty mounting tape for hanging pictures, mirrors, and decorations. Strong \
           adhesive with easy application.",
          "This specialized mounting tape is designed with industrial-strength adhesive that can \
           securely hold heavy items like mirrors, picture frames, and decorative objects \
           without the need for nails or screws, making it perfect for damage-free mounting.",
          Category::Mounting,
        ),
      ],
    }
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  /// Looks up a product by id. `None` for ids not in the catalog.
  pub fn get(&self, id: u32) -> Option<&Product> {
    self.products.iter().find(|product| product.id == id)
  }

  /// All products in the given category, in catalog order.
  pub fn by_category(&self, category: Category) -> Vec<&Product> {
    self
      .products
      .iter()
      .filter(|product| product.category == category)
      .collect()
  }
}
