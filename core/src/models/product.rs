// core/src/models/product.rs

use serde::{Deserialize, Serialize};

/// The fixed set of tape categories carried by the catalog.
///
/// Serialized as kebab-case slugs (`double-sided`); each variant carries a
/// human display label so views never string-match on slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
  Invisible,
  Packing,
  DoubleSided,
  Duct,
  Masking,
  Electrical,
  Painting,
  Mounting,
}

impl Category {
  /// Every category, in the order the listing view offers them as filters.
  pub const ALL: [Category; 8] = [
    Category::Invisible,
    Category::Packing,
    Category::DoubleSided,
    Category::Duct,
    Category::Masking,
    Category::Electrical,
    Category::Painting,
    Category::Mounting,
  ];

  /// The URL/query slug for this category.
  pub fn slug(&self) -> &'static str {
    match self {
      Category::Invisible => "invisible",
      Category::Packing => "packing",
      Category::DoubleSided => "double-sided",
      Category::Duct => "duct",
      Category::Masking => "masking",
      Category::Electrical => "electrical",
      Category::Painting => "painting",
      Category::Mounting => "mounting",
    }
  }

  /// The display label shown in filter buttons and on the detail view.
  pub fn label(&self) -> &'static str {
    match self {
      Category::Invisible => "Invisible",
      Category::Packing => "Packing",
      Category::DoubleSided => "Double-Sided",
      Category::Duct => "Duct",
      Category::Masking => "Masking",
      Category::Electrical => "Electrical",
      Category::Painting => "Painting",
      Category::Mounting => "Mounting",
    }
  }

  /// Parses a slug back into a category. `None` for anything unknown.
  pub fn from_slug(slug: &str) -> Option<Category> {
    Category::ALL.iter().copied().find(|c| c.slug() == slug)
  }
}

impl std::fmt::Display for Category {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.slug())
  }
}

/// One catalog entry. Immutable and compiled in; prices are integral
/// centavos (`8500` renders as `₱85.00`).
#[derive(Debug, Clone, Serialize)]
pub struct Product {
  pub id: u32,
  pub name: String,
  pub price_cents: i64,
  /// Short blurb shown on the listing cards.
  pub description: String,
  /// Extended copy shown only on the detail view.
  pub details: String,
  pub image_url: String,
  pub category: Category,
}
