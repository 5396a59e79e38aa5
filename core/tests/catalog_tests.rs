// tests/catalog_tests.rs

use std::collections::HashSet;

use tapestore::{Catalog, Category};

#[test]
fn built_in_catalog_has_eight_products_with_unique_ids() {
  let catalog = Catalog::built_in();
  assert_eq!(catalog.products().len(), 8);

  let ids: HashSet<u32> = catalog.products().iter().map(|p| p.id).collect();
  assert_eq!(ids.len(), 8);
}

#[test]
fn lookup_by_id_hits_and_misses() {
  let catalog = Catalog::built_in();

  let magic_tape = catalog.get(1).expect("product 1 should exist");
  assert_eq!(magic_tape.name, "3M Scotch Magic Tape");
  assert_eq!(magic_tape.price_cents, 8500);
  assert_eq!(magic_tape.category, Category::Invisible);

  assert!(catalog.get(0).is_none());
  assert!(catalog.get(999).is_none());
}

#[test]
fn every_category_is_represented() {
  let catalog = Catalog::built_in();
  for category in Category::ALL {
    assert!(
      !catalog.by_category(category).is_empty(),
      "no products in category {}",
      category
    );
  }
}

#[test]
fn category_filter_returns_only_matching_products() {
  let catalog = Catalog::built_in();
  let duct = catalog.by_category(Category::Duct);
  assert_eq!(duct.len(), 1);
  assert_eq!(duct[0].id, 4);
  assert!(duct.iter().all(|p| p.category == Category::Duct));
}

#[test]
fn prices_are_non_negative() {
  let catalog = Catalog::built_in();
  assert!(catalog.products().iter().all(|p| p.price_cents >= 0));
}
