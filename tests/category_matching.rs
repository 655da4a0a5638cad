use std::collections::HashSet;
use emoji_map::{CategoryCodec, CategoryEntry, COFFEE_KEY};

const PIZZA: u32 = 1;
const BEER: u32 = 2;
const SUSHI: u32 = 3;
const CROISSANT: u32 = 22;

fn selected(keys: &[u32]) -> HashSet<u32> {
    keys.iter().copied().collect()
}

#[test]
fn pizza_and_beer_place() {
    let codec = CategoryCodec::shared();
    assert!(codec.place_matches_any_category("🍕🍺", &selected(&[PIZZA])));
    assert!(codec.place_matches_any_category("🍕🍺", &selected(&[BEER])));
    assert!(!codec.place_matches_any_category("🍕🍺", &selected(&[SUSHI])));
}

#[test]
fn coffee_shop_matches_with_or_without_selector() {
    let codec = CategoryCodec::shared();
    let coffee = selected(&[COFFEE_KEY]);
    assert!(codec.place_matches_any_category("\u{2615}", &coffee));
    assert!(codec.place_matches_any_category("\u{2615}\u{FE0F}", &coffee));
    assert!(codec.place_matches_any_category("🥐\u{2615}\u{FE0F}🍦", &coffee));
}

#[test]
fn ids_from_cafe_string() {
    let codec = CategoryCodec::shared();
    let ids = codec.category_ids_from_emoji_string("🥐\u{2615}\u{FE0F}");
    assert!(ids.contains(&COFFEE_KEY));
    assert!(ids.contains(&CROISSANT));
    assert_eq!(ids.len(), 2);
}

#[test]
fn shared_table_is_built_once() {
    let first = CategoryCodec::shared() as *const CategoryCodec;
    let second = CategoryCodec::shared() as *const CategoryCodec;
    assert_eq!(first, second);
}

#[test]
fn custom_table_loaded_from_json() {
    let entries: Vec<CategoryEntry> =
        serde_json::from_str(r#"[{"key": 1, "emoji": "🍩"}, {"key": 2, "emoji": "🧋"}]"#).unwrap();
    let codec = CategoryCodec::from_entries(entries).unwrap();
    assert_eq!(codec.key_for_emoji("🧋"), Some(2));
    assert_eq!(codec.emoji_for_key(1), Some("🍩"));
    assert_eq!(codec.coffee_key(), None);
    assert!(!codec.place_matches_any_category("\u{2615}", &selected(&[1, 2])));
}
