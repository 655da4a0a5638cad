use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;
use crate::helpers::variation::strip_variation_selectors;
use crate::models::category::CategoryEntry;

/// Key of the coffee category in the built-in table.
pub const COFFEE_KEY: u32 = 4;

/// Both renderings of the coffee glyph seen in place strings. They do not
/// always survive per-grapheme lookup, so coffee gets matched on its own.
pub const COFFEE_FORMS: [&str; 2] = ["\u{2615}\u{FE0F}", "\u{2615}"];

const CATEGORY_TABLE: [(u32, &str); 25] = [
    (1, "🍕"),
    (2, "🍺"),
    (3, "🍣"),
    (4, "\u{2615}\u{FE0F}"),
    (5, "🍔"),
    (6, "🌮"),
    (7, "🍜"),
    (8, "🥗"),
    (9, "🍦"),
    (10, "🍷"),
    (11, "🍲"),
    (12, "🥪"),
    (13, "🍝"),
    (14, "🥩"),
    (15, "🍗"),
    (16, "🍤"),
    (17, "🍛"),
    (18, "🥘"),
    (19, "🍱"),
    (20, "🥟"),
    (21, "🧆"),
    (22, "🥐"),
    (23, "🍨"),
    (24, "🍹"),
    (25, "\u{1F37D}\u{FE0F}"),
];

/// (variant as it arrives, canonical form stored in the table)
const VARIANT_FORMS: [(&str, &str); 2] = [
    ("\u{2615}", "\u{2615}\u{FE0F}"),
    ("\u{1F37D}", "\u{1F37D}\u{FE0F}"),
];

static SHARED: Lazy<CategoryCodec> = Lazy::new(CategoryCodec::default);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryTableError {
    #[error("category keys must be positive")]
    InvalidKey,
    #[error("category {0} has no visible emoji")]
    EmptyEmoji(u32),
    #[error("category key {0} is used more than once")]
    DuplicateKey(u32),
    #[error("emoji {emoji} is claimed by categories {first} and {second}")]
    DuplicateEmoji {
        emoji: String,
        first: u32,
        second: u32,
    },
}

/// Bidirectional category table. Read-only once built.
#[derive(Clone, Debug)]
pub struct CategoryCodec {
    key_to_emoji: BTreeMap<u32, String>,
    emoji_to_key: HashMap<String, u32>,
    // selector-free form -> canonical form
    canonical_forms: HashMap<String, String>,
    coffee_key: Option<u32>,
}

impl Default for CategoryCodec {
    fn default() -> Self {
        Self::build(
            CATEGORY_TABLE
                .iter()
                .map(|(key, emoji)| (*key, emoji.to_string())),
        )
    }
}

impl CategoryCodec {
    /// The built-in table, constructed on first use and shared for the rest of
    /// the process.
    pub fn shared() -> &'static CategoryCodec {
        &SHARED
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = CategoryEntry>,
    ) -> Result<Self, CategoryTableError> {
        let mut seen_keys = HashSet::new();
        let mut seen_forms: HashMap<String, u32> = HashMap::new();
        let mut validated = Vec::new();

        for entry in entries {
            if entry.key == 0 {
                return Err(CategoryTableError::InvalidKey);
            }
            let bare = strip_variation_selectors(&entry.emoji).into_owned();
            if bare.trim().is_empty() {
                return Err(CategoryTableError::EmptyEmoji(entry.key));
            }
            if !seen_keys.insert(entry.key) {
                return Err(CategoryTableError::DuplicateKey(entry.key));
            }
            if let Some(first) = seen_forms.insert(bare, entry.key) {
                return Err(CategoryTableError::DuplicateEmoji {
                    emoji: entry.emoji,
                    first,
                    second: entry.key,
                });
            }
            validated.push((entry.key, entry.emoji));
        }

        Ok(Self::build(validated))
    }

    fn build(entries: impl IntoIterator<Item = (u32, String)>) -> Self {
        let mut key_to_emoji = BTreeMap::new();
        let mut emoji_to_key = HashMap::new();
        let mut canonical_forms = HashMap::new();

        for (key, emoji) in entries {
            canonical_forms.insert(strip_variation_selectors(&emoji).into_owned(), emoji.clone());
            emoji_to_key.insert(emoji.clone(), key);
            key_to_emoji.insert(key, emoji);
        }

        for (variant, canonical) in VARIANT_FORMS {
            if let Some(key) = emoji_to_key.get(canonical).copied() {
                emoji_to_key.entry(variant.to_string()).or_insert(key);
            }
        }

        let mut codec = Self {
            key_to_emoji,
            emoji_to_key,
            canonical_forms,
            coffee_key: None,
        };
        let coffee_key = COFFEE_FORMS
            .iter()
            .find_map(|form| codec.key_for_emoji(form));
        codec.coffee_key = coffee_key;
        codec
    }

    /// Canonical table form of `glyph`, whichever selector form it came in.
    pub fn canonical_form(&self, glyph: &str) -> Option<&str> {
        self.canonical_forms
            .get(strip_variation_selectors(glyph).as_ref())
            .map(String::as_str)
    }

    pub fn key_for_emoji(&self, glyph: &str) -> Option<u32> {
        if let Some(key) = self.emoji_to_key.get(glyph) {
            return Some(*key);
        }

        let key = self
            .canonical_form(glyph)
            .and_then(|canonical| self.emoji_to_key.get(canonical))
            .copied();
        if key.is_none() {
            trace!("No category for glyph {:?}", glyph);
        }
        key
    }

    pub fn emoji_for_key(&self, key: u32) -> Option<&str> {
        self.key_to_emoji.get(&key).map(String::as_str)
    }

    pub fn all_category_emojis(&self) -> BTreeSet<&str> {
        self.key_to_emoji.values().map(String::as_str).collect()
    }

    /// Canonical entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.key_to_emoji
            .iter()
            .map(|(key, emoji)| (*key, emoji.as_str()))
    }

    pub fn coffee_key(&self) -> Option<u32> {
        self.coffee_key
    }

    /// Whether `place_emojis` (one or more concatenated glyphs) carries any of
    /// the `selected` categories.
    pub fn place_matches_any_category(
        &self,
        place_emojis: &str,
        selected: &HashSet<u32>,
    ) -> bool {
        if selected.is_empty() || place_emojis.is_empty() {
            return false;
        }

        if let Some(coffee_key) = self.coffee_key {
            if selected.contains(&coffee_key) && contains_coffee(place_emojis) {
                return true;
            }
        }

        let selected_glyphs = move || {
            selected
                .iter()
                .filter_map(move |key| self.emoji_for_key(*key))
        };

        if selected_glyphs().any(|glyph| place_emojis.contains(glyph)) {
            return true;
        }

        if place_emojis
            .graphemes(true)
            .filter_map(|grapheme| self.key_for_emoji(grapheme))
            .any(|key| selected.contains(&key))
        {
            return true;
        }

        let normalized_place = strip_variation_selectors(place_emojis);
        selected_glyphs()
            .map(strip_variation_selectors)
            .any(|glyph| !glyph.is_empty() && normalized_place.contains(glyph.as_ref()))
    }

    pub fn category_ids_from_emoji_string(&self, place_emojis: &str) -> BTreeSet<u32> {
        let mut keys: BTreeSet<u32> = place_emojis
            .graphemes(true)
            .filter_map(|grapheme| self.key_for_emoji(grapheme))
            .collect();

        if let Some(coffee_key) = self.coffee_key {
            if contains_coffee(place_emojis) {
                keys.insert(coffee_key);
            }
        }
        keys
    }
}

fn contains_coffee(place_emojis: &str) -> bool {
    COFFEE_FORMS.iter().any(|form| place_emojis.contains(form))
}
