use std::borrow::Cow;

/// VS15, requests text presentation.
pub const TEXT_SELECTOR: char = '\u{FE0E}';
/// VS16, requests emoji presentation.
pub const EMOJI_SELECTOR: char = '\u{FE0F}';

pub fn is_variation_selector(c: char) -> bool {
    c == TEXT_SELECTOR || c == EMOJI_SELECTOR
}

pub fn has_variation_selector(glyph: &str) -> bool {
    glyph.chars().any(is_variation_selector)
}

/// Drops every presentation selector, leaving the bare scalar sequence that
/// two renderings of the same emoji share.
pub fn strip_variation_selectors(glyph: &str) -> Cow<'_, str> {
    if has_variation_selector(glyph) {
        Cow::Owned(glyph.chars().filter(|c| !is_variation_selector(*c)).collect())
    } else {
        Cow::Borrowed(glyph)
    }
}
