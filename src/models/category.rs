use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryEntry {
    pub key: u32,
    pub emoji: String,
}

impl CategoryEntry {
    pub fn new(key: u32, emoji: impl Into<String>) -> Self {
        Self {
            key,
            emoji: emoji.into(),
        }
    }
}
