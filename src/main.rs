use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use emoji_map::decoder::decode_response_str;
use emoji_map::{CategoryCodec, CategoryEntry};
use crate::config::{Command, Config};

pub mod config;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    let custom_codec;
    let codec = match &config.categories_file {
        Some(path) => {
            custom_codec = load_categories(path)?;
            &custom_codec
        }
        None => CategoryCodec::shared(),
    };

    match config.command {
        Command::Categories => {
            for (key, emoji) in codec.entries() {
                println!("{:>3} {}", key, emoji);
            }
        }
        Command::Match { place, selected } => print_matches(codec, &place, &selected),
        Command::Decode { input } => decode(input)?,
    }
    Ok(())
}

fn load_categories(path: &Path) -> anyhow::Result<CategoryCodec> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read category table {}", path.display()))?;
    let entries: Vec<CategoryEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Category table {} is not a JSON list of entries", path.display()))?;
    info!("Loaded {} categories from {}", entries.len(), path.display());
    CategoryCodec::from_entries(entries).context("Category table is inconsistent")
}

fn print_matches(codec: &CategoryCodec, place: &str, selected: &[u32]) {
    let keys = codec
        .category_ids_from_emoji_string(place)
        .into_iter()
        .map(|key| key.to_string())
        .collect::<Vec<String>>();
    println!("categories: {}", keys.join(","));

    if !selected.is_empty() {
        let selected: HashSet<u32> = selected.iter().copied().collect();
        println!("matches: {}", codec.place_matches_any_category(place, &selected));
    }
}

fn decode(input: Option<PathBuf>) -> anyhow::Result<()> {
    let body = match &input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read place details from stdin")?;
            body
        }
    };

    let decoded = decode_response_str(&body).context("Place details response has the wrong shape")?;
    info!(
        "Decoded place {:?} with {} soft defects",
        decoded.value.data.id,
        decoded.defects.len()
    );
    println!("{}", serde_json::to_string_pretty(&decoded.value)?);
    Ok(())
}
