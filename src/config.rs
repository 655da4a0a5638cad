use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Clone, Debug)]
#[clap(name = "emoji-map", about = "Inspect emoji categories and place details payloads")]
pub struct Config {
    /// JSON array of `{"key": 1, "emoji": "🍕"}` entries replacing the built-in table
    #[clap(env, long)]
    pub categories_file: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Print the category table in key order
    Categories,
    /// Show the categories carried by a place emoji string
    Match {
        #[clap(long)]
        place: String,
        /// Comma separated category keys to test the place against
        #[clap(long, value_delimiter = ',')]
        selected: Vec<u32>,
    },
    /// Decode a place details response from a file, or stdin when omitted
    Decode {
        #[clap(env = "PLACE_DETAILS_FILE", long)]
        input: Option<PathBuf>,
    },
}
