pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pawfeed")]
#[command(about = "Cat facts and dog pictures in your terminal", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/pawfeed/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default)
    Tui,
    /// Fetch cat facts and print them
    Cat {
        /// How many facts to fetch
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Fetch a random dog picture
    Dog {
        /// Write the image bytes to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
