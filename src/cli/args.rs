use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the product catalog and check out a shopping cart from the terminal")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Product seed file (JSON); overrides CATALOG_PATH
    #[arg(short, long, global = true)]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List categories with their product counts
    Categories,
    /// List products, optionally narrowed by category or search term
    Products {
        /// Category label, e.g. "Headphones"
        #[arg(short = 'C', long, default_value = "All")]
        category: String,
        /// Search keyword (name or description)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show detailed information about a product
    Show {
        /// Product name
        name: String,
    },
    /// Start an interactive shopping session
    Shop,
}
