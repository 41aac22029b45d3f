use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands {
    pub mod cart;
    pub mod catalog;
}
mod config {
    pub mod api_config;
    pub mod app_config;
    pub mod storage_config;
}
mod setup {
    pub mod dependency_injection;
}

use business::domain::catalog::sorting::SortKey;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally filtered by category and sorted
    Products {
        /// Category filter; repeat the flag to select several
        #[arg(long = "category")]
        categories: Vec<String>,

        /// One of: default, price-asc, price-desc, title-asc, title-desc
        #[arg(long, default_value = "default")]
        sort: SortKey,
    },

    /// Show one product in full
    Product { id: u64 },

    /// List the catalog's category tags
    Categories,

    /// Inspect or edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Debug, Subcommand)]
enum CartAction {
    /// Print the cart with line and grand totals
    Show,

    /// Fetch a product by id and add it to the cart
    Add {
        id: u64,

        /// Units to add; the UI allows 1 through 99 per gesture
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=99))]
        quantity: u32,
    },

    /// Drop a product from the cart
    Remove { id: u64 },

    /// Set the quantity for a product already in the cart; 0 removes it
    Set {
        id: u64,

        #[arg(value_parser = clap::value_parser!(u32).range(0..=99))]
        quantity: u32,
    },

    /// Empty the cart
    Clear,
}

/// Storefront CLI entry point.
///
/// Initializes logging, loads configuration, wires the dependency
/// container, and dispatches the requested command.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the requested command
    run(cli, &container).await
}

async fn run(cli: Cli, container: &DependencyContainer) -> anyhow::Result<()> {
    match cli.command {
        Commands::Products { categories, sort } => {
            commands::catalog::products(container, categories, sort).await
        }
        Commands::Product { id } => commands::catalog::product(container, id).await,
        Commands::Categories => commands::catalog::categories(container).await,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(container).await,
            CartAction::Add { id, quantity } => commands::cart::add(container, id, quantity).await,
            CartAction::Remove { id } => commands::cart::remove(container, id).await,
            CartAction::Set { id, quantity } => commands::cart::set(container, id, quantity).await,
            CartAction::Clear => commands::cart::clear(container).await,
        },
    }
}
