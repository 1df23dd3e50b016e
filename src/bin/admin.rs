//! CLI administration tool for the bookstore.
//!
//! Inspects the catalog and the books directory without starting the HTTP
//! server.
//!
//! # Usage
//!
//! ```bash
//! # Validate the catalog file
//! cargo run --bin admin -- catalog check
//!
//! # List books, optionally filtered by category
//! cargo run --bin admin -- catalog list --category fiction
//!
//! # Show the five highest-rated books
//! cargo run --bin admin -- catalog trending -n 5
//!
//! # Verify every book has a downloadable file
//! cargo run --bin admin -- catalog files
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_PATH`: catalog JSON file (default: `resources/catalog.json`)
//! - `BOOKS_DIR`: directory holding book files (default: `resources/books`)

use bookstore::application::services::CatalogService;
use bookstore::domain::entities::{Book, Category};
use bookstore::infrastructure::persistence::InMemoryCatalogRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing the bookstore catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog JSON file
    #[arg(long, env = "CATALOG_PATH", default_value = "resources/catalog.json")]
    catalog: PathBuf,

    /// Directory holding downloadable book files
    #[arg(long, env = "BOOKS_DIR", default_value = "resources/books")]
    books_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Catalog inspection
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

/// Catalog subcommands.
#[derive(Subcommand)]
enum CatalogAction {
    /// Validate the catalog file and show per-category counts
    Check,

    /// List books
    List {
        /// Only books in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the highest-rated books
    Trending {
        /// Number of books to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Check that every book's file exists in the books directory
    Files,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let catalog = InMemoryCatalogRepository::from_json_file(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?;
    let service = CatalogService::new(Arc::new(catalog));

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Check => check_catalog(&service, &cli.catalog).await?,
            CatalogAction::List { category } => list_books(&service, category).await?,
            CatalogAction::Trending { count } => show_trending(&service, count).await?,
            CatalogAction::Files => check_files(&service, &cli.books_dir).await?,
        },
    }

    Ok(())
}

/// Prints a summary of a catalog that loaded successfully.
async fn check_catalog(
    service: &CatalogService<InMemoryCatalogRepository>,
    path: &std::path::Path,
) -> Result<()> {
    println!("{}", "📚 Catalog Check".bright_blue().bold());
    println!();
    println!("  File: {}", path.display().to_string().cyan());

    let books = service.get_all_books().await?;
    println!(
        "  Books: {}",
        books.len().to_string().bright_white().bold()
    );
    println!();

    for category in Category::ALL {
        let count = books.iter().filter(|b| b.topic == category).count();
        let count = if count == 0 {
            count.to_string().bright_black()
        } else {
            count.to_string().green()
        };
        println!("  {:<12} {}", category.as_str(), count);
    }

    println!();
    println!("{}", "✅ Catalog is valid".green().bold());

    Ok(())
}

/// Lists books, optionally restricted to one category.
async fn list_books(
    service: &CatalogService<InMemoryCatalogRepository>,
    category: Option<String>,
) -> Result<()> {
    let books = match &category {
        Some(tag) => service
            .get_books_by_category(tag)
            .await
            .map_err(|e| anyhow::anyhow!(e.message().to_string()))?,
        None => service.get_all_books().await?,
    };

    let title = match &category {
        Some(tag) => format!("📋 Books in '{}'", tag.trim().to_lowercase()),
        None => "📋 All Books".to_string(),
    };
    println!("{}", title.bright_blue().bold());
    println!();

    if books.is_empty() {
        println!("{}", "  No books found".yellow());
        println!();
        return Ok(());
    }

    print_table(&books);

    println!();
    println!(
        "Total: {} books",
        books.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows the top `count` books by average rating.
async fn show_trending(
    service: &CatalogService<InMemoryCatalogRepository>,
    count: usize,
) -> Result<()> {
    println!("{}", "🔥 Trending Books".bright_blue().bold());
    println!();

    let books = service.get_trending_books(count).await?;
    if books.is_empty() {
        println!("{}", "  No books found".yellow());
    } else {
        print_table(&books);
    }
    println!();

    Ok(())
}

/// Reports books whose file is missing from the books directory.
///
/// # Errors
///
/// Fails if at least one file is missing, so the command can gate deploys.
async fn check_files(
    service: &CatalogService<InMemoryCatalogRepository>,
    books_dir: &std::path::Path,
) -> Result<()> {
    println!("{}", "📁 Book Files".bright_blue().bold());
    println!();
    println!("  Directory: {}", books_dir.display().to_string().cyan());
    println!();

    let books = service.get_all_books().await?;
    let mut missing = 0;

    for book in &books {
        let exists = tokio::fs::metadata(books_dir.join(&book.file_name))
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);

        if exists {
            println!("  {} {}", "✓".green(), book.file_name);
        } else {
            missing += 1;
            println!(
                "  {} {} {}",
                "✗".red(),
                book.file_name,
                format!("(book {})", book.id).bright_black()
            );
        }
    }

    println!();
    if missing > 0 {
        anyhow::bail!("{missing} of {} book files are missing", books.len());
    }

    println!("{}", "✅ All book files present".green().bold());

    Ok(())
}

fn print_table(books: &[Book]) {
    println!(
        "  {:<6} {:<40} {:<12} {:>9} {:>7}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Category".bright_white().bold(),
        "Price".bright_white().bold(),
        "Rating".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    for book in books {
        println!(
            "  {:<6} {:<40} {:<12} {:>9} {:>7}",
            book.id,
            truncate(&book.name, 40),
            book.topic.as_str().cyan(),
            format!("${:.2}", book.price_usd),
            format!("{:.1}", book.average_rating).yellow()
        );
    }
}

/// Shortens `s` to at most `max` characters, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('…');
        out
    }
}
