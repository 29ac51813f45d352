//! Terminal front end for the Vietnam POI search.
//!
//! Resolves a place name, searches progressively wider radii for named
//! points of interest, and renders the session snapshot after every
//! transition. "Widen the search?" prompts are answered interactively on
//! stdin, or automatically under `--assume-yes`.

use std::io::Write;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use vnpoi_osm::OsmClient;
use vnpoi_search::{SearchController, SearchSnapshot};

#[derive(Debug, Parser)]
#[command(name = "vnpoi")]
#[command(about = "Search for named points of interest around a place in Vietnam")]
struct Cli {
    /// Place name to search around (e.g. "Hà Nội", "Đà Nẵng").
    query: String,

    /// POI category to search for.
    #[arg(short, long, value_enum, default_value = "cafe")]
    category: Category,

    /// Accept every "widen the search?" prompt without asking.
    #[arg(short = 'y', long)]
    assume_yes: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Category {
    Cafe,
    Restaurant,
    Tourism,
    All,
}

impl Category {
    fn as_str(self) -> &'static str {
        match self {
            Category::Cafe => "cafe",
            Category::Restaurant => "restaurant",
            Category::Tourism => "tourism",
            Category::All => "all",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = vnpoi_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();
    tracing::debug!(?config, "loaded configuration");

    let client = OsmClient::new(&config)?;
    let mut controller = SearchController::new(client);

    controller.submit(&cli.query, cli.category.as_str()).await;
    render(&controller.snapshot())?;

    while let Some(prompt) = controller.snapshot().prompt_message {
        if cli.assume_yes || ask_yes_no(&prompt)? {
            controller.confirm().await;
            render(&controller.snapshot())?;
        } else {
            controller.decline();
            break;
        }
    }

    Ok(())
}

/// Prints the current session snapshot: resolved location, the result list
/// ranked by distance, and any informational message. A snapshot carrying an
/// error ends the run with that error.
fn render(snapshot: &SearchSnapshot) -> anyhow::Result<()> {
    if let Some(message) = &snapshot.error_message {
        anyhow::bail!("{message}");
    }

    if let Some(location) = &snapshot.location {
        println!("Location: {}", location.display_name);
        println!(
            "Coordinates: {:.6}, {:.6}",
            location.latitude, location.longitude
        );
    }

    if !snapshot.results.is_empty() {
        // Display ordering is the presentation's concern: rank by distance,
        // unknown distances last.
        let mut results = snapshot.results.clone();
        results.sort_by(|a, b| {
            let da = a.distance_km.unwrap_or(f64::INFINITY);
            let db = b.distance_km.unwrap_or(f64::INFINITY);
            da.total_cmp(&db)
        });

        println!("\nNearest points of interest:");
        for (index, poi) in results.iter().enumerate() {
            let distance = poi
                .distance_km
                .map_or_else(|| "N/A".to_owned(), |d| format!("{d:.2} km"));
            println!("{}. {} ({})", index + 1, poi.name, poi.category);
            println!("   {}", poi.address);
            println!(
                "   {distance} @ ({:.6}, {:.6})",
                poi.latitude, poi.longitude
            );
        }
    }

    if let Some(message) = &snapshot.info_message {
        println!("\n{message}");
    }

    Ok(())
}

/// Asks a yes/no question on stdout and reads the answer from stdin.
fn ask_yes_no(prompt: &str) -> anyhow::Result<bool> {
    print!("\n{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
