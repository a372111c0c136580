//! crowdsphere CLI - Venue discovery with live crowd levels.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "crowdsphere")]
#[command(about = "Venue discovery with live crowd levels", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List venues with live crowd badges
    Venues {
        /// Filter by crowd level (none, quiet, moderate, busy)
        #[arg(short, long)]
        level: Option<String>,

        /// Filter by venue type (club, restaurant, event)
        #[arg(short = 't', long = "type")]
        venue_type: Option<String>,

        /// Filter by price tier (1-3)
        #[arg(short, long)]
        price: Option<u8>,

        /// Minimum elegance rating (0.0-1.0)
        #[arg(long)]
        elegance_min: Option<f64>,

        /// Search pattern for name or address
        #[arg(short, long)]
        search: Option<String>,

        /// Latitude of the reference position
        #[arg(long, requires = "lng")]
        lat: Option<f64>,

        /// Longitude of the reference position
        #[arg(long, requires = "lat")]
        lng: Option<f64>,

        /// Maximum distance in kilometres from the reference position
        #[arg(short, long)]
        radius_km: Option<f64>,

        /// Posts file (JSON array). Defaults to the built-in demo feed.
        #[arg(long)]
        posts: Option<PathBuf>,

        /// Reference instant (RFC 3339). Defaults to now.
        #[arg(long)]
        now: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show venue details with today's posts
    Info {
        /// Venue identifier (e.g., v1)
        venue: String,

        /// Posts file (JSON array). Defaults to the built-in demo feed.
        #[arg(long)]
        posts: Option<PathBuf>,

        /// Reference instant (RFC 3339). Defaults to now.
        #[arg(long)]
        now: Option<String>,

        /// Emit JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Compute a crowd estimate from a posts file
    Crowd {
        /// Posts file (JSON array)
        posts: PathBuf,

        /// Restrict to posts of a single venue
        #[arg(short, long)]
        venue: Option<String>,

        /// Reference instant (RFC 3339). Defaults to now.
        #[arg(long)]
        now: Option<String>,

        /// Emit JSON instead of a report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Venues {
            level,
            venue_type,
            price,
            elegance_min,
            search,
            lat,
            lng,
            radius_km,
            posts,
            now,
            json,
        } => commands::venues::list(
            level.as_deref(),
            venue_type.as_deref(),
            price,
            elegance_min,
            search.as_deref(),
            lat.zip(lng),
            radius_km,
            posts.as_deref(),
            now.as_deref(),
            json,
        ),
        Commands::Info {
            venue,
            posts,
            now,
            json,
        } => commands::info::show(&venue, posts.as_deref(), now.as_deref(), json),
        Commands::Crowd {
            posts,
            venue,
            now,
            json,
        } => commands::crowd::estimate(&posts, venue.as_deref(), now.as_deref(), json),
    }
}
