//! wildcard-routes CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wildcard_routes::observability::{self, ObservabilityConfig};
use wildcard_routes_cli_lib::{parse_alias, ListCommand, UriCommand};

#[derive(Parser)]
#[command(name = "wildcard-routes")]
#[command(version)]
#[command(about = "Inspect resource routes and their wildcards", long_about = None)]
struct Cli {
    /// Log registration details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the routes a manifest produces
    List {
        /// Route manifest (defaults to `./routes.toml`)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Preview the URIs of a resource chain
    Uri {
        /// Resource chain (e.g., `users.posts`)
        name: String,
        /// Wildcard alias (e.g., `users=author`), repeatable
        #[arg(short, long = "alias", value_parser = parse_alias)]
        aliases: Vec<(String, String)>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        observability::init_with(&ObservabilityConfig::default().with_verbose())?;
    }

    match cli.command {
        Commands::List { config, json } => {
            ListCommand::new(config, json).execute()?;
        }
        Commands::Uri { name, aliases } => {
            UriCommand::new(name, aliases).execute()?;
        }
    }

    Ok(())
}
