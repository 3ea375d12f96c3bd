//! Nova CLI - Command-line tool for EV Nova data files and pilot saves.
//!
//! This is the main entry point for the Nova command-line application.

mod frames;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use walkdir::WalkDir;

use nova::pilot::{apply_cipher, PILOT_KEY, SAVE_SIZE};
use nova::prelude::*;

use crate::frames::FrameOnlyCodec;

/// Nova - EV Nova data file and pilot save tool
#[derive(Parser)]
#[command(name = "nova")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a pilot save
    PilotInfo {
        /// Path to the pilot file
        #[arg(short, long, env = "NOVA_PILOT")]
        pilot: PathBuf,

        /// Extracted data directory, used to name the ship class
        #[arg(short, long, env = "NOVA_DATA_DIR")]
        data: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List pilot saves found under a directory
    PilotList {
        /// Directory to search
        #[arg(short, long)]
        dir: PathBuf,
    },

    /// Encrypt or decrypt a whole pilot save
    PilotCrypt {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Decode every record of an extracted data directory and count them
    LibrarySummary {
        /// Extracted data directory (`<tag>/<id>.<ext>`)
        #[arg(short, long, env = "NOVA_DATA_DIR")]
        data: PathBuf,

        /// Decode text as Mac OS Roman instead of Latin-1
        #[arg(long)]
        mac_roman: bool,

        /// Decode image records on the calling thread only
        #[arg(long)]
        sequential: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::PilotInfo { pilot, data, json } => {
            cmd_pilot_info(&pilot, data.as_deref(), json)?;
        }
        Commands::PilotList { dir } => {
            cmd_pilot_list(&dir)?;
        }
        Commands::PilotCrypt { input, output } => {
            cmd_pilot_crypt(&input, &output)?;
        }
        Commands::LibrarySummary { data, mac_roman, sequential } => {
            cmd_library_summary(&data, mac_roman, sequential)?;
        }
    }

    Ok(())
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn load_library(data: &Path, options: &LibraryOptions) -> Result<ResourceLibrary> {
    let pb = spinner("Reading records...")?;

    let source = DirectoryRecordSource::open(data)
        .with_context(|| format!("Failed to read data directory {}", data.display()))?;

    pb.set_message("Decoding records...");
    let library = ResourceLibrary::load(&source, &FrameOnlyCodec, options).context("Failed to decode data files")?;

    pb.finish_and_clear();
    Ok(library)
}

fn cmd_pilot_info(path: &Path, data: Option<&Path>, json: bool) -> Result<()> {
    let pilot = PilotFile::load(path).context("Failed to load pilot file")?;
    let summary = pilot.summary().context("Failed to read pilot fields")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let ship_name = match data {
        Some(dir) => load_library(dir, &LibraryOptions::default())?
            .ships()
            .get(summary.ship_class)
            .map(|ship| ship.short_name.clone()),
        None => None,
    };

    println!("Pilot:        {}", summary.nickname);
    println!(
        "Date:         {}/{}/{}{}{}",
        summary.date.day, summary.date.month, summary.date_prefix, summary.date.year, summary.date_suffix
    );
    match ship_name {
        Some(name) => println!("Ship:         {} (#{})", name, summary.ship_class),
        None => println!("Ship:         #{}", summary.ship_class),
    }
    println!("Credits:      {}", summary.cash);
    println!("Fuel:         {}", summary.fuel);
    println!("Combat:       {}", summary.combat_rating);
    println!("Explored:     {} systems", summary.systems_explored);
    println!("Missions:     {}", summary.active_missions.len());
    println!("Escorts:      {}", summary.escorts.len());

    for escort in &summary.escorts {
        match escort {
            EscortSlot::Captured(ship) => println!("  captured #{}", ship),
            EscortSlot::Hired(ship) => println!("  hired    #{}", ship),
            EscortSlot::Unspecified(raw) => println!("  unknown  {}", raw),
            EscortSlot::Empty => {}
        }
    }

    Ok(())
}

fn cmd_pilot_list(dir: &Path) -> Result<()> {
    let mut count = 0;

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if metadata.len() != SAVE_SIZE as u64 {
            continue;
        }

        match PilotFile::load(entry.path()) {
            Ok(pilot) => {
                println!(
                    "{:<32} {:>12} #{:<6} {}",
                    pilot.nickname(),
                    pilot.cash(),
                    pilot.ship_class(),
                    entry.path().display()
                );
                count += 1;
            }
            Err(e) => debug!("skipping {}: {}", entry.path().display(), e),
        }
    }

    println!("\nTotal: {} pilots", count);

    Ok(())
}

fn cmd_pilot_crypt(input: &Path, output: &Path) -> Result<()> {
    println!("Applying pilot cipher: {} -> {}", input.display(), output.display());

    let mut data = fs::read(input).context("Failed to read input file")?;
    if data.len() != SAVE_SIZE {
        warn!("{} is {} bytes, not a {}-byte save", input.display(), data.len(), SAVE_SIZE);
    }

    apply_cipher(&mut data, PILOT_KEY);
    fs::write(output, data).context("Failed to write output file")?;

    println!("Done");

    Ok(())
}

fn cmd_library_summary(data: &Path, mac_roman: bool, sequential: bool) -> Result<()> {
    let text = if mac_roman {
        TextEncoding::MacRoman
    } else {
        TextEncoding::Latin1
    };
    let options = LibraryOptions {
        decode: DecodeOptions { text },
        parallel: !sequential,
    };

    let start = Instant::now();
    let library = load_library(data, &options)?;
    let stats = library.stats();

    println!("{}", stats);
    println!("Finished in {:?}", start.elapsed());

    Ok(())
}
