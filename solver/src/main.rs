use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use pipemaze::Network;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Part {
    /// Steps to the point of the loop farthest from the start.
    One,
    /// Tiles enclosed by the loop.
    Two,
    Both,
}

/// Analyze the loop in a pipe maze.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Maze file, one row per line.
    input_path: PathBuf,
    /// Which answer to print.
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_owned).collect())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let lines = read_lines(&args.input_path)
        .with_context(|| format!("Failed to read maze in given file({}).", args.input_path.display()))?;
    info!("read {} lines from {}", lines.len(), args.input_path.display());

    let network = Network::parse(&lines)
        .with_context(|| format!("Failed to build maze from {}.", args.input_path.display()))?;

    if args.part != Part::Two {
        println!("{}", network.farthest_distance()?);
    }
    if args.part != Part::One {
        println!("{}", network.enclosed_count()?);
    }

    Ok(())
}
