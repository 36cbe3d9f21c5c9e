use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use conlang_glyph::glyph::compressor::token_stream;
use conlang_glyph::{compress, decompress, ConlangDocument, Grid, GridEditorOptions};
use flexi_logger::Logger;

const CONFIG_FILE: &str = "glyph_editor.toml";

#[derive(Parser)]
#[command(version, about = "Encode, decode and check conlang glyph strings")]
pub struct Cli {
    #[arg(help = "Grid resolution, overrides the configured one", long, short, global = true)]
    resolution: Option<usize>,

    #[arg(help = "Editor options file (TOML)", long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Compress ASCII art ('#' ink, '.' blank) into a glyph string, '-' reads stdin")]
    Encode { file: PathBuf },

    #[command(about = "Print a glyph string as ASCII art")]
    Decode { glyph: String },

    #[command(about = "Print the run-length token stream of a glyph string")]
    Tokens { glyph: String },

    #[command(about = "Report glyphs in a document that do not decode")]
    Check { document: PathBuf },
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.config {
        return Some(path.clone());
    }
    directories::ProjectDirs::from("com", "GitHub", "conlang_glyph").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

fn resolution(cli: &Cli) -> anyhow::Result<usize> {
    let mut options = match config_path(cli) {
        Some(path) => GridEditorOptions::load(&path).with_context(|| format!("reading {}", path.display()))?,
        None => GridEditorOptions::default(),
    };
    if let Some(resolution) = cli.resolution {
        options.resolution = resolution;
    }
    options.validate()?;
    Ok(options.resolution)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let resolution = resolution(cli)?;
    log::debug!("Using resolution {resolution}");

    match &cli.command {
        Commands::Encode { file } => {
            let grid = Grid::from_ascii(&read_input(file)?, resolution)?;
            println!("{}", compress(&grid)?);
        }
        Commands::Decode { glyph } => {
            let grid = decompress(glyph, resolution)?;
            println!("{}", grid.to_ascii());
        }
        Commands::Tokens { glyph } => {
            let grid = decompress(glyph, resolution)?;
            println!("{}", token_stream(&grid));
        }
        Commands::Check { document } => {
            let doc = ConlangDocument::load(document).with_context(|| format!("loading {}", document.display()))?;
            let invalid = doc.invalid_glyphs(resolution);
            if invalid.is_empty() {
                println!("{}: all glyphs decode at {resolution}x{resolution}", document.display());
                return Ok(ExitCode::SUCCESS);
            }
            for (slot, err) in &invalid {
                println!("{slot}: {err}");
            }
            println!("{} invalid glyph(s)", invalid.len());
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _logger = Logger::try_with_env_or_str("info")?.log_to_stderr().start()?;
    run(&cli)
}
