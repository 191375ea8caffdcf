#![deny(unsafe_code)]
//! CLI binary for the sketchbook generative art sketches.
//!
//! Subcommands:
//! - `render <sketch>`: generate one sketch and export it
//! - `all`: export every sketch into one directory
//! - `replay <record>`: re-export a run from a saved seed record
//! - `shapes <sketch>`: print the shape descriptors as JSON
//! - `list`: print available sketches

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use sketchbook_core::{Seed, Sketch};
use sketchbook_sketches::pipeline::replay;
use sketchbook_sketches::{export, generate, Artwork, ExportFormat, SketchKind};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "sketchbook", about = "Generative art sketches")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one sketch and export it.
    Render {
        /// Sketch name (e.g. "radial-wedges").
        sketch: String,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output format (png or svg).
        #[arg(short, long, default_value = "png")]
        format: String,

        /// Output file path. Defaults to the sketch's stem in the current directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export every sketch into one directory.
    All {
        /// PRNG seed shared by every sketch.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output format (png or svg).
        #[arg(short, long, default_value = "png")]
        format: String,

        /// Destination directory, created if missing.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Re-export a run from a seed record such as `{"sketch": "long-rects", "seed": 9}`.
    Replay {
        /// Path to the JSON seed record.
        record: PathBuf,

        /// Output format (png or svg).
        #[arg(short, long, default_value = "png")]
        format: String,

        /// Output file path. Defaults to the sketch's stem in the current directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the shapes one sketch generates, as JSON.
    Shapes {
        /// Sketch name.
        sketch: String,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// List available sketches.
    List,
}

fn parse_format(format: &str) -> Result<ExportFormat, CliError> {
    format
        .parse()
        .map_err(|e: sketchbook_core::SketchError| CliError::Input(e.to_string()))
}

/// Reads and checks a JSON seed record.
fn read_record(path: &Path) -> Result<Seed, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let record: Seed = serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("malformed seed record {}: {e}", path.display())))?;
    record
        .validate()
        .map_err(|e| CliError::Input(format!("{}: {e}", path.display())))?;
    Ok(record)
}

/// Generates and exports one sketch, returning a summary for `--json`.
fn render_one(
    kind: &SketchKind,
    seed: u64,
    format: ExportFormat,
    output: &Path,
) -> Result<serde_json::Value, CliError> {
    let artwork = generate(kind, seed)?;
    export_artwork(&artwork, format, output)
}

fn export_artwork(
    artwork: &Artwork,
    format: ExportFormat,
    output: &Path,
) -> Result<serde_json::Value, CliError> {
    export(artwork, format, output)?;
    Ok(serde_json::json!({
        "sketch": artwork.seed.sketch,
        "seed": artwork.seed.seed,
        "format": format.extension(),
        "width": artwork.canvas.width(),
        "height": artwork.canvas.height(),
        "shapes": artwork.shapes.len(),
        "output": output.display().to_string(),
    }))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let names = SketchKind::list_sketches();
            if cli.json {
                let sketches = names
                    .iter()
                    .map(|name| {
                        let kind = SketchKind::from_name(name)?;
                        Ok(serde_json::json!({
                            "name": name,
                            "stem": kind.stem(),
                            "canvas": kind.canvas(),
                            "params": kind.params(),
                        }))
                    })
                    .collect::<Result<Vec<_>, CliError>>()?;
                let info = serde_json::json!({ "sketches": sketches });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sketches:");
                for name in names {
                    let kind = SketchKind::from_name(name)?;
                    println!("  {name} ({})", kind.stem());
                }
            }
        }
        Command::Render {
            sketch,
            seed,
            format,
            output,
        } => {
            let format = parse_format(&format)?;
            let kind = SketchKind::from_name(&sketch)?;
            let output = output.unwrap_or_else(|| PathBuf::from(format.file_name(kind.stem())));
            let info = render_one(&kind, seed, format, &output)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("rendered {sketch} (seed {seed}) -> {}", output.display());
            }
        }
        Command::All {
            seed,
            format,
            out_dir,
        } => {
            let format = parse_format(&format)?;
            std::fs::create_dir_all(&out_dir).map_err(|e| CliError::io(&out_dir, e))?;

            let mut rendered = Vec::new();
            for name in SketchKind::list_sketches() {
                let kind = SketchKind::from_name(name)?;
                let output = out_dir.join(format.file_name(kind.stem()));
                let info = render_one(&kind, seed, format, &output)?;
                if !cli.json {
                    eprintln!("rendered {name} (seed {seed}) -> {}", output.display());
                }
                rendered.push(info);
            }

            if cli.json {
                let info = serde_json::json!({ "rendered": rendered });
                println!("{}", serde_json::to_string_pretty(&info)?);
            }
        }
        Command::Replay {
            record,
            format,
            output,
        } => {
            let format = parse_format(&format)?;
            let artwork = replay(&read_record(&record)?)?;
            let output = match output {
                Some(path) => path,
                None => {
                    let kind = SketchKind::from_name(&artwork.seed.sketch)?;
                    PathBuf::from(format.file_name(kind.stem()))
                }
            };
            let info = export_artwork(&artwork, format, &output)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "replayed {} (seed {}) -> {}",
                    artwork.seed.sketch,
                    artwork.seed.seed,
                    output.display()
                );
            }
        }
        Command::Shapes { sketch, seed } => {
            let kind = SketchKind::from_name(&sketch)?;
            let artwork = generate(&kind, seed)?;
            println!("{}", serde_json::to_string_pretty(&artwork)?);
        }
    }

    Ok(())
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        log::debug!("exiting with code {}", e.exit_code());
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
