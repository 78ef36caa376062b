use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sketchboard::Config;
use sketchboard::config::ColorSpec;
use sketchboard::draw::{DecodeMode, Drawing, Shape, TwoPointKind, decode_drawing};
use sketchboard::editor::{rasterize, write_png};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKETCHBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(version = VERSION, about = "Render and inspect sketchboard drawing documents")]
struct Cli {
    /// Config file to use instead of ~/.config/sketchboard/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a drawing document to PNG
    Render {
        /// Drawing document (JSON)
        input: PathBuf,

        /// Output PNG path
        #[arg(long, short = 'o', value_name = "OUTPUT")]
        output: PathBuf,

        /// Fail on unknown or malformed shapes instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Background color (name, #hex); transparent when omitted
        #[arg(long, value_name = "COLOR")]
        background: Option<String>,

        /// Pixels per canvas unit
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
    },
    /// Print the canvas size and shape counts of a drawing document
    Inspect {
        /// Drawing document (JSON)
        input: PathBuf,

        /// Fail on unknown or malformed shapes instead of skipping them
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Render {
            input,
            output,
            strict,
            background,
            scale,
        } => {
            if !(scale.is_finite() && scale > 0.0) {
                bail!("Scale must be a positive number, got {scale}");
            }
            let background = background
                .map(|spec| {
                    ColorSpec::from(spec.as_str())
                        .parse()
                        .with_context(|| format!("Unknown background color '{spec}'"))
                })
                .transpose()?;

            let drawing = read_drawing(&input, decode_mode(&config, strict))?;
            let surface = rasterize(drawing.shapes(), drawing.size(), scale, background)
                .context("Failed to render drawing")?;
            write_png(&surface, &output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            log::info!(
                "Rendered {} shapes to {} ({}x{})",
                drawing.len(),
                output.display(),
                surface.width(),
                surface.height()
            );
        }
        Command::Inspect { input, strict } => {
            let drawing = read_drawing(&input, decode_mode(&config, strict))?;
            print!("{}", summarize(&drawing));
        }
    }

    Ok(())
}

fn decode_mode(config: &Config, strict: bool) -> DecodeMode {
    if strict {
        DecodeMode::Strict
    } else {
        config.decode_mode()
    }
}

fn read_drawing(path: &Path, mode: DecodeMode) -> Result<Drawing> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    decode_drawing(&json, mode).with_context(|| format!("Failed to decode {}", path.display()))
}

/// Human-facing name for a shape, telling arrows apart from lines.
fn shape_label(shape: &Shape) -> &'static str {
    match shape {
        Shape::TwoPoint(two_point) if two_point.kind == TwoPointKind::Arrow => "Arrow",
        _ => shape.type_tag(),
    }
}

fn summarize(drawing: &Drawing) -> String {
    let size = drawing.size();
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for shape in drawing.shapes() {
        *counts.entry(shape_label(shape)).or_default() += 1;
    }

    let mut out = format!("Size: {}x{}\nShapes: {}\n", size.width, size.height, drawing.len());
    for (label, count) in counts {
        out.push_str(&format!("  {label}: {count}\n"));
    }
    out
}
