// SPDX-License-Identifier: MIT
//
// tint — random colors and RGB → HSL conversion from the command line.
//
// This binary is the thin host around the two library crates:
//
//   tint-color  → validated Rgb, derived Hsl, Color and its strings
//   tint-random → seeded generator feeding Color::change_color
//
// Each run flows through:
//
//   args/env → Rgb (from --rgb) or RandomColor (from --seed) → Color
//           → Swatch { hex, rgb, hsl } → text or JSON on stdout
//
// Logs go to stderr so stdout carries nothing but colors.

use std::io::{self, Write};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use serde_json::{Number, Value};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use tint_color::{Color, ColorError, Rgb, Swatch};
use tint_random::RandomColor;

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Print random colors, or convert one, as hex, rgb() and hsl() strings.
#[derive(Debug, Parser)]
#[command(name = "tint", version, about)]
struct Args {
    /// Convert this color instead of generating one.
    #[arg(long, value_name = "R,G,B")]
    rgb: Option<String>,

    /// Number of random colors to print.
    #[arg(short = 'n', long, env = "TINT_COUNT", default_value_t = 1)]
    count: usize,

    /// Generator seed. Defaults to the current time.
    #[arg(long, env = "TINT_SEED")]
    seed: Option<u32>,

    /// Output format.
    #[arg(long, value_enum, env = "TINT_FORMAT", default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `label value` line per string, blank line between colors.
    Text,
    /// One JSON object per line.
    Json,
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error("--rgb expects three comma-separated channels, got {0}")]
    Arity(usize),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

// ─── Parsing ────────────────────────────────────────────────────────────────

/// One `--rgb` component as an untyped value.
///
/// Numbers become JSON numbers. Anything else is kept as text, which the
/// channel validation then rejects as not-a-number with a proper message.
fn channel_arg(s: &str) -> Value {
    s.trim()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or_else(|| Value::String(s.to_owned()), Value::Number)
}

fn parse_rgb(s: &str) -> Result<Rgb, CliError> {
    let parts: Vec<Value> = s.split(',').map(channel_arg).collect();
    let [red, green, blue] = parts.as_slice() else {
        return Err(CliError::Arity(parts.len()));
    };
    Ok(Rgb::new(red, green, blue)?)
}

// ─── Output ─────────────────────────────────────────────────────────────────

fn render(swatch: &Swatch, format: Format) -> Result<String, CliError> {
    Ok(match format {
        Format::Text => format!("hex  {}\nrgb  {}\nhsl  {}\n", swatch.hex, swatch.rgb, swatch.hsl),
        Format::Json => format!("{}\n", serde_json::to_string(swatch)?),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.subsec_nanos() ^ d.as_secs() as u32)
}

fn colors(args: &Args) -> Result<Vec<Color>, CliError> {
    if let Some(rgb) = &args.rgb {
        return Ok(vec![Color::new(parse_rgb(rgb)?)]);
    }

    let seed = args.seed.unwrap_or_else(time_seed);
    tracing::debug!(seed, count = args.count, "generating colors");
    Ok(RandomColor::new(seed).take(args.count).collect())
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut out = io::stdout().lock();

    for (i, color) in colors(args)?.iter().enumerate() {
        if i > 0 && args.format == Format::Text {
            writeln!(out)?;
        }
        out.write_all(render(&color.swatch(), args.format)?.as_bytes())?;
    }

    out.flush()?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("tint: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
