// SPDX-License-Identifier: MIT
//
// shadcn-theme: generate random, accessible shadcn color themes.
//
// Thin front end over st-palette. Each run builds one sampler (seeded or
// from entropy), generates or restores a theme with it, and writes the
// result to stdout:
//
//   args ─► sampler ─► generate_with / restore_or_generate ─► render ─► stdout
//
// Output formats:
//
//   css      `:root { --primary: 210 80% 45%; … }` and `.dark { … }`
//   json     CSS variable → {h, s, l}, per scheme
//   entries  the editor's persisted records, keyed by storage key
//
// Logs go to stderr so output can be piped straight into a stylesheet.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};
use st_palette::css::{render_block, render_stylesheet, selector};
use st_palette::store::{self, DEFAULT_STORAGE_KEY, Source};
use st_palette::{
    GenerateOptions, HarmonyMode, Hsl, RngSampler, Scheme, ThemeEntries, ThemeEntry, generate_with,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SHADCN_THEME_LOG";

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "shadcn-theme", version, about = "Generate random shadcn color themes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Seed primary color: `#rrggbb`, `210 80% 45%` or `hsl(210, 80%, 45%)`.
    /// Random when omitted.
    #[arg(long, global = true)]
    primary: Option<Hsl>,

    /// Seed for the random draws, for reproducible themes.
    #[arg(long, env = "SHADCN_THEME_SEED", global = true)]
    seed: Option<u64>,

    /// Pin the harmony mode instead of drawing one.
    #[arg(long)]
    harmony: Option<HarmonyMode>,

    #[arg(long, value_enum, default_value = "css", global = true)]
    format: Format,

    #[arg(long, value_enum, default_value = "both")]
    scheme: SchemeArg,

    /// Base storage key used by the `entries` format and by `restore`.
    #[arg(long, env = "SHADCN_THEME_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY, global = true)]
    storage_key: String,

    /// Raise log verbosity (-v debug, -vv trace). Overrides SHADCN_THEME_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a persisted theme, regenerating it if it doesn't validate
    Restore {
        /// JSON file: an entry array, or an object keyed by storage key
        file: PathBuf,

        #[arg(long, default_value = "light")]
        scheme: Scheme,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Css,
    Json,
    Entries,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchemeArg {
    Light,
    Dark,
    Both,
}

impl SchemeArg {
    const fn schemes(self) -> &'static [Scheme] {
        match self {
            Self::Light => &[Scheme::Light],
            Self::Dark => &[Scheme::Dark],
            Self::Both => &Scheme::ALL,
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut sampler = match cli.seed {
        Some(seed) => {
            debug!(seed, "seeded sampler");
            RngSampler::seeded(seed)
        }
        None => RngSampler::from_entropy(),
    };

    let output = match &cli.command {
        None => {
            let options = GenerateOptions { primary: cli.primary, harmony: cli.harmony };
            let theme = generate_with(options, &mut sampler);
            render_entries(&theme.to_entries(), cli.scheme.schemes(), cli.format, &cli.storage_key)?
        }
        Some(Command::Restore { file, scheme }) => {
            let text = fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let key = store::storage_key(&cli.storage_key, *scheme);
            let stored = select_stored(&text, &key);

            let restored = store::restore_or_generate(stored.as_deref(), *scheme, cli.primary, &mut sampler);
            match restored.source {
                Source::Stored => info!(%key, "using stored theme"),
                Source::Generated => info!(%key, "stored theme unusable, generated a new one"),
            }

            let mut entries = ThemeEntries { light: Vec::new(), dark: Vec::new() };
            match scheme {
                Scheme::Light => entries.light = restored.entries,
                Scheme::Dark => entries.dark = restored.entries,
            }
            render_entries(&entries, &[*scheme], cli.format, &cli.storage_key)?
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end()).context("failed to write output")?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Rendering ──────────────────────────────────────────────────────────────

fn render_entries(
    entries: &ThemeEntries,
    schemes: &[Scheme],
    format: Format,
    storage_key: &str,
) -> Result<String> {
    match format {
        Format::Css if schemes.len() == Scheme::ALL.len() => Ok(render_stylesheet(entries)),
        Format::Css => Ok(schemes
            .iter()
            .map(|&scheme| render_block(selector(scheme), entries.get(scheme)))
            .collect()),
        Format::Json => {
            let mut map = Map::new();
            for &scheme in schemes {
                map.insert(scheme.name().to_string(), named_colors(entries.get(scheme)));
            }
            Ok(serde_json::to_string_pretty(&map)?)
        }
        Format::Entries => {
            let mut map = Map::new();
            for &scheme in schemes {
                let key = store::storage_key(storage_key, scheme);
                map.insert(key, serde_json::to_value(entries.get(scheme))?);
            }
            Ok(serde_json::to_string_pretty(&map)?)
        }
    }
}

/// `{ "--primary": {h, s, l}, … }`. Restored entries may not cover every
/// role.
fn named_colors(entries: &[ThemeEntry]) -> Value {
    entries
        .iter()
        .map(|entry| {
            let Hsl { h, s, l } = entry.color;
            (entry.variable.clone(), serde_json::json!({ "h": h, "s": s, "l": l }))
        })
        .collect::<Map<_, _>>()
        .into()
}

/// Pick the stored value for `key` out of a restore file.
///
/// A JSON object is treated as a dump of several keys (what `--format
/// entries` writes) and yields the value under `key`, or nothing if the
/// key is absent. Anything else is passed through whole and validated by
/// the store.
fn select_stored(text: &str, key: &str) -> Option<String> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map.get(key).map(Value::to_string),
        _ => Some(text.to_string()),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
