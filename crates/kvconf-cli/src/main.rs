//! `kvconf` – command-line access to `key=value` configuration files.
//!
//! # Usage
//!
//! ```text
//! kvconf [--file <PATH>] <COMMAND>
//!
//! Commands:
//!   get <KEY> [--default <TEXT>] [--as <TYPE>]   Print a value
//!   set <KEY> <VALUE> [--as <TYPE>]              Store a value and save
//!   exists <KEY>                                 Print true/false (exit 1 if absent)
//!   list                                         Print every key=value line
//!
//! TYPE is one of: string (default), int, uint, double, bool
//! ```
//!
//! # Environment variables
//!
//! | Variable      | Default       | Description                     |
//! |---------------|---------------|---------------------------------|
//! | `KVCONF_FILE` | `config.conf` | Backing file when `--file` is absent |
//! | `RUST_LOG`    | `warn`        | Log filter (logs go to stderr)  |
//!
//! With `--as`, values go through the same conversions as the library's
//! typed getters and setters: `kvconf set width 1024px --as int` stores
//! `1024`, and `kvconf get missing --default 3 --as double` prints
//! `3.000000`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kvconf_core::domain::{
    format_bool, format_double, format_int, format_uint, is_truthy, parse_double, parse_int,
    parse_uint,
};
use kvconf_core::{ConfigStore, ConfigValue, StorageBackend};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Read and edit flat `key=value` configuration files.
#[derive(Debug, Parser)]
#[command(name = "kvconf", version)]
struct Cli {
    /// Backing configuration file.
    #[arg(long, short, default_value = "config.conf", env = "KVCONF_FILE")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value of KEY, or the default if it is absent.
    Get {
        key: String,
        /// Text used when KEY is absent (converted like a stored value).
        #[arg(long, short, default_value = "", allow_hyphen_values = true)]
        default: String,
        /// How to interpret the stored text.
        #[arg(long = "as", value_enum, default_value_t = ValueKind::Str)]
        kind: ValueKind,
    },
    /// Store VALUE under KEY and save the file.
    Set {
        key: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Convert VALUE to this type's canonical form before storing.
        #[arg(long = "as", value_enum, default_value_t = ValueKind::Str)]
        kind: ValueKind,
    },
    /// Print whether KEY is present; exit status 1 when it is not.
    Exists { key: String },
    /// Print every entry as `key=value`.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ValueKind {
    #[value(name = "string")]
    Str,
    Int,
    Uint,
    Double,
    Bool,
}

impl ValueKind {
    /// Converts command-line text into a typed value for the store.
    fn to_value(self, text: &str) -> ConfigValue {
        match self {
            ValueKind::Str => ConfigValue::from(text),
            ValueKind::Int => ConfigValue::Int(parse_int(text)),
            ValueKind::Uint => ConfigValue::UInt(parse_uint(text)),
            ValueKind::Double => ConfigValue::Double(parse_double(text)),
            ValueKind::Bool => ConfigValue::Bool(is_truthy(text)),
        }
    }
}

// ── Command execution ─────────────────────────────────────────────────────────

/// Reads `key` through the typed getter for `kind` and renders the result.
fn render<B: StorageBackend>(
    store: &ConfigStore<B>,
    key: &str,
    default: &str,
    kind: ValueKind,
) -> String {
    match kind {
        ValueKind::Str => store.get(key, default),
        ValueKind::Int => format_int(store.get_int(key, parse_int(default))),
        ValueKind::Uint => format_uint(store.get_uint(key, parse_uint(default))),
        ValueKind::Double => format_double(store.get_double(key, parse_double(default))),
        ValueKind::Bool => format_bool(store.get_bool(key, is_truthy(default))),
    }
}

/// Runs one command against `store`, writing its output to `out`.
///
/// Returns `false` when the command wants a failing exit status
/// (`exists` on an absent key).
fn execute<B: StorageBackend, W: Write>(
    command: Command,
    store: &mut ConfigStore<B>,
    out: &mut W,
) -> anyhow::Result<bool> {
    match command {
        Command::Get { key, default, kind } => {
            writeln!(out, "{}", render(store, &key, &default, kind))?;
            Ok(true)
        }
        Command::Set { key, value, kind } => {
            debug!(%key, ?kind, "setting value");
            store.set(key, kind.to_value(&value));
            store.save().map_err(|e| {
                let path = e.path().display().to_string();
                anyhow::Error::new(e).context(format!("could not save {path}"))
            })?;
            info!(path = %store.path().display(), "config saved");
            Ok(true)
        }
        Command::Exists { key } => {
            let present = store.exists(&key);
            writeln!(out, "{present}")?;
            Ok(present)
        }
        Command::List => {
            for (key, value) in store.iter() {
                writeln!(out, "{key}={value}")?;
            }
            Ok(true)
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout only carries command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(file = %cli.file.display(), "opening config");

    let mut store = ConfigStore::open(cli.file);
    let stdout = io::stdout();
    let ok = execute(cli.command, &mut store, &mut stdout.lock())?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
