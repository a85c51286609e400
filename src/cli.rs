// src/cli.rs
use anyhow::Result;
use clap::{ArgAction, Parser};
use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use tracing::info;

use crate::core::resolver::{ResolveError, ResolveRequest, resolve};
use crate::core::scanner::scan_docs;
use crate::report::render;

#[derive(Parser, Debug, Default)]
#[command(
    name = "docs-list",
    version,
    about = "List markdown docs with their summaries and read-when hints",
    long_about = "List markdown docs with their summaries and read-when hints.\n\n\
                  The docs directory is taken from --docs, --root, DOCS_DIR or DOCS_ROOT, \
                  falling back to ./docs and then <repository root>/docs."
)]
pub struct Args {
    /// Docs directory to scan
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub docs: Option<Option<PathBuf>>,

    /// Repository root; docs are read from <PATH>/docs
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub root: Option<Option<PathBuf>>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Whether `-h`/`--help` appears anywhere before a `--` terminator. Checked ahead of
/// clap so help wins over any other argument, valid or not.
pub fn help_requested<I, S>(raw_args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    raw_args
        .into_iter()
        .skip(1)
        .take_while(|arg| arg.as_ref() != "--")
        .any(|arg| matches!(arg.as_ref().to_str(), Some("-h" | "--help")))
}

/// Finds a `--docs` or `--root` given with no value, or followed directly by another
/// flag. Checked ahead of clap, which would otherwise blame the following flag.
pub fn missing_flag_value<I, S>(raw_args: I) -> Option<ResolveError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut args = raw_args
        .into_iter()
        .skip(1)
        .take_while(|arg| arg.as_ref() != "--")
        .peekable();

    while let Some(arg) = args.next() {
        let flag = match arg.as_ref().to_str() {
            Some("--docs") => "--docs",
            Some("--root") => "--root",
            _ => continue,
        };
        let has_value = args
            .peek()
            .is_some_and(|next| !next.as_ref().to_string_lossy().starts_with('-'));
        if !has_value {
            return Some(ResolveError::MissingPath { flag });
        }
    }

    None
}

/// Resolves the docs directory and prints the listing to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * `--docs` or `--root` is given without a path
/// * No docs directory can be found
/// * The docs directory or its config file cannot be read
pub fn run(args: Args) -> Result<()> {
    let request = ResolveRequest::from_process(args.docs, args.root)?;
    let docs_root = resolve(&request)?;
    info!(path = %docs_root.path.display(), provenance = %docs_root.provenance, "listing docs");

    let docs = scan_docs(&docs_root.path)?;
    let mut out = io::stdout().lock();
    render(&mut out, &docs)?;
    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` directives are honoured on top of the
/// level picked by `verbosity`.
pub fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
