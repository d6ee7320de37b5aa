use anyhow::Context;
use clap::{Parser, ValueEnum};
use html_cleaner::{
    decode_html, strip_comments, strip_entities, strip_tags, AppConfig, HtmlCleaner,
};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::filter_fn, fmt::layer as fmt_layer, prelude::*, EnvFilter, Registry,
};

/// Strip HTML markup down to plain text.
#[derive(Debug, Parser)]
#[command(name = "html-cleaner", version)]
struct Args {
    /// Which part of the pipeline to run.
    #[arg(long, value_enum, default_value_t = Mode::Html)]
    mode: Mode,

    /// Input files; `-` or none reads stdin.
    files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Html,
    BlockElements,
    Tags,
    Entities,
    Comments,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_env().context("failed to load configuration")?;
    let _log_guard = setup_tracing(&config)?;

    let cleaner = HtmlCleaner::new(&config.cleaner).context("invalid cleaner configuration")?;
    tracing::debug!(mode = ?args.mode, inputs = args.files.len(), "cleaning");

    let stdin_only = [PathBuf::from("-")];
    let inputs = if args.files.is_empty() {
        &stdin_only[..]
    } else {
        &args.files[..]
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in inputs {
        let bytes = read_input(path)?;
        let decoded = decode_html(&bytes);
        if decoded.had_errors {
            tracing::warn!(
                path = %path.display(),
                encoding = decoded.encoding,
                "input had malformed bytes"
            );
        }

        let text = match args.mode {
            Mode::Html => cleaner.strip_html(&decoded.text),
            Mode::BlockElements => cleaner.strip_block_elements(&decoded.text),
            Mode::Tags => strip_tags(&decoded.text),
            Mode::Entities => strip_entities(&decoded.text),
            Mode::Comments => strip_comments(&decoded.text),
        };

        out.write_all(text.as_bytes()).context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read stdin")?;
        Ok(bytes)
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {:?}", path))
    }
}

// The returned guard flushes the file writer when dropped at the end of `main`.
fn setup_tracing(config: &AppConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config
            .logging
            .level
            .clone()
            .unwrap_or_else(|| "warn".to_string());
        EnvFilter::new(level)
    });

    let crate_filter = filter_fn(|meta| meta.target().starts_with("html_cleaner"));
    let other_filter = filter_fn(|meta| !meta.target().starts_with("html_cleaner"));

    let stderr_crate = fmt_layer()
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_filter(crate_filter.clone());

    let stderr_general = fmt_layer()
        .with_writer(io::stderr)
        .with_filter(other_filter);

    let mut guard = None;
    let file_layer = match config.logging.file.as_deref() {
        Some(file) => {
            let log_path = Path::new(file);
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file_name = log_path
                .file_name()
                .and_then(|s| s.to_str())
                .ok_or_else(|| anyhow::anyhow!("invalid log file path"))?;
            let directory = log_path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| Path::new(".").to_path_buf());

            let file_appender = rolling::never(directory, file_name);
            let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(worker_guard);

            Some(
                fmt_layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(crate_filter),
            )
        }
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(stderr_crate)
        .with(stderr_general)
        .with(file_layer)
        .try_init()
        .context("failed to init tracing subscriber")?;

    Ok(guard)
}
