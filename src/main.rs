//! Rewrap - reflow the comment or text paragraph under a cursor.
//!
//! # Usage
//!
//! ```bash
//! rewrap --line 12 src/main.rs
//! rewrap --line 12 --width 72 --in-place src/main.rs
//! cat notes.txt | rewrap --offset 140
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use rewrap::command::{RewrapCommand, RewrapOutcome};
use rewrap::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use rewrap::editor::{EditorBuffer, TextView};
use rewrap::{RewrapError, perf};

/// Reflow the comment or text paragraph under the cursor to a fixed width
#[derive(Parser, Debug)]
#[command(name = "rewrap", version, about, long_about = None)]
struct Cli {
    /// File to rewrap; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Cursor line (1-based)
    #[arg(short, long, value_name = "N", conflicts_with = "offset")]
    line: Option<usize>,

    /// Cursor column (1-based), used with --line
    #[arg(short, long, value_name = "N", requires = "line")]
    column: Option<usize>,

    /// Cursor as a 0-based char offset into the document
    #[arg(long, value_name = "N")]
    offset: Option<usize>,

    /// Maximum line width, prefix included [default: 80]
    #[arg(short, long, value_name = "N")]
    width: Option<usize>,

    /// Write the result back to FILE instead of stdout
    #[arg(short, long)]
    in_place: bool,

    /// Print timing information to stderr
    #[arg(long)]
    perf: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            width: self.width,
            perf: self.perf,
        }
    }

    /// The input file, or `None` for stdin.
    fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    let _scope = perf::scope("read");
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Resolve the cursor flags to a char offset in `buf`.
fn cursor_offset(cli: &Cli, buf: &EditorBuffer) -> Result<usize> {
    if let Some(offset) = cli.offset {
        if offset > buf.len_chars() {
            return Err(RewrapError::OffsetOutOfBounds {
                offset,
                len: buf.len_chars(),
            })
            .context("Invalid cursor position");
        }
        return Ok(offset);
    }
    let Some(line) = cli.line else {
        return Ok(0);
    };
    if line == 0 || line > buf.line_count() {
        anyhow::bail!(
            "Line {line} is out of range (document has {} lines)",
            buf.line_count()
        );
    }
    let col = cli.column.unwrap_or(1).saturating_sub(1);
    Ok(buf.offset_of(line - 1, col))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }
    if (cli.save || cli.clear) && cli.file.is_none() {
        return Ok(());
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    perf::set_enabled(effective.perf);

    let input_path = cli.input_path();
    if cli.in_place && input_path.is_none() {
        anyhow::bail!("--in-place needs a FILE");
    }

    let text = read_input(input_path)?;
    let mut buf = EditorBuffer::from_text(&text);
    let offset = cursor_offset(&cli, &buf)?;
    buf.set_cursor(offset);
    tracing::debug!(offset, max_width = effective.max_width(), "rewrap requested");

    let outcome = RewrapCommand::new(effective.wrap_options())
        .run(&mut buf)
        .context("Rewrap failed")?;
    if let RewrapOutcome::Rewrapped(edit) = &outcome {
        tracing::info!(start = edit.span.start, end = edit.span.end, "paragraph rewrapped");
    }

    match (input_path, cli.in_place) {
        (Some(path), true) => {
            if buf.is_dirty() {
                let _scope = perf::scope("write");
                fs::write(path, buf.text())
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(buf.text().as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write stdout")?;
        }
    }

    Ok(())
}
