//! Logger setup: console output plus an optional ANSI-free log file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Writes every log line to stdout and, when set, to a file with colour
/// codes removed.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger.
///
/// `--quiet` keeps warnings and errors, `--verbose` adds debug output and
/// timestamps. HTTP stack internals stay at warning level either way.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let file = logfile.map(File::create).transpose()?;

    let mut builder = Builder::new();
    builder
        .filter_level(level_for(quiet, verbose))
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper_util", LevelFilter::Warn)
        .filter_module("rustls", LevelFilter::Warn)
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .format(move |buf, record| {
            let prefix = match record.level() {
                Level::Error => format!("{} ", "error:".if_supports_color(Stdout, |t| t.red())),
                Level::Warn => format!(
                    "{} ",
                    "warning:".if_supports_color(Stdout, |t| t.yellow())
                ),
                _ => String::new(),
            };
            if verbose {
                writeln!(
                    buf,
                    "[{} {:<5} {}] {}{}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.target(),
                    prefix,
                    record.args()
                )
            } else {
                writeln!(buf, "{}{}", prefix, record.args())
            }
        });

    builder.try_init().map_err(io::Error::other)
}
