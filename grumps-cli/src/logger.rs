//! Console output through the `log` facade.
//!
//! Commands report to the user with `log::info!`, which prints the bare
//! message. Warnings and errors get a colored prefix, and debug output only
//! appears with `--verbose` or a matching `RUST_LOG`.

use std::io::Write;

use log::Level;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args(),
            ),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args(),
            ),
            Level::Debug | Level::Trace => writeln!(
                buf,
                "{}",
                format!("[{}] {}", record.target(), record.args())
                    .if_supports_color(Stdout, |t| t.dimmed()),
            ),
        })
        .init();
}

/// Print an empty line.
pub(crate) fn log_blank() {
    log::info!("");
}
