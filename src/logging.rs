use chrono::{DateTime, Local};
use env_logger::{Env, Target};
use log::Record;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

use crate::error::Result;

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// `2026-10-19 09:30:00.000 [ INFO] kanban::card: moved ...`
pub fn format_record<W: Write>(
    out: &mut W,
    now: DateTime<Local>,
    record: &Record<'_>,
) -> io::Result<()> {
    writeln!(
        out,
        "{} [{:>5}] {}: {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Installs the logger writing to `path`. Without a path logging stays off:
/// stderr belongs to the terminal UI.
pub fn init(path: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| format_record(buf, Local::now(), record))
        .init();
    Ok(())
}
