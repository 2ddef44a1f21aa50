use std::{io::Write, path::PathBuf};

use clap::{Parser, ValueEnum};

use crate::{
    common::{error::AppError, event::SessionEvent},
    domain::ledger::Ledger,
    io::{reader, writer},
    worker::processor::{Feedback, Processor},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Report {
    /// Every record, oldest first.
    #[default]
    Records,
    /// Income, expense and balance totals.
    Summary,
}

#[derive(Debug, Parser)]
#[command(
    name = "dompet",
    about = "Replays a session of income/expense entries and reports the ledger"
)]
pub struct Cli {
    /// Session script (CSV with headers `type,name,category,method,amount`).
    pub script: PathBuf,
    /// Which report to write to stdout.
    #[arg(long, value_enum, env = "DOMPET_REPORT", default_value_t = Report::Records)]
    pub report: Report,
    /// Log filter for stderr, e.g. `info` or `dompet=debug`.
    #[arg(long, env = "DOMPET_LOG", default_value = "info")]
    pub log_level: String,
}

/// Tallies what happened during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub saved: usize,
    pub rejected: usize,
    pub cleared: usize,
}

pub fn parse_cli<I, S>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    Cli::try_parse_from(args)
}

pub fn run<W: Write>(cli: &Cli, out: W) -> Result<RunStats, AppError> {
    let file = std::fs::File::open(&cli.script)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut ledger = Ledger::new();
    let stats = replay(&mut ledger, reader::read_session(&mut reader))?;
    tracing::info!(
        saved = stats.saved,
        rejected = stats.rejected,
        cleared = stats.cleared,
        records = ledger.len(),
        "session replayed"
    );

    match cli.report {
        Report::Records => writer::write_records(out, &ledger.all_records())?,
        Report::Summary => writer::write_summary(out, &ledger.summary())?,
    }
    Ok(stats)
}

/// Feeds every event into the ledger. Stops at the first unreadable row.
pub fn replay<E>(ledger: &mut Ledger, events: E) -> Result<RunStats, AppError>
where
    E: IntoIterator<Item = Result<SessionEvent, String>>,
{
    let mut processor = Processor::new();
    let mut stats = RunStats::default();
    for event in events {
        let event = event.map_err(AppError::Parse)?;
        match processor.process(ledger, event) {
            Feedback::Saved(_) => stats.saved += 1,
            Feedback::Rejected(_) => stats.rejected += 1,
            Feedback::Cleared => stats.cleared += 1,
        }
    }
    Ok(stats)
}
