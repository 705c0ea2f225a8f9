//! ChartLab CLI — compose a four-panel technical chart for one symbol.
//!
//! Usage: `chartlab [TICKER] [START] [END]` — any omitted argument is
//! prompted for interactively. Data comes from `data/<TICKER>.csv` when
//! present, otherwise from a seeded synthetic walk (flagged in the
//! summary). The composed chart is written as JSON under `results/`.

use anyhow::{bail, Context, Result};
use chartlab_core::data::{
    CsvProvider, DataSource, FetchResult, PriceProvider, SyntheticProvider, TradingCalendar,
};
use chartlab_core::geometry::{build_geometry, BreakoutSide, CrossDirection};
use chartlab_core::{align_sessions, compute_frame};
use chartlab_render::compose;
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;

const DATA_DIR: &str = "data";
const RESULTS_DIR: &str = "results";

#[derive(Parser)]
#[command(
    name = "chartlab",
    about = "Four-panel OHLCV technical chart composer"
)]
struct Cli {
    /// Instrument ticker (e.g., OKLO).
    ticker: Option<String>,

    /// Inclusive start date (YYYY-MM-DD).
    start: Option<String>,

    /// Inclusive end date (YYYY-MM-DD).
    end: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let ticker = resolve(cli.ticker, "ticker: ")?;
    let start = parse_date(&resolve(cli.start, "start date (YYYY-MM-DD): ")?)?;
    let end = parse_date(&resolve(cli.end, "end date (YYYY-MM-DD): ")?)?;
    if end < start {
        bail!("end date {end} precedes start date {start}");
    }

    run(&ticker, start, end)
}

/// Use the positional argument when given, otherwise prompt for it.
fn resolve(arg: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value);
    }
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let value = line.trim().to_string();
    if value.is_empty() {
        bail!("no value given");
    }
    Ok(value)
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("bad date '{value}': expected YYYY-MM-DD"))
}

fn run(ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<()> {
    let fetched = fetch(ticker, start, end)?;
    let calendar = TradingCalendar::weekdays(start, end);

    let series = align_sessions(&fetched.rows, &calendar, ticker)?;
    let aligned_len = series.len();
    let (series, frame) = compute_frame(&series)?;
    let geometry = build_geometry(&series, &frame);
    let spec = compose(ticker, &series, &frame, &geometry);

    std::fs::create_dir_all(RESULTS_DIR)?;
    let out_path = format!("{RESULTS_DIR}/{ticker}-{start}-{end}.json");
    let json = serde_json::to_string_pretty(&spec)?;
    std::fs::write(&out_path, json).with_context(|| format!("writing {out_path}"))?;

    let breakouts_above = geometry
        .breakouts
        .iter()
        .filter(|b| b.side == BreakoutSide::Above)
        .count();
    let breakouts_below = geometry.breakouts.len() - breakouts_above;
    let golden = geometry
        .crossovers
        .iter()
        .filter(|c| c.direction == CrossDirection::Up)
        .count();
    let death = geometry.crossovers.len() - golden;

    println!();
    println!("=== {} ===", spec.title);
    println!("Period:     {start} to {end}");
    println!(
        "Sessions:   {} ({} warm-up dropped)",
        frame.len(),
        aligned_len - frame.len()
    );
    println!("Breakouts:  {breakouts_above} above, {breakouts_below} below");
    println!("Crossovers: {golden} golden, {death} death");
    println!("Labels:     {}", geometry.labels.len());
    println!("Chart spec: {out_path}");
    if fetched.source == DataSource::Synthetic {
        println!();
        println!("WARNING: chart based on SYNTHETIC data (no data/{ticker}.csv found)");
    }

    Ok(())
}

/// CSV file when one exists for the symbol, synthetic walk otherwise.
fn fetch(ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<FetchResult> {
    let csv = CsvProvider::new(DATA_DIR);
    if Path::new(DATA_DIR).exists() && csv.path_for(ticker).exists() {
        return Ok(csv.fetch(ticker, start, end)?);
    }
    log::warn!("no CSV for {ticker}, falling back to synthetic data");
    Ok(SyntheticProvider::from_symbol(ticker).fetch(ticker, start, end)?)
}
