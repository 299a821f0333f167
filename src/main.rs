use clap::Parser;
use normaudit::analysis::{
    normalization_patterns_with_seed, script_preservation_with_seed, PatternStats, ScriptStats,
};
use normaudit::config::Config;
use normaudit::error::AuditResult;
use normaudit::loader::load_records;
use normaudit::output::{read_json, write_json};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file of raw/clean text pairs
    #[arg(default_value = "normalization_assesment_dataset_10k.csv")]
    dataset: PathBuf,

    #[command(flatten)]
    config: Config,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("❌ FATAL: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> AuditResult<()> {
    let cfg = &cli.config;
    info!("🚀 Starting normalization audit...");

    let records = load_records(&cli.dataset, &cfg.dataset)?;
    fs::create_dir_all(&cfg.output.output_dir)?;

    let script_path = cfg.output.script_stats_path();
    let pattern_path = cfg.output.pattern_stats_path();

    let script_stats =
        script_preservation_with_seed(&records, cfg.analysis.sample_size, cfg.analysis.seed);
    write_json(&script_path, &script_stats)?;

    let pattern_stats =
        normalization_patterns_with_seed(&records, cfg.analysis.sample_size, cfg.analysis.seed)?;
    write_json(&pattern_path, &pattern_stats)?;

    // Render from what landed on disk.
    let script_stats: ScriptStats = read_json(&script_path)?;
    let pattern_stats: PatternStats = read_json(&pattern_path)?;

    let chart_path = cfg.output.chart_path();
    reports::chart::render_charts(
        &chart_path,
        &script_stats,
        &pattern_stats,
        cfg.analysis.min_chart_samples,
    )?;
    info!("📊 Visualization saved as '{}'", chart_path.display());

    reports::print_summary(&script_stats, &pattern_stats);
    Ok(())
}
