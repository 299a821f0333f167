use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub dataset: DatasetConfig,
    #[command(flatten)]
    pub analysis: AnalysisConfig,
    #[command(flatten)]
    pub output: OutputConfig,
}

#[derive(Args, Debug, Clone)]
pub struct DatasetConfig {
    /// Column holding the text before normalization
    #[arg(long, default_value = "raw_comp_writers_text")]
    pub raw_column: String,
    /// Column holding the normalized text
    #[arg(long, default_value = "CLEAN_TEXT")]
    pub clean_column: String,
}

#[derive(Args, Debug, Clone)]
pub struct AnalysisConfig {
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    /// Scripts seen in fewer raw rows are left out of the chart
    #[arg(long, default_value_t = 3)]
    pub min_chart_samples: usize,
}

#[derive(Args, Debug, Clone)]
pub struct OutputConfig {
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            raw_column: "raw_comp_writers_text".to_string(),
            clean_column: "CLEAN_TEXT".to_string(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
            min_chart_samples: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl OutputConfig {
    pub fn script_stats_path(&self) -> PathBuf {
        self.output_dir.join("script_stats.json")
    }

    pub fn pattern_stats_path(&self) -> PathBuf {
        self.output_dir.join("pattern_stats.json")
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join("normalization_analysis.svg")
    }
}
