//! Driver configuration from CLI flags and environment.

use clap::Parser;

/// bignat — regression and benchmark driver for the arithmetic engine.
#[derive(Parser, Debug)]
#[command(name = "bignat", version, about)]
pub struct AppConfig {
    /// Digit count for benchmark operands.
    #[arg(short, long, default_value = "100000", env = "BIGNAT_DIGITS")]
    pub digits: usize,

    /// Benchmark iterations to average over.
    #[arg(short, long, default_value = "5")]
    pub iterations: usize,

    /// Run only the fingerprint regression checks.
    #[arg(long)]
    pub check: bool,

    /// Run only the multiplication benchmark.
    #[arg(long)]
    pub bench: bool,

    /// Quiet mode (only print the benchmark average).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
