pub mod defaults;

use clap::Parser;
use cp2k_bench_report::grouping::Selection;
use self::defaults::*;
use std::path::PathBuf;

/// Plot pretty CP2K water benchmarks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct PlotArgs {
    /// Results file to parse, typically the output of
    /// `grep -A2 -Pn '(TOTAL TIME|NREP)' slurm-H2O-dft-ls.n* > results.txt`
    #[arg(long, short = 'f', value_name = "results_file.txt", default_value = DEFAULT_RESULTS_FILE)]
    pub file: PathBuf,

    /// Plot only this number of nodes, 0 plots all
    #[arg(long, short = 'n', value_name = "NUM_NODES", default_value_t = DEFAULT_NODES)]
    pub nodes: u32,

    /// Plot only this system size (nrep), 0 plots all
    #[arg(long, short = 'r', value_name = "NREP", default_value_t = DEFAULT_NREP)]
    pub nrep: u32,

    /// Output directory for the generated HTML charts
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Use a light background instead of the dark one
    #[arg(long, default_value_t = false)]
    pub light: bool,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub width: u64,

    /// Chart height in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    pub height: u64,

    /// Also write the parsed records to records.json in the output directory
    #[arg(long, default_value_t = false)]
    pub dump_json: bool,

    /// Open generated charts in browser after they are saved
    #[arg(long, default_value_t = false)]
    pub open_charts: bool,
}

impl PlotArgs {
    pub fn selection(&self) -> Selection {
        Selection::from_filters(self.nodes, self.nrep)
    }

    pub fn dark(&self) -> bool {
        !self.light
    }
}
