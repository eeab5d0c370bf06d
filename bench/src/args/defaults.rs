pub const DEFAULT_RESULTS_FILE: &str = "results.txt";
pub const DEFAULT_NODES: u32 = 0;
pub const DEFAULT_NREP: u32 = 0;
pub const DEFAULT_OUTPUT_DIR: &str = "charts";
pub const DEFAULT_CHART_WIDTH: u64 = 1600;
pub const DEFAULT_CHART_HEIGHT: u64 = 1200;
