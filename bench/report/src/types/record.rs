use derive_new::new;
use serde::{Deserialize, Serialize};

/// A single benchmark run extracted from the logs.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, new)]
pub struct BenchmarkRecord {
    /// NREP multiplier of the water input file
    #[serde(rename = "system size (nrep)")]
    pub system_size: u32,

    /// Number of compute nodes the run was executed on
    #[serde(rename = "number of nodes")]
    pub nodes: u32,

    /// Total wall-clock time reported by CP2K
    #[serde(rename = "time [s]")]
    pub time_s: f64,
}
