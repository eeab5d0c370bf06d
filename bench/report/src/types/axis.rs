use crate::record::BenchmarkRecord;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Dimension along which records are grouped into charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GroupAxis {
    #[display("number of nodes")]
    #[serde(rename = "nodes")]
    Nodes,
    #[display("system size (nrep)")]
    #[serde(rename = "nrep")]
    SystemSize,
}

impl GroupAxis {
    pub fn label(&self) -> &'static str {
        match self {
            GroupAxis::Nodes => "number of nodes",
            GroupAxis::SystemSize => "system size (nrep)",
        }
    }

    /// Prefix used for chart file names.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            GroupAxis::Nodes => "nodes",
            GroupAxis::SystemSize => "nrep",
        }
    }

    pub fn value(&self, record: &BenchmarkRecord) -> u32 {
        match self {
            GroupAxis::Nodes => record.nodes,
            GroupAxis::SystemSize => record.system_size,
        }
    }

    /// The axis left free when this one is held fixed.
    pub fn other(&self) -> GroupAxis {
        match self {
            GroupAxis::Nodes => GroupAxis::SystemSize,
            GroupAxis::SystemSize => GroupAxis::Nodes,
        }
    }
}
