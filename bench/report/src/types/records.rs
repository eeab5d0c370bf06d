use crate::axis::GroupAxis;
use crate::error::ReportError;
use crate::record::BenchmarkRecord;
use derive_more::{Deref, From};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const RECORDS_FILE_NAME: &str = "records.json";

/// Records in the order they were found in the log.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, Deref, From)]
#[serde(transparent)]
pub struct BenchmarkRecords(Vec<BenchmarkRecord>);

impl BenchmarkRecords {
    pub fn push(&mut self, record: BenchmarkRecord) {
        self.0.push(record);
    }

    /// Sorted distinct values of the given column.
    pub fn distinct_values(&self, axis: GroupAxis) -> Vec<u32> {
        self.0
            .iter()
            .map(|r| axis.value(r))
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .collect()
    }

    /// Records whose column equals `value`, order preserved.
    pub fn filter_by(&self, axis: GroupAxis, value: u32) -> BenchmarkRecords {
        self.0
            .iter()
            .filter(|r| axis.value(r) == value)
            .copied()
            .collect::<Vec<_>>()
            .into()
    }

    pub fn into_inner(self) -> Vec<BenchmarkRecord> {
        self.0
    }

    pub fn dump_to_json(&self, output_dir: &Path) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(output_dir)
            .map_err(|_| ReportError::CannotCreateOutputDirectory(output_dir.to_path_buf()))?;

        let records_path = output_dir.join(RECORDS_FILE_NAME);
        let records_json = serde_json::to_string_pretty(self)?;
        std::fs::write(&records_path, records_json).map_err(|source| ReportError::Io {
            path: records_path.clone(),
            source,
        })?;
        Ok(records_path)
    }
}

impl<'a> IntoIterator for &'a BenchmarkRecords {
    type Item = &'a BenchmarkRecord;
    type IntoIter = std::slice::Iter<'a, BenchmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
