//! Extraction of benchmark records from grepped Slurm output.
//!
//! The input is expected to come from
//! `grep -A2 -Pn '(TOTAL TIME|NREP)' slurm-H2O-dft-ls.n* > results.txt`, which
//! prefixes every line with the Slurm file name and the line number (`:` for
//! matching lines, `-` for context lines).

use crate::error::ReportError;
use crate::record::BenchmarkRecord;
use crate::records::BenchmarkRecords;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

lazy_static! {
    // slurm-H2O-dft-ls.n1.12659210.o:42: CP2K| Input file name                                      H2O-dft-ls.NREP1.inp
    static ref INPUT_FILE_DESCRIPTION_REGEX: Regex = Regex::new(
        r"^slurm-.*.n(?P<nnodes>\d+)(.*)?.\d+.o:\d+: CP2K\| Input file name\s+H2O-(dft-ls|md).NREP(?P<nrep>\d+)(.*)?.inp"
    )
    .unwrap();
    // slurm-H2O-dft-ls.n1.12659210.o-905- CP2K                                 1  1.0    0.038    0.038    8.814    8.814
    static ref TOTAL_TIME_REGEX: Regex = Regex::new(
        r"^slurm-.*.n(?P<nnodes>\d+)(.*)?.\d+.o-\d+- CP2K\s+1\s+1.0\s+\d+.\d+\s+\d+.\d+\s+\d+.\d+\s+(?P<time>\d+.\d+)"
    )
    .unwrap();
}

/// Line scanner carrying the system size of the last input file description.
#[derive(Debug, Default)]
pub struct LogParser {
    current_system_size: Option<u32>,
    records: BenchmarkRecords,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line; `line_number` is 1-based and only used for errors.
    pub fn scan_line(&mut self, line_number: usize, line: &str) -> Result<(), ReportError> {
        if let Some(captures) = INPUT_FILE_DESCRIPTION_REGEX.captures(line) {
            let system_size = parse_capture::<u32>(&captures, "nrep", line_number)?;
            self.current_system_size = Some(system_size);
        }

        if let Some(captures) = TOTAL_TIME_REGEX.captures(line) {
            let system_size = self
                .current_system_size
                .ok_or(ReportError::MissingSystemSize { line: line_number })?;
            let nodes = parse_capture::<u32>(&captures, "nnodes", line_number)?;
            let time_s = parse_capture::<f64>(&captures, "time", line_number)?;
            let record = BenchmarkRecord::new(system_size, nodes, time_s);
            debug!("Line {line_number}: {record:?}");
            self.records.push(record);
        }

        Ok(())
    }

    pub fn finish(self) -> BenchmarkRecords {
        self.records
    }
}

pub fn parse_str(content: &str) -> Result<BenchmarkRecords, ReportError> {
    let mut parser = LogParser::new();
    let mut lines = 0;
    for (index, line) in content.lines().enumerate() {
        parser.scan_line(index + 1, line)?;
        lines += 1;
    }
    let records = parser.finish();
    info!("Parsed {} records from {} lines", records.len(), lines);
    Ok(records)
}

pub fn parse_file(path: &Path) -> Result<BenchmarkRecords, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content)
}

fn parse_capture<T: FromStr>(
    captures: &Captures,
    name: &str,
    line: usize,
) -> Result<T, ReportError> {
    let value = captures.name(name).map(|m| m.as_str()).unwrap_or_default();
    value.parse::<T>().map_err(|_| ReportError::InvalidNumber {
        line,
        value: value.to_owned(),
    })
}
