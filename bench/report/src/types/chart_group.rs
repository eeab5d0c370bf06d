use crate::axis::GroupAxis;
use crate::records::BenchmarkRecords;
use derive_new::new;

/// Records sharing one fixed value, plotted against the other axis.
#[derive(Debug, Clone, PartialEq, new)]
pub struct ChartGroup {
    pub fixed_axis: GroupAxis,
    pub fixed_value: u32,
    pub records: BenchmarkRecords,
}

impl ChartGroup {
    pub fn x_axis(&self) -> GroupAxis {
        self.fixed_axis.other()
    }

    /// File name (without extension) of the rendered chart, e.g. `nodes_4`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.fixed_axis.file_prefix(), self.fixed_value)
    }

    pub fn as_charming_points(&self) -> Vec<Vec<f64>> {
        let x_axis = self.x_axis();
        self.records
            .iter()
            .map(|r| vec![x_axis.value(r) as f64, r.time_s])
            .collect()
    }
}
