use crate::axis::GroupAxis;
use crate::chart_group::ChartGroup;
use crate::records::BenchmarkRecords;
use tracing::debug;

/// Restricts plotting to a single node count and/or system size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub nodes: Option<u32>,
    pub system_size: Option<u32>,
}

impl Selection {
    /// Build from command line filters where 0 means "all values".
    pub fn from_filters(nodes: u32, system_size: u32) -> Self {
        let non_zero = |v: u32| (v != 0).then_some(v);
        Self {
            nodes: non_zero(nodes),
            system_size: non_zero(system_size),
        }
    }

    pub fn selected(&self, axis: GroupAxis) -> Option<u32> {
        match axis {
            GroupAxis::Nodes => self.nodes,
            GroupAxis::SystemSize => self.system_size,
        }
    }
}

/// Charts to draw: first one per node count, then one per system size.
pub fn plan_charts(records: &BenchmarkRecords, selection: Selection) -> Vec<ChartGroup> {
    [GroupAxis::Nodes, GroupAxis::SystemSize]
        .into_iter()
        .flat_map(|axis| groups_along(records, axis, selection.selected(axis)))
        .collect()
}

fn groups_along(
    records: &BenchmarkRecords,
    axis: GroupAxis,
    selected: Option<u32>,
) -> Vec<ChartGroup> {
    let values = match selected {
        Some(value) => vec![value],
        None => records.distinct_values(axis),
    };

    values
        .into_iter()
        .filter_map(|value| {
            let subset = records.filter_by(axis, value);
            if subset.distinct_values(axis.other()).len() > 1 {
                Some(ChartGroup::new(axis, value, subset))
            } else {
                debug!(
                    "Skipping chart for {axis} = {value}, only {} record(s)",
                    subset.len()
                );
                None
            }
        })
        .collect()
}
