mod types;

pub mod error;
pub mod grouping;
pub mod parser;
pub mod plotting;
mod prints;

pub use types::*;

use crate::chart_group::ChartGroup;
use crate::plotting::chart::BenchChart;
use charming::Chart;

/// Create a scatter chart of time against the free axis of a group.
pub fn create_scatter_chart(group: &ChartGroup, dark: bool) -> Chart {
    let x_axis = group.x_axis();
    BenchChart::new(&group.title(), &group.subtext(), dark)
        .with_value_x_axis(x_axis.label())
        .with_y_axis(TIME_COLUMN)
        .add_scatter_series(&group.title(), group.as_charming_points(), "#5470c6")
        .inner
}

/// Column label of the elapsed time, shared by the raw data table and the charts.
pub const TIME_COLUMN: &str = "time [s]";
