use crate::chart_group::ChartGroup;

/// Returns a title for a chart group, e.g. `number of nodes = 4`
impl ChartGroup {
    pub fn title(&self) -> String {
        format!("{} = {}", self.fixed_axis, self.fixed_value)
    }
}
