use crate::chart_group::ChartGroup;
use human_repr::HumanDuration;

impl ChartGroup {
    pub fn subtext(&self) -> String {
        let x_axis = self.x_axis();
        let x_values = self.records.distinct_values(x_axis);
        let (min_time, max_time) = self.time_range();

        format!(
            "{} runs over {} values of {} ({} .. {}), time {} .. {}",
            self.records.len(),
            x_values.len(),
            x_axis,
            x_values.first().copied().unwrap_or_default(),
            x_values.last().copied().unwrap_or_default(),
            min_time.human_duration(),
            max_time.human_duration(),
        )
    }

    fn time_range(&self) -> (f64, f64) {
        self.records
            .iter()
            .map(|r| r.time_s)
            .fold(None, |range: Option<(f64, f64)>, t| match range {
                Some((min, max)) => Some((min.min(t), max.max(t))),
                None => Some((t, t)),
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::axis::GroupAxis;
    use crate::chart_group::ChartGroup;
    use crate::record::BenchmarkRecord;

    fn group() -> ChartGroup {
        ChartGroup::new(
            GroupAxis::SystemSize,
            2,
            vec![
                BenchmarkRecord::new(2, 4, 6.5),
                BenchmarkRecord::new(2, 1, 20.0),
                BenchmarkRecord::new(2, 2, 11.0),
            ]
            .into(),
        )
    }

    #[test]
    fn should_title_with_fixed_value() {
        assert_eq!(group().title(), "system size (nrep) = 2");
    }

    #[test]
    fn should_describe_points_in_subtext() {
        let subtext = group().subtext();
        assert!(subtext.starts_with("3 runs over 3 values of number of nodes (1 .. 4)"));
    }

    #[test]
    fn should_use_free_axis_for_points() {
        assert_eq!(
            group().as_charming_points(),
            vec![vec![4.0, 6.5], vec![1.0, 20.0], vec![2.0, 11.0]]
        );
        assert_eq!(group().file_stem(), "nrep_2");
    }
}
