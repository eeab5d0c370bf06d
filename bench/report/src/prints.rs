use crate::axis::GroupAxis;
use crate::records::BenchmarkRecords;
use crate::TIME_COLUMN;
use colored::Colorize;
use comfy_table::Table;

impl BenchmarkRecords {
    pub fn raw_data_table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec![
            GroupAxis::SystemSize.label(),
            GroupAxis::Nodes.label(),
            TIME_COLUMN,
        ]);

        self.iter().for_each(|record| {
            table.add_row(vec![
                record.system_size.to_string(),
                record.nodes.to_string(),
                format!("{:.3}", record.time_s),
            ]);
        });

        table
    }

    pub fn print_raw_data(&self) {
        println!("{}", "Raw data:".blue());
        if self.is_empty() {
            println!("{}", "No records found".yellow());
            return;
        }
        println!("{}", self.raw_data_table());
    }
}

#[cfg(test)]
mod tests {
    use crate::record::BenchmarkRecord;
    use crate::records::BenchmarkRecords;

    #[test]
    fn should_render_one_row_per_record_in_order() {
        let records: BenchmarkRecords = vec![
            BenchmarkRecord::new(2, 1, 8.814),
            BenchmarkRecord::new(1, 4, 3.2),
        ]
        .into();
        let rendered = records.raw_data_table().to_string();
        assert!(rendered.contains("system size (nrep)"));
        assert!(rendered.contains("time [s]"));
        let first = rendered.find("8.814").unwrap();
        let second = rendered.find("3.200").unwrap();
        assert!(first < second);
    }
}
