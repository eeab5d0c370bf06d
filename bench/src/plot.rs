use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};
use cp2k_bench_report::chart_group::ChartGroup;
use cp2k_bench_report::error::ReportError;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::{info, warn};

pub struct ChartOptions {
    pub dark: bool,
    pub width: u64,
    pub height: u64,
}

pub fn plot_chart(
    group: &ChartGroup,
    output_directory: &Path,
    options: &ChartOptions,
) -> Result<PathBuf, ReportError> {
    let data_processing_start = Instant::now();
    let chart = cp2k_bench_report::create_scatter_chart(group, options.dark);
    let data_processing_time = data_processing_start.elapsed();

    let chart_render_start = Instant::now();
    let chart_path = save_chart(&chart, &group.file_stem(), output_directory, options)?;
    let chart_render_time = chart_render_start.elapsed();

    info!(
        "Generated '{}' plot at: {} ({} points, data processing: {:.2?}, chart render: {:.2?})",
        group.title(),
        chart_path.display(),
        group.records.len(),
        data_processing_time,
        chart_render_time
    );
    Ok(chart_path)
}

fn save_chart(
    chart: &Chart,
    file_name: &str,
    output_directory: &Path,
    options: &ChartOptions,
) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(output_directory).map_err(|_| {
        ReportError::CannotCreateOutputDirectory(output_directory.to_path_buf())
    })?;
    let full_output_path = output_directory.join(format!("{}.html", file_name));

    let theme = if options.dark {
        Theme::Dark
    } else {
        Theme::Default
    };
    let mut renderer = HtmlRenderer::new(file_name, options.width, options.height).theme(theme);
    renderer
        .save(chart, &full_output_path)
        .map_err(|e| ReportError::CannotSaveChart {
            path: full_output_path.clone(),
            reason: e.to_string(),
        })?;
    Ok(full_output_path)
}

/// Hand a saved chart to the platform opener, without waiting for it.
pub fn open_chart(path: &Path) {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };

    if let Err(e) = command.arg(path).spawn() {
        warn!("Failed to open chart {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cp2k_bench_report::axis::GroupAxis;
    use cp2k_bench_report::record::BenchmarkRecord;

    #[test]
    fn should_save_chart_named_after_fixed_value() {
        let group = ChartGroup::new(
            GroupAxis::Nodes,
            4,
            vec![
                BenchmarkRecord::new(1, 4, 3.2),
                BenchmarkRecord::new(2, 4, 7.9),
            ]
            .into(),
        );
        let output_dir = tempfile::tempdir().unwrap();
        let options = ChartOptions {
            dark: true,
            width: 800,
            height: 600,
        };

        let path = plot_chart(&group, output_dir.path(), &options).unwrap();

        assert_eq!(path, output_dir.path().join("nodes_4.html"));
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("number of nodes = 4"));
    }
}
