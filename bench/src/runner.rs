use crate::args::PlotArgs;
use crate::plot::{open_chart, plot_chart, ChartOptions};
use anyhow::{Context, Result};
use cp2k_bench_report::grouping::plan_charts;
use cp2k_bench_report::parser::parse_file;
use tracing::{info, warn};

pub struct PlotRunner {
    args: PlotArgs,
}

impl PlotRunner {
    pub fn new(args: PlotArgs) -> Self {
        Self { args }
    }

    pub fn run(&self) -> Result<()> {
        let args = &self.args;
        println!(
            "Program parameters: {} {} {}",
            args.file.display(),
            args.nodes,
            args.nrep
        );

        let records = parse_file(&args.file)
            .with_context(|| format!("Problem parsing results file {}", args.file.display()))?;
        records.print_raw_data();

        if args.dump_json {
            let path = records
                .dump_to_json(&args.output_dir)
                .context("Problem dumping records")?;
            info!("Records written to {}", path.display());
        }

        let groups = plan_charts(&records, args.selection());
        if groups.is_empty() {
            warn!("No group has more than one data point, nothing to plot");
            return Ok(());
        }

        let options = ChartOptions {
            dark: args.dark(),
            width: args.width,
            height: args.height,
        };
        for group in &groups {
            let path = plot_chart(group, &args.output_dir, &options)
                .with_context(|| format!("Problem plotting {}", group.title()))?;
            if args.open_charts {
                open_chart(&path);
            }
        }
        info!("Generated {} charts in {}", groups.len(), args.output_dir.display());
        Ok(())
    }
}
