use charming::{
    component::{
        Axis, DataView, Feature, Grid, Legend, Restore, SaveAsImage, Title, Toolbox,
        ToolboxDataZoom,
    },
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, NameLocation, SplitLine,
        TextAlign, TextStyle, Tooltip, Trigger,
    },
    series::Scatter,
    Chart,
};

pub struct BenchChart {
    pub inner: Chart,
}

const AXIS_TEXT_SIZE: u32 = 16;
const SYMBOL_SIZE: f64 = 12.0;

impl BenchChart {
    /// Create a new `BenchChart` with default tooltip, legend, grid, and toolbox.
    pub fn new(title: &str, subtext: &str, dark: bool) -> Self {
        let chart = Chart::new()
            .title(
                Title::new()
                    .text(title)
                    .text_align(TextAlign::Center)
                    .subtext(subtext)
                    .text_style(TextStyle::new().font_size(24).font_weight("bold"))
                    .subtext_style(TextStyle::new().font_size(14).line_height(20))
                    .left("50%")
                    .top("1%"),
            )
            .tooltip(
                Tooltip::new()
                    .trigger(Trigger::Item)
                    .axis_pointer(AxisPointer::new().type_(AxisPointerType::Cross)),
            )
            .legend(Legend::new().show(false))
            .grid(Grid::new().left("8%").right("8%").top("14%").bottom("8%"))
            .toolbox(
                Toolbox::new().feature(
                    Feature::new()
                        .data_zoom(ToolboxDataZoom::new())
                        .data_view(DataView::new())
                        .restore(Restore::new())
                        .save_as_image(SaveAsImage::new()),
                ),
            );

        let chart = if dark {
            chart.background_color("#242424")
        } else {
            chart
        };

        Self { inner: chart }
    }

    /// Configure the X axis with the free grouping column.
    pub fn with_value_x_axis(mut self, axis_label: &str) -> Self {
        self.inner = self.inner.x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(axis_label)
                .name_location(NameLocation::Middle)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(30)
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    pub fn with_y_axis(mut self, axis_label: &str) -> Self {
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .position("left")
                .axis_label(AxisLabel::new().formatter("{value} s"))
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Add a scatter series; `points` is a list of `[x, y]` pairs.
    pub fn add_scatter_series(mut self, name: &str, points: Vec<Vec<f64>>, color: &str) -> Self {
        let scatter = Scatter::new()
            .name(name)
            .symbol_size(SYMBOL_SIZE)
            .item_style(ItemStyle::new().color(color))
            .data(points);

        self.inner = self.inner.series(scatter);
        self
    }
}
