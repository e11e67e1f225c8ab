//! Chart adapter
//!
//! Theme-derived CSS custom properties plus tooltip and legend formatting
//! around the canvas [`LineChart`].

mod config;
mod container;
mod legend;
mod line;
mod payload;
mod tooltip;

pub use config::{chart_style, ChartConfig, SeriesColor, SeriesConfig, Theme};
pub use container::{chart_dom_id, use_chart, ChartContainer, ChartContext};
pub use legend::{ChartLegendContent, VerticalAlign};
pub use line::{nearest_index, row_payload, value_bounds, ChartRow, LineChart};
pub use payload::{
    format_number, legend_rows, resolve_config, tooltip_model, Indicator, LabelFormatter, LegendRow, PayloadItem,
    TooltipModel, TooltipOptions, TooltipRow, ValueFormatter,
};
pub use tooltip::ChartTooltipContent;
