//! Line Chart
//!
//! Canvas line chart over categorical rows. Series are the keys of the
//! enclosing container's [`ChartConfig`](super::ChartConfig); their colours
//! come from the `--color-{key}` properties the container injects.

use leptos::*;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::container::use_chart;
use super::legend::ChartLegendContent;
use super::payload::{PayloadItem, TooltipOptions};
use super::tooltip::ChartTooltipContent;

/// Used when a series has no `--color-{key}` value
const SERIES_COLORS: [&str; 6] = ["#4ade80", "#2563eb", "#f59e0b", "#a855f7", "#ef4444", "#06b6d4"];

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;

/// One x-axis category and its value per series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub values: BTreeMap<String, f64>,
}

impl ChartRow {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

/// Tooltip payload for one row: an item per series
pub fn row_payload(row: &ChartRow, keys: &[String]) -> Vec<PayloadItem> {
    keys.iter()
        .map(|key| {
            let mut item = PayloadItem::series(key.clone(), row.values.get(key).copied());
            item.payload.insert("label".to_string(), row.label.clone());
            item
        })
        .collect()
}

/// x of row `index` out of `count` on a canvas `width` wide
fn x_position(index: usize, count: usize, width: f64) -> f64 {
    let plot = width - MARGIN_LEFT - MARGIN_RIGHT;
    if count <= 1 {
        MARGIN_LEFT + plot / 2.0
    } else {
        MARGIN_LEFT + (index as f64 / (count - 1) as f64) * plot
    }
}

/// Row closest to canvas x coordinate `x`
pub fn nearest_index(x: f64, width: f64, count: usize) -> Option<usize> {
    match count {
        0 => None,
        1 => Some(0),
        _ => {
            let plot = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
            let t = ((x - MARGIN_LEFT) / plot).clamp(0.0, 1.0);
            Some((t * (count - 1) as f64).round() as usize)
        }
    }
}

/// Padded y range over every series value, never empty
pub fn value_bounds(rows: &[ChartRow], keys: &[String]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        for key in keys {
            if let Some(v) = row.values.get(key) {
                min = min.min(*v);
                max = max.max(*v);
            }
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let padding = if max > min { (max - min) * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

#[component]
pub fn LineChart(
    #[prop(into)]
    data: Signal<Vec<ChartRow>>,
    #[prop(optional)]
    tooltip: TooltipOptions,
    #[prop(default = true)]
    legend: bool,
) -> impl IntoView {
    let chart = use_chart();
    let keys: Vec<String> = chart.config.keys().map(str::to_string).collect();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let hovered = create_rw_signal(None::<usize>);

    let draw_keys = keys.clone();
    create_effect(move |_| {
        let rows = data.get();
        let active = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &rows, &draw_keys, active);
        }
    });

    let on_move = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let client_width = canvas.client_width().max(1) as f64;
        let x = ev.offset_x() as f64 * canvas.width() as f64 / client_width;
        let count = data.with(Vec::len);
        hovered.set(nearest_index(x, canvas.width() as f64, count));
    };

    let tooltip_keys = keys.clone();
    let legend_payload: Vec<PayloadItem> = keys.iter().map(|k| PayloadItem::series(k.clone(), None)).collect();

    view! {
        <div class="relative w-full">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full aspect-video"
                on:mousemove=on_move
                on:mouseleave=move |_| hovered.set(None)
            />

            {move || {
                let row = hovered.get().and_then(|i| data.with(|rows| rows.get(i).cloned()))?;
                let options = TooltipOptions {
                    label: Some(row.label.clone()),
                    ..tooltip.clone()
                };
                let items = row_payload(&row, &tooltip_keys);
                Some(view! {
                    <div class="absolute top-2 right-2 pointer-events-none">
                        <ChartTooltipContent
                            active=Signal::derive(|| true)
                            payload=Signal::derive(move || items.clone())
                            options=options
                        />
                    </div>
                })
            }}

            {legend.then(|| {
                let payload = legend_payload.clone();
                view! { <ChartLegendContent payload=Signal::derive(move || payload.clone()) /> }
            })}
        </div>
    }
}

/// `--color-{key}` as computed for the canvas, else the fallback palette
fn series_color(canvas: &HtmlCanvasElement, key: &str, idx: usize) -> String {
    web_sys::window()
        .and_then(|w| w.get_computed_style(canvas).ok().flatten())
        .and_then(|style| style.get_property_value(&format!("--color-{}", key)).ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| SERIES_COLORS[idx % SERIES_COLORS.len()].to_string())
}

fn draw_chart(canvas: &HtmlCanvasElement, rows: &[ChartRow], keys: &[String], hovered: Option<usize>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.clear_rect(0.0, 0.0, width, height);

    if rows.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 24.0, height / 2.0);
        return;
    }

    let (min, max) = value_bounds(rows, keys);
    let y_of = |v: f64| MARGIN_TOP + ((max - v) / (max - min)) * plot_height;

    // Horizontal grid with y labels
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = MARGIN_TOP + (i as f64 / 4.0) * plot_height;
        ctx.set_stroke_style(&"rgba(93, 107, 104, 0.2)".into());
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * (max - min);
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 4.0, y + 4.0);
    }

    // X labels, thinned to at most ~8
    let step = (rows.len() / 8).max(1);
    for (i, row) in rows.iter().enumerate().step_by(step) {
        let x = x_position(i, rows.len(), width);
        let _ = ctx.fill_text(&row.label, x - 12.0, height - 10.0);
    }

    if let Some(i) = hovered.filter(|i| *i < rows.len()) {
        let x = x_position(i, rows.len(), width);
        ctx.set_stroke_style(&"rgba(93, 107, 104, 0.5)".into());
        ctx.begin_path();
        ctx.move_to(x, MARGIN_TOP);
        ctx.line_to(x, height - MARGIN_BOTTOM);
        ctx.stroke();
    }

    for (idx, key) in keys.iter().enumerate() {
        let color = series_color(canvas, key, idx);
        ctx.set_stroke_style(&color.as_str().into());
        ctx.set_fill_style(&color.as_str().into());
        ctx.set_line_width(2.0);

        // Gaps break the line
        ctx.begin_path();
        let mut drawing = false;
        for (i, row) in rows.iter().enumerate() {
            match row.values.get(key) {
                Some(v) => {
                    let (x, y) = (x_position(i, rows.len(), width), y_of(*v));
                    if drawing {
                        ctx.line_to(x, y);
                    } else {
                        ctx.move_to(x, y);
                        drawing = true;
                    }
                }
                None => drawing = false,
            }
        }
        ctx.stroke();

        for (i, row) in rows.iter().enumerate() {
            if let Some(v) = row.values.get(key) {
                let radius = if hovered == Some(i) { 4.0 } else { 2.5 };
                ctx.begin_path();
                let _ = ctx.arc(x_position(i, rows.len(), width), y_of(*v), radius, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<String> {
        vec!["desktop".to_string(), "mobile".to_string()]
    }

    #[test]
    fn test_nearest_index() {
        assert_eq!(nearest_index(100.0, 800.0, 0), None);
        assert_eq!(nearest_index(0.0, 800.0, 1), Some(0));
        assert_eq!(nearest_index(0.0, 800.0, 5), Some(0));
        assert_eq!(nearest_index(800.0, 800.0, 5), Some(4));
        let mid = x_position(2, 5, 800.0);
        assert_eq!(nearest_index(mid + 10.0, 800.0, 5), Some(2));
    }

    #[test]
    fn test_value_bounds_padded() {
        let rows = vec![
            ChartRow::new("Jan").value("desktop", 100.0).value("mobile", 50.0),
            ChartRow::new("Feb").value("desktop", 150.0),
        ];
        assert_eq!(value_bounds(&rows, &keys()), (40.0, 160.0));
        assert_eq!(value_bounds(&[], &keys()), (0.0, 1.0));
        let flat = vec![ChartRow::new("Jan").value("desktop", 5.0)];
        assert_eq!(value_bounds(&flat, &keys()), (4.0, 6.0));
    }

    #[test]
    fn test_row_payload_per_series() {
        let row = ChartRow::new("Jan").value("desktop", 186.0);
        let items = row_payload(&row, &keys());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].value, Some(186.0));
        assert_eq!(items[1].value, None);
        assert_eq!(items[1].payload.get("label").map(String::as_str), Some("Jan"));
    }
}
