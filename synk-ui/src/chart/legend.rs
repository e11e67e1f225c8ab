use leptos::*;

use super::container::use_chart;
use super::payload::{legend_rows, PayloadItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    #[default]
    Bottom,
}

impl VerticalAlign {
    fn padding(self) -> &'static str {
        match self {
            VerticalAlign::Top => "pb-3",
            VerticalAlign::Bottom => "pt-3",
        }
    }
}

/// Series swatches and labels; nothing for an empty payload
#[component]
pub fn ChartLegendContent(
    #[prop(into)]
    payload: Signal<Vec<PayloadItem>>,
    #[prop(optional, into)]
    name_key: Option<String>,
    #[prop(optional)]
    hide_icon: bool,
    #[prop(optional)]
    vertical_align: VerticalAlign,
) -> impl IntoView {
    let chart = use_chart();

    move || {
        let rows = payload.with(|items| legend_rows(&chart.config, items, name_key.as_deref()));
        if rows.is_empty() {
            return None;
        }

        Some(view! {
            <div class=format!("flex items-center justify-center gap-4 {}", vertical_align.padding())>
                {rows.into_iter().map(|row| view! {
                    <div class="flex items-center gap-2">
                        {(!hide_icon).then(|| view! {
                            <span
                                class="inline-block h-3 w-3 shrink-0 rounded-sm"
                                style=format!("background: {}", row.color.clone().unwrap_or_default())
                            />
                        })}
                        <span class="text-xs">{row.label}</span>
                    </div>
                }).collect_view()}
            </div>
        })
    }
}
