use leptos::*;

use super::container::use_chart;
use super::payload::{tooltip_model, Indicator, PayloadItem, TooltipOptions, TooltipRow};

fn indicator_classes(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Dot => "h-2.5 w-2.5 rounded-[2px]",
        Indicator::Line => "w-1 self-stretch rounded-[2px]",
        Indicator::Dashed => "w-0 self-stretch border-[1.5px] border-dashed bg-transparent",
    }
}

/// Tooltip body for the hovered point of the enclosing chart
#[component]
pub fn ChartTooltipContent(
    #[prop(into)]
    active: Signal<bool>,
    #[prop(into)]
    payload: Signal<Vec<PayloadItem>>,
    #[prop(optional)]
    options: TooltipOptions,
) -> impl IntoView {
    let chart = use_chart();

    move || {
        if !active.get() {
            return None;
        }
        let model = payload.with(|items| tooltip_model(&chart.config, items, &options))?;
        let nested = model.nest_label.then(|| model.label.clone()).flatten();
        let header = (!model.nest_label).then(|| model.label.clone()).flatten();
        let indicator = options.indicator;
        let hide_indicator = options.hide_indicator;

        Some(view! {
            <div class="border-border/50 bg-background grid min-w-[8rem] items-start gap-1.5 rounded-lg border px-2.5 py-1.5 text-xs shadow-xl">
                {header.map(|label| view! { <div class="font-medium">{label}</div> })}
                <div class="grid gap-1.5">
                    {model.rows.into_iter().map(|row| view! {
                        <TooltipEntry row=row indicator=indicator hide_indicator=hide_indicator nested=nested.clone() />
                    }).collect_view()}
                </div>
            </div>
        })
    }
}

#[component]
fn TooltipEntry(
    row: TooltipRow,
    indicator: Indicator,
    hide_indicator: bool,
    nested: Option<String>,
) -> impl IntoView {
    let swatch = (!hide_indicator).then(|| {
        let color = row.indicator_color.clone().unwrap_or_default();
        let style = match indicator {
            Indicator::Dashed => format!("border-color: {}", color),
            _ => format!("background: {}", color),
        };
        view! {
            <span class=format!("inline-block shrink-0 {}", indicator_classes(indicator)) style=style />
        }
    });

    view! {
        <div class="flex items-center gap-2">
            {swatch}
            <div class="flex flex-1 justify-between items-center gap-4 leading-none">
                <div class="grid gap-1.5">
                    {nested.map(|label| view! { <span class="font-medium">{label}</span> })}
                    <span class="text-muted-foreground">{row.label}</span>
                </div>
                <span class="text-foreground font-mono font-medium tabular-nums">{row.value}</span>
            </div>
        </div>
    }
}
