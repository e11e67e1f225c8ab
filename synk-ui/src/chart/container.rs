//! Chart container: scopes theme colours to one chart and shares its
//! config with the tooltip and legend inside it.

use leptos::*;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::config::{chart_style, ChartConfig};

static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

/// `chart-{id}`, or `chart-{n}` from a per-process counter
pub fn chart_dom_id(id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => format!("chart-{}", id),
        _ => format!("chart-{}", NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed)),
    }
}

#[derive(Clone)]
pub struct ChartContext {
    pub id: String,
    pub config: Rc<ChartConfig>,
}

/// Config of the enclosing [`ChartContainer`]
pub fn use_chart() -> ChartContext {
    use_context::<ChartContext>().expect("useChart must be used within a <ChartContainer />")
}

#[component]
pub fn ChartContainer(
    #[prop(optional, into)]
    id: Option<String>,
    config: ChartConfig,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let chart_id = chart_dom_id(id.as_deref());
    let style = chart_style(&chart_id, &config);

    provide_context(ChartContext {
        id: chart_id.clone(),
        config: Rc::new(config),
    });

    view! {
        <div
            data-slot="chart"
            data-chart=chart_id
            class=format!("relative flex flex-col justify-center text-xs {}", class)
        >
            {style.map(|css| view! { <style inner_html=css /> })}
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_id() {
        assert_eq!(chart_dom_id(Some("usage")), "chart-usage");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = chart_dom_id(None);
        let b = chart_dom_id(Some(""));
        assert_ne!(a, b);
        assert!(a.starts_with("chart-") && b.starts_with("chart-"));
    }
}
