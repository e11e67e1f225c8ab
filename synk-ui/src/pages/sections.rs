//! Dashboard sections reachable from the sidebar.

use leptos::*;

use crate::chart::{ChartConfig, ChartContainer, ChartRow, LineChart, SeriesConfig};

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="flex flex-col gap-1">
            <h1 class="text-xl font-semibold">{title}</h1>
            <p class="text-sm text-muted-foreground">{subtitle}</p>
        </header>
    }
}

fn meeting_chart_config() -> ChartConfig {
    ChartConfig::new()
        .with("scheduled", SeriesConfig::new().label("Scheduled").themed("#15803d", "#86efac"))
        .with("completed", SeriesConfig::new().label("Completed").color("#2563eb"))
}

/// Weekly meeting counts shown until a meetings API exists
fn sample_activity() -> Vec<ChartRow> {
    [("Mon", 3.0, 2.0), ("Tue", 5.0, 4.0), ("Wed", 2.0, 2.0), ("Thu", 6.0, 3.0), ("Fri", 4.0, 4.0)]
        .into_iter()
        .map(|(day, scheduled, completed)| {
            ChartRow::new(day)
                .value("scheduled", scheduled)
                .value("completed", completed)
        })
        .collect()
}

#[component]
pub fn MeetingsView() -> impl IntoView {
    let activity = Signal::derive(sample_activity);

    view! {
        <div class="flex flex-col gap-6 p-4 md:p-8">
            <SectionHeader title="Meetings" subtitle="Your meetings with agents" />
            <div class="rounded-xl border bg-white p-4">
                <ChartContainer id="meetings" config=meeting_chart_config()>
                    <LineChart data=activity />
                </ChartContainer>
            </div>
        </div>
    }
}

#[component]
pub fn AgentsView() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6 p-4 md:p-8">
            <SectionHeader title="Agents" subtitle="Agents you can bring into a meeting" />
        </div>
    }
}

#[component]
pub fn UpgradeView() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6 p-4 md:p-8">
            <SectionHeader title="Upgrade" subtitle="Plans and billing" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rows_cover_every_configured_series() {
        let config = meeting_chart_config();
        let rows = sample_activity();
        assert_eq!(rows.len(), 5);
        for row in &rows {
            for key in config.keys() {
                assert!(row.values.contains_key(key), "{} missing {}", row.label, key);
            }
        }
    }
}
