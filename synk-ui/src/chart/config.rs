//! Chart series configuration and the theme CSS derived from it.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Selector prefixed to `[data-chart=...]` for this theme
    pub fn selector_prefix(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => ".dark",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeriesColor {
    #[default]
    None,
    Fixed(String),
    Themed { light: String, dark: String },
}

impl SeriesColor {
    /// Colour for `theme`; a themed colour is used over any fixed one
    pub fn for_theme(&self, theme: Theme) -> Option<&str> {
        let color = match self {
            SeriesColor::None => return None,
            SeriesColor::Fixed(color) => color,
            SeriesColor::Themed { light, dark } => match theme {
                Theme::Light => light,
                Theme::Dark => dark,
            },
        };
        (!color.is_empty()).then_some(color.as_str())
    }

    pub fn is_set(&self) -> bool {
        Theme::ALL.iter().any(|t| self.for_theme(*t).is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesConfig {
    pub label: Option<String>,
    pub color: SeriesColor,
}

impl SeriesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = SeriesColor::Fixed(color.into());
        self
    }

    pub fn themed(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.color = SeriesColor::Themed {
            light: light.into(),
            dark: dark.into(),
        };
        self
    }
}

/// Series key to config, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartConfig {
    entries: Vec<(String, SeriesConfig)>,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace `key`
    pub fn with(mut self, key: impl Into<String>, series: SeriesConfig) -> Self {
        self.insert(key, series);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, series: SeriesConfig) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = series,
            None => self.entries.push((key, series)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SeriesConfig> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesConfig)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-theme `--color-{key}` blocks scoped to `[data-chart={id}]`, or
/// `None` when no series carries a colour.
pub fn chart_style(id: &str, config: &ChartConfig) -> Option<String> {
    let colored: Vec<_> = config.iter().filter(|(_, s)| s.color.is_set()).collect();
    if colored.is_empty() {
        return None;
    }

    let blocks: Vec<String> = Theme::ALL
        .iter()
        .map(|theme| {
            let mut block = format!("{} [data-chart={}] {{\n", theme.selector_prefix(), id);
            for (key, series) in &colored {
                if let Some(color) = series.color.for_theme(*theme) {
                    let _ = writeln!(block, "  --color-{}: {};", key, color);
                }
            }
            block.push('}');
            block
        })
        .collect();

    Some(blocks.join("\n"))
}
