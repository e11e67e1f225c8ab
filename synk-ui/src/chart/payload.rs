//! Tooltip and legend payloads
//!
//! A hovered point arrives as a list of [`PayloadItem`]s, one per series.
//! Which [`SeriesConfig`] describes an item is decided by
//! [`resolve_config`]; the tooltip and legend models below only format.

use std::collections::BTreeMap;
use std::rc::Rc;

use super::config::{ChartConfig, SeriesConfig};

/// One series' entry at the hovered point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayloadItem {
    pub data_key: Option<String>,
    pub name: Option<String>,
    pub value: Option<f64>,
    pub color: Option<String>,
    /// Extra string fields carried on the item
    pub fields: BTreeMap<String, String>,
    /// String fields of the data row the item came from
    pub payload: BTreeMap<String, String>,
}

impl PayloadItem {
    pub fn series(key: impl Into<String>, value: Option<f64>) -> Self {
        let key = key.into();
        Self {
            data_key: Some(key.clone()),
            name: Some(key),
            value,
            ..Self::default()
        }
    }

    /// Named string field, with the item's own keys under their wire names
    pub fn string_field(&self, key: &str) -> Option<&str> {
        match key {
            "dataKey" => self.data_key.as_deref(),
            "name" => self.name.as_deref(),
            "color" => self.color.as_deref(),
            _ => self.fields.get(key).map(String::as_str),
        }
    }
}

/// Config for `item` under `key`.
///
/// A string field `key` on the item (or else on its data row) names the
/// config entry to try first; `key` itself is the fallback.
pub fn resolve_config<'a>(config: &'a ChartConfig, item: &PayloadItem, key: &str) -> Option<&'a SeriesConfig> {
    let lookup = item
        .string_field(key)
        .or_else(|| item.payload.get(key).map(String::as_str))
        .unwrap_or(key);

    config.get(lookup).or_else(|| config.get(key))
}

/// Text for a value with no formatter
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indicator {
    #[default]
    Dot,
    Line,
    Dashed,
}

pub type LabelFormatter = Rc<dyn Fn(Option<&str>) -> String>;
pub type ValueFormatter = Rc<dyn Fn(Option<f64>, &PayloadItem) -> String>;

#[derive(Clone, Default)]
pub struct TooltipOptions {
    /// Category label of the hovered point
    pub label: Option<String>,
    pub label_key: Option<String>,
    pub hide_label: bool,
    pub hide_indicator: bool,
    pub indicator: Indicator,
    /// Indicator colour for items without config
    pub color: Option<String>,
    pub label_formatter: Option<LabelFormatter>,
    pub formatter: Option<ValueFormatter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub key: String,
    pub label: String,
    pub value: String,
    pub indicator_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipModel {
    pub label: Option<String>,
    /// Show the label inside the only row instead of above the rows
    pub nest_label: bool,
    pub rows: Vec<TooltipRow>,
}

fn indicator_color(key: &str, matched: bool, fallback: Option<&str>) -> Option<String> {
    if matched {
        Some(format!("var(--color-{})", key))
    } else {
        fallback.map(str::to_string)
    }
}

fn tooltip_label(config: &ChartConfig, payload: &[PayloadItem], options: &TooltipOptions) -> Option<String> {
    if options.hide_label {
        return None;
    }
    let item = payload.first()?;
    let key = options
        .label_key
        .as_deref()
        .or(item.data_key.as_deref())
        .or(item.name.as_deref())
        .unwrap_or("value");

    let value = match (&options.label_key, &options.label) {
        (None, Some(label)) => Some(
            config
                .get(label)
                .and_then(|s| s.label.clone())
                .unwrap_or_else(|| label.clone()),
        ),
        _ => resolve_config(config, item, key).and_then(|s| s.label.clone()),
    };

    match &options.label_formatter {
        Some(format) => Some(format(value.as_deref())),
        None => value.filter(|v| !v.is_empty()),
    }
}

/// Tooltip content for a hovered point; `None` for an empty payload
pub fn tooltip_model(config: &ChartConfig, payload: &[PayloadItem], options: &TooltipOptions) -> Option<TooltipModel> {
    if payload.is_empty() {
        return None;
    }

    let rows = payload
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let key = options
                .label_key
                .clone()
                .or_else(|| item.data_key.clone())
                .or_else(|| item.name.clone())
                .unwrap_or_else(|| idx.to_string());
            let series = resolve_config(config, item, &key);

            let label = series
                .and_then(|s| s.label.clone())
                .or_else(|| item.name.clone())
                .unwrap_or_else(|| key.clone());
            let value = match &options.formatter {
                Some(format) => format(item.value, item),
                None => item.value.map(format_number).unwrap_or_default(),
            };
            let fallback = options.color.as_deref().or(item.color.as_deref());

            TooltipRow {
                indicator_color: indicator_color(&key, series.is_some(), fallback),
                key,
                label,
                value,
            }
        })
        .collect();

    Some(TooltipModel {
        label: tooltip_label(config, payload, options),
        nest_label: payload.len() == 1 && options.indicator != Indicator::Dot,
        rows,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub key: String,
    pub label: String,
    pub color: Option<String>,
}

pub fn legend_rows(config: &ChartConfig, payload: &[PayloadItem], name_key: Option<&str>) -> Vec<LegendRow> {
    payload
        .iter()
        .map(|item| {
            let key = name_key
                .or(item.data_key.as_deref())
                .unwrap_or("value")
                .to_string();
            let series = resolve_config(config, item, &key);
            LegendRow {
                label: series
                    .and_then(|s| s.label.clone())
                    .or_else(|| item.name.clone())
                    .unwrap_or_else(|| key.clone()),
                color: indicator_color(&key, series.is_some(), item.color.as_deref()),
                key,
            }
        })
        .collect()
}
