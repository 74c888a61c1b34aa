use std::sync::Arc;

use api::ReportSnapshot;
use dioxus::prelude::*;

use crate::core::derive::{chart_series, share_percent, uncategorized_count, ChartBucket, ChartEntry};
use crate::core::format::format_share;
use crate::t;

const PALETTE: &[&str] = &["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];
const UNCATEGORIZED_FILL: &str = "#9CA3AF";

const BAR_HEIGHT: f64 = 28.0;
const BAR_GAP: f64 = 12.0;
const LABEL_WIDTH: f64 = 160.0;
const PLOT_WIDTH: f64 = 420.0;
const VALUE_WIDTH: f64 = 48.0;

/// Documents per schema, with a separate bar for uncategorized documents.
#[component]
pub fn SchemaChart(report: Arc<ReportSnapshot>) -> Element {
    let entries = chart_series(&report);
    let total = report.total_documents();
    let uncategorized = uncategorized_count(&report);
    let uncategorized_share = format_share(share_percent(uncategorized, total));

    rsx! {
        section { class: "results-card results-chart",
            div { class: "results-card__header",
                h2 { class: "results-chart__title", {t!("chart-title")} }
                span { class: "results-card__meta", {t!("chart-total", total = total)} }
            }

            if entries.is_empty() {
                p { class: "results-card__placeholder", {t!("chart-empty")} }
            } else {
                BarChart { entries }
            }

            if uncategorized > 0 {
                p { class: "results-chart__note",
                    {t!("uncategorized-note", count = uncategorized, percent = uncategorized_share)}
                }
            }
        }
    }
}

#[component]
pub fn BarChart(entries: Vec<ChartEntry>) -> Element {
    let max = entries.iter().map(|e| e.value).max().unwrap_or(0).max(1) as f64;
    let height = entries.len() as f64 * (BAR_HEIGHT + BAR_GAP);
    let width = LABEL_WIDTH + PLOT_WIDTH + VALUE_WIDTH;
    let label_x = LABEL_WIDTH - 8.0;

    let bars: Vec<BarGeometry> = entries
        .iter()
        .enumerate()
        .map(|(row, entry)| BarGeometry {
            key: format!("{row}-{}", entry.label),
            label: entry.label.clone(),
            value: entry.value,
            y: row as f64 * (BAR_HEIGHT + BAR_GAP),
            width: (entry.value as f64 / max * PLOT_WIDTH).max(2.0),
            fill: bucket_fill(entry.bucket),
            mid_y: 0.0,
            value_x: 0.0,
        })
        .map(BarGeometry::with_offsets)
        .collect();

    rsx! {
        svg {
            class: "results-chart__svg",
            view_box: "0 0 {width} {height}",
            for bar in bars.into_iter() {
                g { key: "{bar.key}",
                    text {
                        class: "results-chart__label",
                        x: "{label_x}",
                        y: "{bar.mid_y}",
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        "{bar.label}"
                    }
                    rect {
                        x: "{LABEL_WIDTH}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{BAR_HEIGHT}",
                        rx: "4",
                        fill: "{bar.fill}",
                    }
                    text {
                        class: "results-chart__value",
                        x: "{bar.value_x}",
                        y: "{bar.mid_y}",
                        dominant_baseline: "middle",
                        "{bar.value}"
                    }
                }
            }
        }
    }
}

struct BarGeometry {
    key: String,
    label: String,
    value: u64,
    y: f64,
    width: f64,
    fill: &'static str,
    mid_y: f64,
    value_x: f64,
}

impl BarGeometry {
    fn with_offsets(mut self) -> Self {
        self.mid_y = self.y + BAR_HEIGHT / 2.0;
        self.value_x = LABEL_WIDTH + self.width + 6.0;
        self
    }
}

fn bucket_fill(bucket: ChartBucket) -> &'static str {
    match bucket {
        ChartBucket::Schema(index) => PALETTE[index % PALETTE.len()],
        ChartBucket::Uncategorized => UNCATEGORIZED_FILL,
    }
}
