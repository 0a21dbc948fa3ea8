//! Dashboard charts drawn as inline SVG.

use dioxus::prelude::*;

use super::{class_names, ToggleButton, ToggleVariant};
use crate::dashboard::chart::{donut_path, sectors, ChartFrame, LineChart};
use crate::dashboard::{Series, SourceShare, WeekdayRow};

const FRAME: ChartFrame = ChartFrame {
    width: 640.0,
    height: 280.0,
    margin: 16.0,
    gutter: 40.0,
};

/// Fill colors for donut sectors, cycled by index.
const PALETTE: [&str; 5] = ["#5b5bd6", "#3e9b4f", "#e5484d", "#f5a524", "#0090ff"];

fn sector_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn series_visible(hidden: &[Series], series: Series) -> bool {
    !hidden.contains(&series)
}

fn signed(delta: i64) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Contacts per weekday for last week and this week.
///
/// Hovering a weekday column shows both values; legend entries toggle their
/// series.
#[component]
pub fn ContactsChart(rows: Vec<WeekdayRow>) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let mut hidden = use_signal(Vec::<Series>::new);

    let chart = LineChart::new(FRAME, &rows);
    let frame = chart.frame();
    let ticks = chart.domain().ticks();
    let view_box = format!("0 0 {} {}", frame.width, frame.height);

    let tooltip = hovered().and_then(|i| rows.get(i).map(|row| (i, *row)));
    let tooltip_left = tooltip
        .map(|(i, _)| format!("left: {:.2}%", chart.x(i) / frame.width * 100.0))
        .unwrap_or_default();

    rsx! {
        div { class: "chart chart--contacts",
            div { class: "chart__legend",
                for series in Series::ALL {
                    ToggleButton {
                        key: "{series.key()}",
                        variant: ToggleVariant::ColorPicker,
                        class: "chart__legend-entry chart__legend-entry--{series.key()}",
                        selected: series_visible(&hidden.read(), series),
                        on_change: move |visible: bool| {
                            let mut list = hidden.write();
                            list.retain(|s| *s != series);
                            if !visible {
                                list.push(series);
                            }
                        },
                        span { class: "chart__swatch" }
                        "{series.label()}"
                    }
                }
            }
            div { class: "chart__canvas",
                svg {
                    view_box: "{view_box}",
                    role: "img",
                    "aria-label": "Contacts per weekday",
                    onmouseleave: move |_| hovered.set(None),
                    for tick in ticks {
                        g { key: "{tick}",
                            line {
                                class: "chart__grid",
                                x1: frame.left(),
                                x2: frame.right(),
                                y1: chart.y(tick),
                                y2: chart.y(tick),
                            }
                            text {
                                class: "chart__tick",
                                x: frame.left() - 8.0,
                                y: chart.y(tick),
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                "{tick}"
                            }
                        }
                    }
                    for (i , row) in rows.iter().enumerate() {
                        text {
                            key: "{row.label()}",
                            class: "chart__tick",
                            x: chart.x(i),
                            y: frame.bottom() + 20.0,
                            text_anchor: "middle",
                            "{row.label()}"
                        }
                    }
                    for series in Series::ALL {
                        if series_visible(&hidden.read(), series) {
                            path {
                                key: "{series.key()}",
                                class: "chart__line chart__line--{series.key()}",
                                fill: "none",
                                d: chart.series_path(&rows, series),
                            }
                        }
                    }
                    if let Some((i, _)) = tooltip {
                        line {
                            class: "chart__cursor",
                            x1: chart.x(i),
                            x2: chart.x(i),
                            y1: frame.top(),
                            y2: frame.bottom(),
                        }
                    }
                    for i in 0..rows.len() {
                        rect {
                            key: "{i}",
                            class: "chart__hit",
                            x: chart.column(i).x,
                            y: frame.top(),
                            width: chart.column(i).width,
                            height: frame.inner_height(),
                            fill: "transparent",
                            onmouseenter: move |_| hovered.set(Some(i)),
                        }
                    }
                }
                if let Some((i, row)) = tooltip {
                    div {
                        class: "chart__tooltip",
                        style: "{tooltip_left}",
                        p { class: "chart__tooltip-title", "{row.label()}" }
                        for series in Series::ALL {
                            if series_visible(&hidden.read(), series) {
                                p {
                                    key: "{series.key()}",
                                    class: "chart__tooltip-row chart__tooltip-row--{series.key()}",
                                    "{series.label()}: {row.value(series)}"
                                }
                            }
                        }
                        p { class: "chart__tooltip-delta", "{signed(row.delta())} vs last week" }
                    }
                }
            }
        }
    }
}

const DONUT_CX: f64 = 110.0;
const DONUT_CY: f64 = 110.0;
const DONUT_INNER: f64 = 62.0;
const DONUT_OUTER: f64 = 90.0;
const DONUT_ACTIVE_OUTER: f64 = 100.0;

/// Contact sources as a donut with an active sector.
#[component]
pub fn SourcesChart(shares: Vec<SourceShare>) -> Element {
    let mut active = use_signal(|| 0usize);

    let values: Vec<f64> = shares.iter().map(|share| f64::from(share.count)).collect();
    let slices = sectors(&values);
    let current = shares.get(active()).cloned();
    let view_box = format!("0 0 {} {}", DONUT_CX * 2.0, DONUT_CY * 2.0);

    rsx! {
        div { class: "chart chart--sources",
            svg {
                view_box: "{view_box}",
                role: "img",
                "aria-label": "Contact sources",
                for sector in slices {
                    path {
                        key: "{sector.index}",
                        class: class_names(&[
                            "chart__sector",
                            if sector.index == active() { "chart__sector--active" } else { "" },
                        ]),
                        fill: sector_color(sector.index),
                        d: donut_path(
                            DONUT_CX,
                            DONUT_CY,
                            DONUT_INNER,
                            if sector.index == active() { DONUT_ACTIVE_OUTER } else { DONUT_OUTER },
                            sector.start,
                            sector.end,
                        ),
                        onmouseenter: move |_| active.set(sector.index),
                    }
                }
                if let Some((share, percent)) = current.map(|s| {
                    let percent = format!("{:.1}%", s.percent);
                    (s, percent)
                }) {
                    text {
                        class: "chart__center-label",
                        x: DONUT_CX,
                        y: DONUT_CY - 8.0,
                        text_anchor: "middle",
                        "{share.source}"
                    }
                    text {
                        class: "chart__center-value",
                        x: DONUT_CX,
                        y: DONUT_CY + 16.0,
                        text_anchor: "middle",
                        "{percent}"
                    }
                }
            }
            ul { class: "chart__legend chart__legend--vertical",
                for (index , share) in shares.iter().enumerate() {
                    li {
                        key: "{share.source}",
                        class: "chart__legend-item",
                        "data-active": (index == active()).then_some("true"),
                        onmouseenter: move |_| active.set(index),
                        span {
                            class: "chart__swatch",
                            style: "background: {sector_color(index)}",
                        }
                        span { class: "chart__legend-label", "{share.source}" }
                        span { class: "chart__legend-value", "{share.count}" }
                    }
                }
            }
        }
    }
}
