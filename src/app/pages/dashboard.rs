//! Dashboard page component.
//!
//! Loads the dashboard dataset through a resource and renders the KPI cards
//! and both charts.

use dioxus::prelude::*;

use crate::app::components::{ContactsChart, ErrorAlert, SourcesChart};
use crate::dashboard::{client_loader, source_shares, weekday_rows, DashboardData, Growth};

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let data = use_resource(|| async { client_loader().await.map_err(|e| e.to_string()) });
    let mut dismissed = use_signal(|| false);

    let content = match &*data.read() {
        None => rsx! {
            article { aria_busy: "true", "Loading dashboard..." }
        },
        Some(Err(message)) => {
            if dismissed() {
                rsx! {}
            } else {
                rsx! {
                    ErrorAlert {
                        message: message.clone(),
                        on_dismiss: move |_| dismissed.set(true),
                    }
                }
            }
        }
        Some(Ok(data)) => rsx! {
            DashboardContent { data: data.clone() }
        },
    };

    rsx! {
        section { class: "page page--dashboard",
            h1 { class: "page__title", "Dashboard" }
            {content}
        }
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> Element {
    let rows = weekday_rows(&data.contacts);
    let shares = source_shares(&data.contact_sources);
    let contacts_this_week: u32 = data.contacts.this_week.iter().sum();

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                title: "New contacts",
                value: contacts_this_week.to_string(),
                growth: data.contact_growth(),
            }
            KpiCard {
                title: "Shopify revenue",
                value: format!("${}", data.shopify_revenue.this_week),
                growth: data.revenue_growth(),
            }
            article { class: "kpi-card",
                p { class: "kpi-card__title", "Support" }
                a { class: "kpi-card__value", href: "mailto:{data.support.email}", "{data.support.email}" }
            }
        }
        div { class: "chart-grid",
            article { class: "card",
                h2 { class: "card__title", "Contacts per day" }
                ContactsChart { rows }
            }
            article { class: "card",
                h2 { class: "card__title", "Contact sources" }
                p { class: "card__subtitle", "{data.total_contacts()} contacts in total" }
                SourcesChart { shares }
            }
        }
    }
}

fn growth_label(growth: Growth) -> String {
    match growth.percent() {
        Some(percent) => format!("{:+.1}% vs last week", percent),
        None => "No data for last week".to_string(),
    }
}

#[component]
fn KpiCard(#[props(into)] title: String, value: String, growth: Growth) -> Element {
    let trend = if growth.is_up() { "up" } else { "down" };

    rsx! {
        article { class: "kpi-card",
            p { class: "kpi-card__title", "{title}" }
            p { class: "kpi-card__value", "{value}" }
            p { class: "kpi-card__trend kpi-card__trend--{trend}", "{growth_label(growth)}" }
        }
    }
}
