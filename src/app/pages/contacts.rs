//! Contacts page with query-string driven tabs.

use dioxus::prelude::*;

use crate::app::components::{ToggleButton, ToggleVariant};
use crate::selection::query_param;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment {
    All,
    Customers,
    Leads,
}

impl Segment {
    const TABS: [Segment; 3] = [Segment::All, Segment::Customers, Segment::Leads];

    fn label(self) -> &'static str {
        match self {
            Segment::All => "All",
            Segment::Customers => "Customers",
            Segment::Leads => "Leads",
        }
    }

    /// Tab from `?tab=N`; unknown or missing values select the first tab.
    fn from_query(query: &str) -> Self {
        query_param(query, "tab")
            .and_then(|tab| tab.parse::<usize>().ok())
            .and_then(|index| Self::TABS.get(index).copied())
            .unwrap_or(Segment::All)
    }

    fn includes(self, contact: &Contact) -> bool {
        match self {
            Segment::All => true,
            Segment::Customers => contact.customer,
            Segment::Leads => !contact.customer,
        }
    }
}

struct Contact {
    name: &'static str,
    email: &'static str,
    customer: bool,
}

const CONTACTS: &[Contact] = &[
    Contact {
        name: "Emma Schmidt",
        email: "emma@example.com",
        customer: true,
    },
    Contact {
        name: "Lukas Weber",
        email: "lukas@example.com",
        customer: true,
    },
    Contact {
        name: "Sofia Rossi",
        email: "sofia@example.com",
        customer: false,
    },
    Contact {
        name: "Noah Fischer",
        email: "noah@example.com",
        customer: true,
    },
    Contact {
        name: "Mia Becker",
        email: "mia@example.com",
        customer: false,
    },
];

#[component]
pub fn Contacts(query: String) -> Element {
    let current = Segment::from_query(&query);
    let total = CONTACTS.len();

    rsx! {
        section { class: "page page--contacts",
            h1 { class: "page__title", "Contacts" }
            p { class: "page__subtitle", "{total} contacts in your workspace" }
            div { class: "segmented", role: "tablist",
                for (index , segment) in Segment::TABS.into_iter().enumerate() {
                    ToggleButton {
                        key: "{index}",
                        variant: ToggleVariant::Segmented,
                        to: format!("/contacts?tab={index}"),
                        selected: segment == current,
                        "{segment.label()}"
                    }
                }
            }
            ul { class: "contact-list",
                for contact in CONTACTS.iter().filter(|contact| current.includes(contact)) {
                    li { key: "{contact.email}", class: "contact-list__item",
                        span { class: "contact-list__name", "{contact.name}" }
                        a { href: "mailto:{contact.email}", "{contact.email}" }
                    }
                }
            }
            ToggleButton {
                variant: ToggleVariant::Tertiary,
                to: "/reviews".to_string(),
                keep_search: true,
                "See their reviews"
            }
        }
    }
}
