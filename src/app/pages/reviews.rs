//! Google Reviews page with a star filter.

use dioxus::prelude::*;

use crate::app::components::{ToggleButton, ToggleSize, ToggleVariant};
use crate::selection::query_param;

struct Review {
    author: &'static str,
    stars: u8,
    text: &'static str,
}

const REVIEWS: &[Review] = &[
    Review {
        author: "Emma Schmidt",
        stars: 5,
        text: "Fast replies and friendly staff.",
    },
    Review {
        author: "Lukas Weber",
        stars: 4,
        text: "Good service, delivery took a day longer than promised.",
    },
    Review {
        author: "Sofia Rossi",
        stars: 5,
        text: "Answered on WhatsApp within minutes.",
    },
    Review {
        author: "Noah Fischer",
        stars: 2,
        text: "Invoice was wrong the first time.",
    },
    Review {
        author: "Mia Becker",
        stars: 3,
        text: "Okay overall.",
    },
];

/// Star filter from `?stars=N`; `None` shows every review.
fn star_filter(query: &str) -> Option<u8> {
    query_param(query, "stars")
        .and_then(|stars| stars.parse::<u8>().ok())
        .filter(|stars| (1..=5).contains(stars))
}

fn average_stars(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|review| u32::from(review.stars)).sum();
    Some(f64::from(total) / reviews.len() as f64)
}

#[component]
pub fn Reviews(query: String) -> Element {
    let filter = star_filter(&query);
    let average = average_stars(REVIEWS)
        .map(|avg| format!("{avg:.1}"))
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        section { class: "page page--reviews",
            h1 { class: "page__title", "Google Reviews" }
            p { class: "page__subtitle", "Average rating {average} from {REVIEWS.len()} reviews" }
            div { class: "star-filter",
                ToggleButton {
                    variant: ToggleVariant::Tertiary,
                    to: "/reviews".to_string(),
                    selected: filter.is_none(),
                    "All"
                }
                for stars in (1..=5u8).rev() {
                    ToggleButton {
                        key: "{stars}",
                        variant: ToggleVariant::Tertiary,
                        size: ToggleSize::Square,
                        to: format!("/reviews?stars={stars}"),
                        selected: filter == Some(stars),
                        "{stars}★"
                    }
                }
            }
            ul { class: "review-list",
                for review in REVIEWS.iter().filter(|review| filter.map_or(true, |stars| review.stars == stars)) {
                    li { key: "{review.author}", class: "review-list__item",
                        p { class: "review-list__stars", "{\"★\".repeat(usize::from(review.stars))}" }
                        p { class: "review-list__text", "{review.text}" }
                        p { class: "review-list__author", "{review.author}" }
                    }
                }
            }
        }
    }
}
