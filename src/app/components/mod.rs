//! Shared UI components for the Dioxus web UI.

pub mod charts;
pub mod dynamic_body;
pub mod error_alert;
pub mod hidden;
pub mod layout;
pub mod menubar;
pub mod nav_element;
pub mod toggle_button;

pub use charts::{ContactsChart, SourcesChart};
pub use dynamic_body::DynamicBody;
pub use error_alert::ErrorAlert;
pub use hidden::{use_hidden, HiddenScope};
pub use layout::Shell;
pub use menubar::Menubar;
pub use nav_element::NavElement;
pub use toggle_button::{ToggleButton, ToggleSize, ToggleVariant};

/// Join class names, skipping empty parts.
pub fn class_names(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_skips_empty() {
        assert_eq!(class_names(&["toggle", "", "  h-9 "]), "toggle h-9");
        assert_eq!(class_names(&[]), "");
    }
}
