//! Shell context for shared navigation state.
//!
//! Provides reactive settings shared between the Menubar and the pages that
//! change them (the Inbox clears the unread badge as conversations are read).

use dioxus::prelude::*;

use crate::config::{ShellSettings, UserProfile};
use crate::nav::NavBreakpoints;

/// Global shell state shared via context
#[derive(Clone, Copy)]
pub struct ShellContext {
    settings: Signal<ShellSettings>,
}

impl ShellContext {
    pub fn breakpoints(&self) -> NavBreakpoints {
        self.settings.read().breakpoints
    }

    pub fn user(&self) -> UserProfile {
        self.settings.read().user.clone()
    }

    pub fn unread_count(&self) -> Option<u32> {
        self.settings.read().unread_count
    }

    /// Update the Inbox badge
    pub fn set_unread_count(&self, count: Option<u32>) {
        let mut settings = self.settings;
        if settings.peek().unread_count != count {
            settings.write().unread_count = count;
        }
    }
}

/// Initialize shell context provider - call once at app root
pub fn use_shell_provider() {
    let settings = use_signal(ShellSettings::default);
    use_context_provider(|| ShellContext { settings });
}

/// Get shell context - use in any component
pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>()
}
