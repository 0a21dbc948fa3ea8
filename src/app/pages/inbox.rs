//! Inbox page: conversation list with a preview pane.
//!
//! Opening a conversation marks it read and lowers the menubar badge.

use dioxus::prelude::*;

use crate::app::components::{ToggleButton, ToggleVariant};
use crate::app::shell_context::use_shell;

struct Conversation {
    name: &'static str,
    channel: &'static str,
    preview: &'static str,
    unread: u32,
}

const CONVERSATIONS: &[Conversation] = &[
    Conversation {
        name: "Emma Schmidt",
        channel: "Email",
        preview: "Is the spring collection back in stock?",
        unread: 3,
    },
    Conversation {
        name: "Lukas Weber",
        channel: "WhatsApp",
        preview: "Thanks, the parcel arrived today.",
        unread: 1,
    },
    Conversation {
        name: "Sofia Rossi",
        channel: "Instagram",
        preview: "Can I change the delivery address?",
        unread: 4,
    },
    Conversation {
        name: "Noah Fischer",
        channel: "Email",
        preview: "Invoice for order #4821",
        unread: 0,
    },
    Conversation {
        name: "Mia Becker",
        channel: "Facebook",
        preview: "Do you ship to Austria?",
        unread: 2,
    },
];

/// Unread messages left once the conversations in `read` are opened.
fn remaining_unread(conversations: &[Conversation], read: &[usize]) -> u32 {
    conversations
        .iter()
        .enumerate()
        .filter(|(index, _)| !read.contains(index))
        .map(|(_, conversation)| conversation.unread)
        .sum()
}

#[component]
pub fn Inbox() -> Element {
    let shell = use_shell();
    let mut selected = use_signal(|| None::<usize>);
    let mut read = use_signal(Vec::<usize>::new);

    let mut open = move |index: usize| {
        selected.set(Some(index));
        if !read.peek().contains(&index) {
            read.write().push(index);
        }
        let remaining = remaining_unread(CONVERSATIONS, &read.peek());
        tracing::debug!(conversation = index, remaining, "Conversation opened");
        shell.set_unread_count(Some(remaining));
    };

    let preview = selected().and_then(|index| CONVERSATIONS.get(index));

    rsx! {
        section { class: "page page--inbox",
            h1 { class: "page__title", "Inbox" }
            div { class: "inbox",
                ul { class: "inbox__list",
                    for (index , conversation) in CONVERSATIONS.iter().enumerate() {
                        li { key: "{conversation.name}",
                            ToggleButton {
                                variant: ToggleVariant::ChatList,
                                class: "inbox__item",
                                selected: selected() == Some(index),
                                onpress: move |_| open(index),
                                span { class: "inbox__name", "{conversation.name}" }
                                span { class: "inbox__channel", "{conversation.channel}" }
                                span { class: "inbox__preview", "{conversation.preview}" }
                                if conversation.unread > 0 && !read.read().contains(&index) {
                                    span { class: "inbox__unread", "{conversation.unread}" }
                                }
                            }
                        }
                    }
                }
                div { class: "inbox__preview-pane",
                    if let Some(conversation) = preview {
                        h2 { "{conversation.name}" }
                        p { class: "inbox__channel", "via {conversation.channel}" }
                        p { "{conversation.preview}" }
                    } else {
                        p { class: "inbox__empty", "Select a conversation" }
                    }
                }
            }
        }
    }
}
