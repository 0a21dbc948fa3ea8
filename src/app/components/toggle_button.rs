//! Toggle button that renders as a plain button or a navigational link.
//!
//! Styling never branches on the element kind: both render the same class
//! list and the same `data-*` interaction attributes. Inside a hidden
//! [`HiddenScope`](super::HiddenScope) the button renders nothing.

use dioxus::prelude::*;

use super::{class_names, use_hidden};
use crate::app::location::use_page_location;
use crate::app::Route;
use crate::interaction::{InteractionEvent, InteractionTracker, KeyInput, StyleFlag};
use crate::selection::{ElementKind, ResolvedToggle, ToggleSelectionInput};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[non_exhaustive]
pub enum ToggleVariant {
    #[default]
    Default,
    Segmented,
    ChatList,
    ColorPicker,
    Calendar,
    Tertiary,
}

impl ToggleVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ToggleVariant::Default => "toggle--default",
            ToggleVariant::Segmented => "toggle--segmented",
            ToggleVariant::ChatList => "toggle--chat-list",
            ToggleVariant::ColorPicker => "toggle--color-picker",
            ToggleVariant::Calendar => "toggle--calendar",
            ToggleVariant::Tertiary => "toggle--tertiary",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum ToggleSize {
    #[default]
    Default,
    Square,
}

impl ToggleSize {
    pub fn class(&self) -> &'static str {
        match self {
            ToggleSize::Default => "",
            ToggleSize::Square => "toggle--square",
        }
    }
}

/// Class list for a variant/size pair plus caller classes.
pub fn toggle_class(variant: ToggleVariant, size: ToggleSize, extra: &str) -> String {
    class_names(&["toggle", variant.class(), size.class(), extra])
}

fn key_input(key: &Key, is_link: bool) -> KeyInput {
    match key {
        Key::Enter => KeyInput::Activation,
        // Space activates buttons only
        Key::Character(c) if c == " " && !is_link => KeyInput::Activation,
        _ => KeyInput::Other,
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ToggleButtonProps {
    #[props(default)]
    pub variant: ToggleVariant,
    #[props(default)]
    pub size: ToggleSize,
    /// Extra classes appended to the variant classes
    #[props(default, into)]
    pub class: String,
    /// Explicit selection; wins over path comparison
    pub selected: Option<bool>,
    /// Navigation target; empty or absent renders a plain button
    #[props(into)]
    pub to: Option<String>,
    /// Append the current query string to `to`
    #[props(default = false)]
    pub keep_search: bool,
    /// Select when the first path segment matches instead of the whole path
    #[props(default = false)]
    pub compare_to_first_path: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Replaces `selected` for styling only
    pub visual_override: Option<bool>,
    /// Called on every enabled activation
    pub onpress: Option<EventHandler<()>>,
    /// Called with the requested selection (`!selected`) on activation
    pub on_change: Option<EventHandler<bool>>,
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn ToggleButton(props: ToggleButtonProps) -> Element {
    let hidden = use_hidden();
    let location = use_page_location();
    let mut tracker = use_signal(InteractionTracker::default);

    if hidden {
        return rsx! {};
    }

    let input = ToggleSelectionInput {
        selected: props.selected,
        to: props.to.clone(),
        keep_search: props.keep_search,
        compare_to_first_path: props.compare_to_first_path,
    };
    let ResolvedToggle { kind, selected } = input.resolve(&location);

    let disabled = props.disabled;
    let is_link = kind.is_link();
    let state = tracker
        .read()
        .snapshot(disabled, selected)
        .with_visual_override(props.visual_override);
    let class = toggle_class(props.variant, props.size, &props.class);

    let onpress = props.onpress;
    let on_change = props.on_change;
    let onmouseenter = props.onmouseenter;
    let onmouseleave = props.onmouseleave;
    let target = kind.href().map(str::to_string);

    let activate = move |evt: MouseEvent| {
        if disabled {
            evt.prevent_default();
            return;
        }
        // Modified clicks keep the browser default (new tab, download, ...)
        if let Some(href) = target.as_deref() {
            if evt.modifiers().is_empty() {
                match href.parse::<Route>() {
                    Ok(route) => {
                        evt.prevent_default();
                        navigator().push(route);
                    }
                    Err(e) => tracing::warn!("Unroutable link target {}: {}", href, e),
                }
            }
        }
        if let Some(handler) = onpress {
            handler.call(());
        }
        if let Some(handler) = on_change {
            handler.call(!selected);
        }
    };
    let pointer_enter = move |evt: MouseEvent| {
        let buttons_held = !evt.held_buttons().is_empty();
        tracker
            .write()
            .apply(InteractionEvent::PointerEnter { buttons_held }, disabled);
        if let Some(handler) = onmouseenter {
            handler.call(evt);
        }
    };
    let pointer_leave = move |evt: MouseEvent| {
        tracker.write().apply(InteractionEvent::PointerLeave, disabled);
        if let Some(handler) = onmouseleave {
            handler.call(evt);
        }
    };
    let pointer_down = move |_: MouseEvent| {
        tracker.write().apply(InteractionEvent::PointerDown, disabled);
    };
    let pointer_up = move |_: MouseEvent| {
        tracker.write().apply(InteractionEvent::PointerUp, disabled);
    };
    let key_down = move |evt: KeyboardEvent| {
        let key = key_input(&evt.key(), is_link);
        tracker.write().apply(InteractionEvent::KeyDown(key), disabled);
    };
    let key_up = move |evt: KeyboardEvent| {
        let key = key_input(&evt.key(), is_link);
        tracker.write().apply(InteractionEvent::KeyUp(key), disabled);
    };
    let focus = move |_: FocusEvent| {
        tracker.write().apply(InteractionEvent::Focus, disabled);
    };
    let blur = move |_: FocusEvent| {
        tracker.write().apply(InteractionEvent::Blur, disabled);
    };

    match kind {
        ElementKind::Link { href } => rsx! {
            a {
                href: "{href}",
                class: "{class}",
                "aria-current": selected.then_some("page"),
                "aria-disabled": disabled.then_some("true"),
                "data-disabled": state.attr(StyleFlag::Disabled),
                "data-pressed": state.attr(StyleFlag::Pressed),
                "data-hovered": state.attr(StyleFlag::Hovered),
                "data-focused": state.attr(StyleFlag::Focused),
                "data-focus-visible": state.attr(StyleFlag::FocusVisible),
                "data-selected": state.attr(StyleFlag::Selected),
                onclick: activate,
                onmouseenter: pointer_enter,
                onmouseleave: pointer_leave,
                onmousedown: pointer_down,
                onmouseup: pointer_up,
                onkeydown: key_down,
                onkeyup: key_up,
                onfocus: focus,
                onblur: blur,
                {props.children}
            }
        },
        ElementKind::Button => rsx! {
            button {
                r#type: "button",
                class: "{class}",
                disabled,
                "aria-pressed": if selected { "true" } else { "false" },
                "data-disabled": state.attr(StyleFlag::Disabled),
                "data-pressed": state.attr(StyleFlag::Pressed),
                "data-hovered": state.attr(StyleFlag::Hovered),
                "data-focused": state.attr(StyleFlag::Focused),
                "data-focus-visible": state.attr(StyleFlag::FocusVisible),
                "data-selected": state.attr(StyleFlag::Selected),
                onclick: activate,
                onmouseenter: pointer_enter,
                onmouseleave: pointer_leave,
                onmousedown: pointer_down,
                onmouseup: pointer_up,
                onkeydown: key_down,
                onkeyup: key_up,
                onfocus: focus,
                onblur: blur,
                {props.children}
            }
        },
    }
}
