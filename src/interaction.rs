//! Pointer, keyboard and focus tracking for interactive elements.
//!
//! [`InteractionTracker`] folds raw UI events into the flags styling code keys
//! off of. Each flag is exposed as a `data-*` attribute that is present only
//! while the flag is set.

/// How focus last arrived at (or input last reached) an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modality {
    #[default]
    Keyboard,
    Pointer,
}

/// Key classification relevant to pressing an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// Enter, or Space on buttons.
    Activation,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    PointerEnter { buttons_held: bool },
    PointerLeave,
    PointerDown,
    PointerUp,
    KeyDown(KeyInput),
    KeyUp(KeyInput),
    Focus,
    Blur,
}

/// Accumulated pointer/keyboard/focus state for one element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionTracker {
    pointer_over: bool,
    pointer_held: bool,
    key_held: bool,
    focused: bool,
    focus_visible: bool,
    modality: Modality,
}

impl InteractionTracker {
    pub fn apply(&mut self, event: InteractionEvent, disabled: bool) {
        match event {
            InteractionEvent::PointerEnter { buttons_held } => {
                self.pointer_over = true;
                // The release happened outside the element
                if !buttons_held {
                    self.pointer_held = false;
                }
            }
            InteractionEvent::PointerLeave => self.pointer_over = false,
            InteractionEvent::PointerDown => {
                self.modality = Modality::Pointer;
                self.focus_visible = false;
                self.pointer_held = !disabled;
            }
            InteractionEvent::PointerUp => self.pointer_held = false,
            InteractionEvent::KeyDown(key) => {
                self.modality = Modality::Keyboard;
                if self.focused {
                    self.focus_visible = true;
                }
                if key == KeyInput::Activation && !disabled {
                    self.key_held = true;
                }
            }
            InteractionEvent::KeyUp(KeyInput::Activation) => self.key_held = false,
            InteractionEvent::KeyUp(KeyInput::Other) => {}
            InteractionEvent::Focus => {
                self.focused = true;
                self.focus_visible = self.modality == Modality::Keyboard;
            }
            InteractionEvent::Blur => {
                self.focused = false;
                self.focus_visible = false;
                self.key_held = false;
                // Next focus without a pointer press came from the keyboard
                self.modality = Modality::Keyboard;
            }
        }
    }

    /// Derived flags for the current render.
    pub fn snapshot(&self, disabled: bool, selected: bool) -> InteractionState {
        InteractionState {
            disabled,
            pressed: !disabled && ((self.pointer_held && self.pointer_over) || self.key_held),
            hovered: !disabled && self.pointer_over,
            focused: self.focused,
            focus_visible: self.focused && self.focus_visible,
            selected,
        }
    }
}

/// Presentation flags exposed to styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleFlag {
    Disabled,
    Pressed,
    Hovered,
    Focused,
    FocusVisible,
    Selected,
}

impl StyleFlag {
    pub const ALL: [StyleFlag; 6] = [
        StyleFlag::Disabled,
        StyleFlag::Pressed,
        StyleFlag::Hovered,
        StyleFlag::Focused,
        StyleFlag::FocusVisible,
        StyleFlag::Selected,
    ];

    pub fn attribute(self) -> &'static str {
        match self {
            StyleFlag::Disabled => "data-disabled",
            StyleFlag::Pressed => "data-pressed",
            StyleFlag::Hovered => "data-hovered",
            StyleFlag::Focused => "data-focused",
            StyleFlag::FocusVisible => "data-focus-visible",
            StyleFlag::Selected => "data-selected",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub disabled: bool,
    pub pressed: bool,
    pub hovered: bool,
    pub focused: bool,
    pub focus_visible: bool,
    pub selected: bool,
}

impl InteractionState {
    /// Replace `selected` for styling only (e.g. an open overlay trigger or a
    /// hovered menu entry).
    pub fn with_visual_override(mut self, visual: Option<bool>) -> Self {
        if let Some(selected) = visual {
            self.selected = selected;
        }
        self
    }

    pub fn is(&self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Disabled => self.disabled,
            StyleFlag::Pressed => self.pressed,
            StyleFlag::Hovered => self.hovered,
            StyleFlag::Focused => self.focused,
            StyleFlag::FocusVisible => self.focus_visible,
            StyleFlag::Selected => self.selected,
        }
    }

    /// Attribute value: `Some("true")` when set, `None` (attribute absent) otherwise.
    pub fn attr(&self, flag: StyleFlag) -> Option<&'static str> {
        self.is(flag).then_some("true")
    }

    /// Names of the attributes currently present.
    pub fn active_attributes(&self) -> Vec<&'static str> {
        StyleFlag::ALL
            .into_iter()
            .filter(|flag| self.is(*flag))
            .map(StyleFlag::attribute)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InteractionEvent::*;

    fn run(events: &[InteractionEvent], disabled: bool) -> InteractionState {
        let mut tracker = InteractionTracker::default();
        for event in events {
            tracker.apply(*event, disabled);
        }
        tracker.snapshot(disabled, false)
    }

    #[test]
    fn test_pointer_press_only_while_held_over() {
        let held = run(
            &[PointerEnter { buttons_held: false }, PointerDown],
            false,
        );
        assert!(held.pressed);
        assert!(held.hovered);

        let left = run(
            &[PointerEnter { buttons_held: false }, PointerDown, PointerLeave],
            false,
        );
        assert!(!left.pressed);

        let back = run(
            &[
                PointerEnter { buttons_held: false },
                PointerDown,
                PointerLeave,
                PointerEnter { buttons_held: true },
            ],
            false,
        );
        assert!(back.pressed);

        let released_outside = run(
            &[
                PointerEnter { buttons_held: false },
                PointerDown,
                PointerLeave,
                PointerEnter { buttons_held: false },
            ],
            false,
        );
        assert!(!released_outside.pressed);

        let released = run(
            &[PointerEnter { buttons_held: false }, PointerDown, PointerUp],
            false,
        );
        assert!(!released.pressed);
    }

    #[test]
    fn test_activation_key_press() {
        let state = run(&[Focus, KeyDown(KeyInput::Activation)], false);
        assert!(state.pressed);

        let other = run(&[Focus, KeyDown(KeyInput::Other)], false);
        assert!(!other.pressed);

        let released = run(
            &[Focus, KeyDown(KeyInput::Activation), KeyUp(KeyInput::Activation)],
            false,
        );
        assert!(!released.pressed);
    }

    #[test]
    fn test_disabled_is_never_pressed_or_hovered() {
        let state = run(
            &[
                PointerEnter { buttons_held: false },
                PointerDown,
                KeyDown(KeyInput::Activation),
            ],
            true,
        );
        assert!(state.disabled);
        assert!(!state.pressed);
        assert!(!state.hovered);
    }

    #[test]
    fn test_keyboard_focus_is_visible() {
        let state = run(&[Focus], false);
        assert!(state.focused);
        assert!(state.focus_visible);
    }

    #[test]
    fn test_pointer_focus_is_not_visible() {
        let state = run(
            &[PointerEnter { buttons_held: false }, PointerDown, Focus],
            false,
        );
        assert!(state.focused);
        assert!(!state.focus_visible);

        // Typing after a click brings the ring back
        let typed = run(
            &[PointerDown, Focus, KeyDown(KeyInput::Other)],
            false,
        );
        assert!(typed.focus_visible);
    }

    #[test]
    fn test_blur_resets_modality() {
        let state = run(&[PointerDown, Focus, Blur, Focus], false);
        assert!(state.focus_visible);
    }

    #[test]
    fn test_visual_override_only_touches_selected() {
        let state = InteractionTracker::default().snapshot(false, false);
        let forced = state.with_visual_override(Some(true));
        assert!(forced.selected);
        assert_eq!(forced.active_attributes(), vec!["data-selected"]);
        assert_eq!(state.with_visual_override(None), state);
    }

    #[test]
    fn test_attr_presence() {
        let state = InteractionState {
            hovered: true,
            ..InteractionState::default()
        };
        assert_eq!(state.attr(StyleFlag::Hovered), Some("true"));
        assert_eq!(state.attr(StyleFlag::Pressed), None);
    }
}
