//! Input events for the MultiCheck control.
//!
//! A host translates its own input (mouse clicks, key presses, test drivers)
//! into [`MultiCheckEvent`]s and hands them to
//! [`MultiCheck::event`](super::widgets::MultiCheck::event). The control
//! accepts the events it handles; unaccepted events may be propagated further
//! by the host.
//!
//! ```
//! use multicheck::model::CheckOption;
//! use multicheck::widget::widgets::{CheckTarget, MultiCheck};
//! use multicheck::widget::{Key, MultiCheckEvent};
//!
//! let mut control = MultiCheck::new(vec![CheckOption::new("One", "1")]);
//!
//! let mut event = MultiCheckEvent::key_release(Key::Space, CheckTarget::SelectAll);
//! assert!(control.event(&mut event));
//! assert!(event.is_accepted());
//! assert!(control.is_all_selected());
//! ```

use super::widgets::CheckTarget;

/// Common data for all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }
}

/// Keys a checkbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Any other key.
    Other,
}

impl Key {
    /// Returns `true` for keys that activate a focused checkbox.
    pub fn activates(&self) -> bool {
        matches!(self, Key::Space | Key::Enter)
    }
}

/// A click on a checkbox identified by its target.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// The clicked checkbox.
    pub target: CheckTarget,
}

/// A click on a checkbox identified by its visible text.
#[derive(Debug, Clone)]
pub struct LabelClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// The text of the clicked label.
    pub text: String,
}

/// A key released while a checkbox had focus.
#[derive(Debug, Clone)]
pub struct KeyReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The released key.
    pub key: Key,
    /// The focused checkbox.
    pub target: CheckTarget,
}

/// Input events understood by the MultiCheck control.
#[derive(Debug, Clone)]
pub enum MultiCheckEvent {
    /// Checkbox click.
    Click(ClickEvent),
    /// Label click.
    LabelClick(LabelClickEvent),
    /// Key release on a focused checkbox.
    KeyRelease(KeyReleaseEvent),
}

impl MultiCheckEvent {
    /// A click on the checkbox with `target`.
    pub fn click(target: CheckTarget) -> Self {
        Self::Click(ClickEvent {
            base: EventBase::new(),
            target,
        })
    }

    /// A click on the checkbox labeled `text`.
    pub fn label_click(text: impl Into<String>) -> Self {
        Self::LabelClick(LabelClickEvent {
            base: EventBase::new(),
            text: text.into(),
        })
    }

    /// A key release on the checkbox with `target`.
    pub fn key_release(key: Key, target: CheckTarget) -> Self {
        Self::KeyRelease(KeyReleaseEvent {
            base: EventBase::new(),
            key,
            target,
        })
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::Click(e) => e.base.is_accepted(),
            Self::LabelClick(e) => e.base.is_accepted(),
            Self::KeyRelease(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::Click(e) => e.base.accept(),
            Self::LabelClick(e) => e.base.accept(),
            Self::KeyRelease(e) => e.base.accept(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_start_unaccepted() {
        let mut event = MultiCheckEvent::click(CheckTarget::SelectAll);
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());

        let event = MultiCheckEvent::label_click("Red");
        assert!(!event.is_accepted());
        let event = MultiCheckEvent::key_release(Key::Space, CheckTarget::Option("red".into()));
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_activation_keys() {
        assert!(Key::Space.activates());
        assert!(Key::Enter.activates());
        assert!(!Key::Other.activates());
    }
}
