//! Keyboard stepper.
//!
//! Maps `KeyboardEvent.key` names to engine actions. A key that maps to an
//! action is one the caller should `prevent_default` on.

use crate::engine::EngineAction;
use crate::{Direction, Thumb};

/// Keys the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowUp,
    ArrowLeft,
    ArrowDown,
    Home,
    End,
    Enter,
}

impl Key {
    /// Parse a DOM key name; anything unhandled is `None`.
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowDown" => Some(Key::ArrowDown),
            "Home" => Some(Key::Home),
            "End" => Some(Key::End),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }
}

/// Action for a key pressed while a thumb has focus.
pub fn thumb_action(thumb: Thumb, key: Key) -> Option<EngineAction> {
    match key {
        Key::ArrowRight | Key::ArrowUp => Some(EngineAction::Step(thumb, Direction::Increase)),
        Key::ArrowLeft | Key::ArrowDown => Some(EngineAction::Step(thumb, Direction::Decrease)),
        Key::Home => Some(EngineAction::JumpToMin(thumb)),
        Key::End => Some(EngineAction::JumpToMax(thumb)),
        Key::Enter => None,
    }
}

/// Action for a key pressed inside a thumb's text input. Enter commits;
/// the caller also blurs the input afterwards.
pub fn input_action(thumb: Thumb, key: Key) -> Option<EngineAction> {
    match key {
        Key::Enter => Some(EngineAction::Commit(thumb)),
        _ => None,
    }
}

/// Convenience wrapper over [`Key::from_key_name`] and [`thumb_action`].
pub fn thumb_action_for(thumb: Thumb, key_name: &str) -> Option<EngineAction> {
    Key::from_key_name(key_name).and_then(|key| thumb_action(thumb, key))
}

/// Convenience wrapper over [`Key::from_key_name`] and [`input_action`].
pub fn input_action_for(thumb: Thumb, key_name: &str) -> Option<EngineAction> {
    Key::from_key_name(key_name).and_then(|key| input_action(thumb, key))
}
