use blocky_engine::{Action, Position};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "kebab-case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Input delivered to [`crate::Player::process_event`].
///
/// Events a player does not recognize are ignored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "kebab-case")]
pub enum InputEvent {
    /// An action key was pressed.
    Action(Action),
    /// Select blocks one level closer to the root.
    SelectShallower,
    /// Select blocks one level further from the root.
    SelectDeeper,
    /// The pointer moved to a pixel coordinate on the board.
    PointerMoved(Position),
    MouseDown(MouseButton),
}
