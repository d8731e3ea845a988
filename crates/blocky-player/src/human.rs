use blocky_engine::{Action, Block, Move, Position};
use serde::Serialize;

use crate::InputEvent;

/// Selection state of a human player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HumanState {
    level: u32,
    pointer: Option<Position>,
    pending: Option<Action>,
}

impl HumanState {
    /// Depth at which blocks are selected.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn pointer(&self) -> Option<Position> {
        self.pointer
    }

    /// Action waiting for [`crate::Player::generate_move`].
    #[must_use]
    pub fn pending(&self) -> Option<Action> {
        self.pending
    }

    pub(crate) fn process_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Action(action) => self.pending = Some(action),
            InputEvent::SelectShallower => {
                self.level = self.level.saturating_sub(1);
                self.pending = None;
            }
            InputEvent::SelectDeeper => {
                self.level += 1;
                self.pending = None;
            }
            InputEvent::PointerMoved(position) => self.pointer = Some(position),
            InputEvent::MouseDown(_) => {}
        }
    }

    pub(crate) fn selected_block<'a>(&self, board: &'a Block) -> Option<&'a Block> {
        board.locate(self.pointer?, self.level)
    }

    /// Emits the pending action on the selected block.
    ///
    /// Nothing is consumed until both are available.
    pub(crate) fn generate_move(&mut self, board: &Block) -> Option<Move> {
        let action = self.pending?;
        let target = board.locate_path(self.pointer?, self.level)?;
        self.pending = None;
        Some(Move::new(action, target))
    }
}
