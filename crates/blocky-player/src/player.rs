use blocky_engine::{Block, Move};
use blocky_evaluator::goal::{Goal, GoalError, generate_goals};
use rand::Rng;
use serde::Serialize;

use crate::{HumanState, InputEvent, MouseButton, RandomState, SmartState};

/// How a player chooses moves, with the state the choice depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Strategy {
    Human(HumanState),
    Random(RandomState),
    Smart(SmartState),
}

/// A participant in the game, identified by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: usize,
    goal: Goal,
    strategy: Strategy,
}

impl Player {
    #[must_use]
    pub fn human(id: usize, goal: Goal) -> Self {
        Self::new(id, goal, Strategy::Human(HumanState::default()))
    }

    #[must_use]
    pub fn random(id: usize, goal: Goal) -> Self {
        Self::new(id, goal, Strategy::Random(RandomState::default()))
    }

    #[must_use]
    pub fn smart(id: usize, goal: Goal, difficulty: usize) -> Self {
        Self::new(id, goal, Strategy::Smart(SmartState::new(difficulty)))
    }

    #[must_use]
    pub fn new(id: usize, goal: Goal, strategy: Strategy) -> Self {
        Self { id, goal, strategy }
    }

    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    #[must_use]
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Updates the player's state from an input event.
    ///
    /// Humans track actions, depth selection and the pointer. Random and smart
    /// players start searching after a left click.
    pub fn process_event(&mut self, event: InputEvent) {
        match &mut self.strategy {
            Strategy::Human(state) => state.process_event(event),
            Strategy::Random(state) => {
                if event == InputEvent::MouseDown(MouseButton::Left) {
                    state.trigger();
                }
            }
            Strategy::Smart(state) => {
                if event == InputEvent::MouseDown(MouseButton::Left) {
                    state.trigger();
                }
            }
        }
    }

    /// Block the player is pointing at.
    ///
    /// Always `None` for random and smart players.
    #[must_use]
    pub fn selected_block<'a>(&self, board: &'a Block) -> Option<&'a Block> {
        match &self.strategy {
            Strategy::Human(state) => state.selected_block(board),
            Strategy::Random(_) | Strategy::Smart(_) => None,
        }
    }

    /// Proposes a move on `board`, or `None` while the player is still waiting for
    /// input.
    ///
    /// The board is never modified; applying the move is up to the caller. Paint moves
    /// are meant to be applied with this player's goal colour.
    ///
    /// ```
    /// use blocky_engine::{Block, Colour};
    /// use blocky_evaluator::goal::Goal;
    /// use blocky_player::{InputEvent, MouseButton, Player};
    /// use rand::SeedableRng as _;
    /// use rand_pcg::Pcg32;
    ///
    /// let mut rng = Pcg32::seed_from_u64(0);
    /// let board = Block::root(500, 2, Colour::OLD_OLIVE);
    /// let mut player = Player::smart(0, Goal::blob(Colour::OLD_OLIVE), 0);
    /// assert_eq!(player.generate_move(&board, &mut rng), None);
    ///
    /// player.process_event(InputEvent::MouseDown(MouseButton::Left));
    /// let mv = player.generate_move(&board, &mut rng).unwrap();
    /// assert!(mv.is_pass());
    /// ```
    pub fn generate_move<R>(&mut self, board: &Block, rng: &mut R) -> Option<Move>
    where
        R: Rng + ?Sized,
    {
        match &mut self.strategy {
            Strategy::Human(state) => state.generate_move(board),
            Strategy::Random(state) => state.generate_move(board, self.goal.colour(), rng),
            Strategy::Smart(state) => state.generate_move(board, self.goal, rng),
        }
    }
}

/// Creates humans, then random players, then one smart player per difficulty.
///
/// Ids are assigned in that order starting at 0, and every player gets a goal from a
/// single [`generate_goals`] call.
pub fn create_players<R>(
    num_human: usize,
    num_random: usize,
    smart_difficulties: &[usize],
    rng: &mut R,
) -> Result<Vec<Player>, GoalError>
where
    R: Rng + ?Sized,
{
    let num_players = num_human + num_random + smart_difficulties.len();
    let goals = generate_goals(num_players, rng)?;
    let strategies = std::iter::repeat_with(|| Strategy::Human(HumanState::default()))
        .take(num_human)
        .chain(
            std::iter::repeat_with(|| Strategy::Random(RandomState::default())).take(num_random),
        )
        .chain(
            smart_difficulties
                .iter()
                .map(|&difficulty| Strategy::Smart(SmartState::new(difficulty))),
        );
    Ok(goals
        .into_iter()
        .zip(strategies)
        .enumerate()
        .map(|(id, (goal, strategy))| Player::new(id, goal, strategy))
        .collect())
}

#[cfg(test)]
mod tests {
    use blocky_engine::{Action, BlockPath, Colour, Position, Quadrant, generate_board};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    const C0: Colour = Colour::PALETTE[0];
    const C1: Colour = Colour::PALETTE[1];
    const C2: Colour = Colour::PALETTE[2];
    const C3: Colour = Colour::PALETTE[3];

    fn depth2_board() -> Block {
        let mut board = Block::root(500, 2, C0);
        board.subdivide([C0, C1, C2, C3]).unwrap();
        board
            .child_mut(Quadrant::UpperRight)
            .unwrap()
            .subdivide([C2, C0, C2, C3])
            .unwrap();
        board
    }

    fn left_click() -> InputEvent {
        InputEvent::MouseDown(MouseButton::Left)
    }

    mod human {
        use super::*;

        #[test]
        fn test_waits_for_pointer_and_action() {
            let mut rng = Pcg32::seed_from_u64(0);
            let board = depth2_board();
            let mut player = Player::human(0, Goal::perimeter(C3));
            assert_eq!(player.generate_move(&board, &mut rng), None);

            player.process_event(InputEvent::Action(Action::SwapVertical));
            assert_eq!(player.generate_move(&board, &mut rng), None);

            player.process_event(InputEvent::PointerMoved(Position::new(300, 100)));
            let mv = player.generate_move(&board, &mut rng).unwrap();
            assert_eq!(mv.action(), Action::SwapVertical);
            assert_eq!(mv.target(), &BlockPath::root());

            // The action is consumed with the move.
            assert_eq!(player.generate_move(&board, &mut rng), None);
        }

        #[test]
        fn test_depth_selection() {
            let mut rng = Pcg32::seed_from_u64(0);
            let board = depth2_board();
            let mut player = Player::human(0, Goal::blob(C2));
            player.process_event(InputEvent::PointerMoved(Position::new(300, 100)));
            player.process_event(InputEvent::SelectDeeper);
            player.process_event(InputEvent::SelectDeeper);
            let selected = player.selected_block(&board).unwrap();
            assert_eq!(selected.level(), 2);
            assert_eq!(selected.position(), Position::new(250, 0));

            player.process_event(InputEvent::Action(Action::Paint));
            let mv = player.generate_move(&board, &mut rng).unwrap();
            let expected: BlockPath = [Quadrant::UpperRight, Quadrant::UpperLeft]
                .into_iter()
                .collect();
            assert_eq!(mv.target(), &expected);

            // Depth never goes below the root.
            for _ in 0..5 {
                player.process_event(InputEvent::SelectShallower);
            }
            assert_eq!(player.selected_block(&board).unwrap().level(), 0);
        }

        #[test]
        fn test_depth_change_clears_pending_action() {
            let mut rng = Pcg32::seed_from_u64(0);
            let board = depth2_board();
            let mut player = Player::human(0, Goal::blob(C2));
            player.process_event(InputEvent::PointerMoved(Position::new(10, 10)));
            player.process_event(InputEvent::Action(Action::Smash));
            player.process_event(InputEvent::SelectDeeper);
            assert_eq!(player.generate_move(&board, &mut rng), None);
        }

        #[test]
        fn test_deeper_than_tree_selects_leaf() {
            let board = depth2_board();
            let mut player = Player::human(0, Goal::blob(C2));
            player.process_event(InputEvent::PointerMoved(Position::new(10, 400)));
            for _ in 0..4 {
                player.process_event(InputEvent::SelectDeeper);
            }
            let selected = player.selected_block(&board).unwrap();
            assert_eq!(selected.level(), 1);
            assert_eq!(selected.colour(), Some(C2));
        }

        #[test]
        fn test_pointer_outside_board() {
            let mut rng = Pcg32::seed_from_u64(0);
            let board = depth2_board();
            let mut player = Player::human(0, Goal::blob(C2));
            player.process_event(InputEvent::PointerMoved(Position::new(500, 10)));
            player.process_event(InputEvent::Action(Action::Smash));
            assert!(player.selected_block(&board).is_none());
            assert_eq!(player.generate_move(&board, &mut rng), None);
        }
    }

    mod random {
        use super::*;

        #[test]
        fn test_waits_for_click() {
            let mut rng = Pcg32::seed_from_u64(0);
            let board = depth2_board();
            let mut player = Player::random(0, Goal::blob(C2));
            assert_eq!(player.generate_move(&board, &mut rng), None);
            player.process_event(InputEvent::MouseDown(MouseButton::Right));
            assert_eq!(player.generate_move(&board, &mut rng), None);
            assert!(player.selected_block(&board).is_none());
        }

        #[test]
        fn test_emits_legal_move_without_touching_board() {
            for seed in 0..20 {
                let mut rng = Pcg32::seed_from_u64(seed);
                let board = generate_board(3, 750, &mut rng);
                let before = board.clone();
                let mut player = Player::random(0, Goal::perimeter(C1));
                player.process_event(left_click());
                let mv = player.generate_move(&board, &mut rng).unwrap();
                assert_eq!(board, before);
                assert!(!mv.is_pass());

                let mut live = board.clone();
                assert!(mv.apply(&mut live, C1, &mut rng).is_ok());

                // The trigger is consumed.
                assert_eq!(player.generate_move(&board, &mut rng), None);
            }
        }
    }

    mod smart {
        use super::*;

        #[test]
        fn test_difficulty_zero_passes() {
            for seed in 0..10 {
                let mut rng = Pcg32::seed_from_u64(seed);
                let board = generate_board(3, 750, &mut rng);
                let mut player = Player::smart(0, Goal::blob(C0), 0);
                player.process_event(left_click());
                assert!(player.generate_move(&board, &mut rng).unwrap().is_pass());
            }
        }

        #[test]
        fn test_passes_when_board_cannot_improve() {
            let mut rng = Pcg32::seed_from_u64(1);
            let board = Block::root(500, 2, C3);
            let mut player = Player::smart(0, Goal::perimeter(C3), 50);
            player.process_event(left_click());
            // Already the maximum score; no candidate can exceed it.
            assert!(player.generate_move(&board, &mut rng).unwrap().is_pass());
        }

        #[test]
        fn test_move_is_legal_and_improves_subtree() {
            for seed in 0..10 {
                let mut rng = Pcg32::seed_from_u64(seed);
                let mut board = Block::root(100, 1, C0);
                board.subdivide([C0; 4]).unwrap();
                let goal = Goal::perimeter(C2);
                let mut player = Player::smart(0, goal, 50);
                player.process_event(left_click());
                let mv = player.generate_move(&board, &mut rng).unwrap();
                assert!(!mv.is_pass(), "seed {seed}");

                let mut live = board.clone();
                assert!(mv.apply(&mut live, goal.colour(), &mut rng).is_ok());
                // Smash colours are resampled, so only deterministic actions replay exactly.
                if mv.action() != Action::Smash {
                    let target = live.get(mv.target()).unwrap();
                    assert!(goal.score(target) > goal.score(&board), "seed {seed}: {mv}");
                }
            }
        }

        #[test]
        fn test_passes_without_legal_moves() {
            let mut rng = Pcg32::seed_from_u64(2);
            let board = Block::root(100, 0, C1);
            let mut player = Player::smart(0, Goal::blob(C1), 4);
            player.process_event(left_click());
            assert!(player.generate_move(&board, &mut rng).unwrap().is_pass());
        }
    }

    #[test]
    fn test_create_players_order_and_goals() {
        let mut rng = Pcg32::seed_from_u64(9);
        let players = create_players(1, 1, &[2, 5], &mut rng).unwrap();
        assert_eq!(players.len(), 4);
        assert!(players.iter().map(Player::id).eq(0..4));
        assert!(players[0].strategy().is_human());
        assert!(players[1].strategy().is_random());
        assert_eq!(players[2].strategy(), &Strategy::Smart(SmartState::new(2)));
        assert_eq!(players[3].strategy(), &Strategy::Smart(SmartState::new(5)));

        let kind = players[0].goal().kind();
        assert!(players.iter().all(|player| player.goal().kind() == kind));
        for (i, player) in players.iter().enumerate() {
            assert!(
                players[i + 1..]
                    .iter()
                    .all(|other| other.goal().colour() != player.goal().colour())
            );
        }
    }

    #[test]
    fn test_create_players_too_many() {
        let mut rng = Pcg32::seed_from_u64(9);
        assert!(matches!(
            create_players(2, 2, &[1], &mut rng),
            Err(GoalError::TooManyGoals { requested: 5, .. })
        ));
    }
}
