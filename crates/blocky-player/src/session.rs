use blocky_engine::{Block, Move};
use rand::Rng;
use serde::Serialize;

use crate::{InputEvent, MouseButton, Player};

/// One finished turn of a [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub player: usize,
    #[serde(rename = "move")]
    pub mv: Move,
    /// `false` if the board rejected the move; the turn is still used up.
    pub applied: bool,
    /// Score of the moving player after the turn.
    pub score: usize,
}

/// Headless game loop: owns the board and the players and takes turns in order.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Block,
    players: Vec<Player>,
    history: Vec<TurnRecord>,
}

impl GameSession {
    #[must_use]
    pub fn new(board: Block, players: Vec<Player>) -> Self {
        Self {
            board,
            players,
            history: vec![],
        }
    }

    #[must_use]
    pub fn board(&self) -> &Block {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Player whose turn it is, or `None` if there are no players.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_index()?)
    }

    fn current_index(&self) -> Option<usize> {
        (!self.players.is_empty()).then(|| self.history.len() % self.players.len())
    }

    /// Forwards an input event to the player whose turn it is.
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(index) = self.current_index() {
            self.players[index].process_event(event);
        }
    }

    /// Lets the current player move, if it has a move ready.
    ///
    /// Random and smart players are triggered automatically; a human only moves once
    /// its input (see [`Self::handle_event`]) yields a move. The move is applied to the
    /// board with the mover's goal colour.
    pub fn try_turn<R>(&mut self, rng: &mut R) -> Option<&TurnRecord>
    where
        R: Rng + ?Sized,
    {
        let index = self.current_index()?;
        let player = &mut self.players[index];
        if !player.strategy().is_human() {
            player.process_event(InputEvent::MouseDown(MouseButton::Left));
        }
        let mv = player.generate_move(&self.board, rng)?;
        let goal = player.goal();

        let applied = match mv.apply(&mut self.board, goal.colour(), rng) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(player = player.id(), %mv, %err, "move rejected");
                false
            }
        };
        let record = TurnRecord {
            turn: self.history.len(),
            player: player.id(),
            mv,
            applied,
            score: goal.score(&self.board),
        };
        tracing::debug!(
            turn = record.turn,
            player = record.player,
            mv = %record.mv,
            score = record.score,
            "turn finished"
        );
        self.history.push(record);
        self.history.last()
    }

    /// Plays up to `turns` turns, stopping early if a player is waiting for input.
    ///
    /// Returns the number of turns played.
    pub fn play<R>(&mut self, turns: usize, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        (0..turns)
            .take_while(|_| self.try_turn(rng).is_some())
            .count()
    }

    /// Current score of every player, in player order.
    #[must_use]
    pub fn scores(&self) -> Vec<usize> {
        self.players
            .iter()
            .map(|player| player.goal().score(&self.board))
            .collect()
    }

    /// Ids of the players sharing the highest score.
    #[must_use]
    pub fn winners(&self) -> Vec<usize> {
        let scores = self.scores();
        let Some(&best) = scores.iter().max() else {
            return vec![];
        };
        self.players
            .iter()
            .zip(scores)
            .filter(|&(_, score)| score == best)
            .map(|(player, _)| player.id())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use blocky_engine::{Action, BlockPath, Colour, Position, generate_board};
    use blocky_evaluator::goal::Goal;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::create_players;

    fn simulate(seed: u64) -> GameSession {
        let mut rng = Pcg32::seed_from_u64(seed);
        let board = generate_board(3, 750, &mut rng);
        let players = create_players(0, 2, &[3], &mut rng).unwrap();
        let mut session = GameSession::new(board, players);
        assert_eq!(session.play(9, &mut rng), 9);
        session
    }

    #[test]
    fn test_players_take_turns_in_order() {
        let session = simulate(5);
        let movers: Vec<_> = session.history().iter().map(|t| t.player).collect();
        assert_eq!(movers, [0, 1, 2, 0, 1, 2, 0, 1, 2]);
        assert!(session.history().iter().map(|t| t.turn).eq(0..9));
        assert_eq!(session.current_player().map(Player::id), Some(0));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = simulate(21);
        let b = simulate(21);
        assert_eq!(a.board(), b.board());
        assert_eq!(a.history(), b.history());
        assert_eq!(a.scores(), b.scores());
    }

    #[test]
    fn test_random_moves_are_applied() {
        let session = simulate(8);
        for record in session.history().iter().filter(|t| t.player < 2) {
            assert!(!record.mv.is_pass());
            assert!(record.applied);
        }
    }

    #[test]
    fn test_human_turn_waits_for_input() {
        let mut rng = Pcg32::seed_from_u64(0);
        let board = Block::root(500, 2, Colour::REAL_RED);
        let players = vec![
            Player::human(0, Goal::perimeter(Colour::OLD_OLIVE)),
            Player::random(1, Goal::perimeter(Colour::REAL_RED)),
        ];
        let mut session = GameSession::new(board, players);
        assert!(session.try_turn(&mut rng).is_none());
        assert_eq!(session.play(3, &mut rng), 0);

        session.handle_event(InputEvent::PointerMoved(Position::new(0, 0)));
        session.handle_event(InputEvent::Action(Action::Smash));
        let record = session.try_turn(&mut rng).unwrap();
        assert_eq!(record.player, 0);
        assert_eq!(record.mv, Move::new(Action::Smash, BlockPath::root()));
        assert!(record.applied);
        assert_eq!(session.board().children().len(), 4);

        assert_eq!(session.current_player().map(Player::id), Some(1));
        assert!(session.try_turn(&mut rng).is_some());
    }

    #[test]
    fn test_rejected_move_uses_turn() {
        let mut rng = Pcg32::seed_from_u64(0);
        let board = Block::root(500, 2, Colour::REAL_RED);
        let before = board.clone();
        let mut session = GameSession::new(
            board,
            vec![Player::human(0, Goal::blob(Colour::REAL_RED))],
        );
        session.handle_event(InputEvent::PointerMoved(Position::new(0, 0)));
        session.handle_event(InputEvent::Action(Action::Combine));
        let record = session.try_turn(&mut rng).unwrap();
        assert!(!record.applied);
        assert_eq!(record.score, 16);
        assert_eq!(session.board(), &before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_scores_and_winners() {
        let mut board = Block::root(500, 1, Colour::REAL_RED);
        board
            .subdivide([
                Colour::REAL_RED,
                Colour::REAL_RED,
                Colour::OLD_OLIVE,
                Colour::OLD_OLIVE,
            ])
            .unwrap();
        let players = vec![
            Player::random(0, Goal::blob(Colour::REAL_RED)),
            Player::random(1, Goal::blob(Colour::OLD_OLIVE)),
            Player::random(2, Goal::blob(Colour::PACIFIC_POINT)),
        ];
        let session = GameSession::new(board, players);
        assert_eq!(session.scores(), [2, 2, 0]);
        assert_eq!(session.winners(), [0, 1]);

        let empty = GameSession::new(Block::root(10, 0, Colour::REAL_RED), vec![]);
        assert!(empty.winners().is_empty());
        assert!(empty.current_player().is_none());
    }
}
