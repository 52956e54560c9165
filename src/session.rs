//! Game session: the turn controller that drives a single game.
//!
//! A [`GameSession`] owns the board, the current phase, the play mode and
//! the computer player. Front ends feed it input events
//! ([`select_cell`](GameSession::select_cell), [`reset`](GameSession::reset),
//! [`set_mode`](GameSession::set_mode)) and receive every visible change
//! through a [`SessionObserver`].
//!
//! Invalid input is dropped without a trace: an out-of-range index, an
//! occupied square, or any move after the game has ended leaves the session
//! untouched and notifies nobody.

use crate::games::tictactoe::{
    Board, Move, MoveError, Player, Position, WinningLine, assert_invariants, check_win,
};
use crate::observer::{SessionObserver, WinHighlight};
use crate::players::{MoveSelector, RandomComputer};
use crate::settings::{GameSettings, Mode};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Phase of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Game is ongoing; `to_move` places the next mark.
    InProgress {
        /// Player whose turn it is.
        to_move: Player,
    },
    /// Game ended with `winner` holding `line`.
    Won {
        /// The winner.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board filled with no winner.
    Draw,
}

impl Phase {
    /// Phase of a fresh game.
    pub const START: Phase = Phase::InProgress { to_move: Player::X };
}

/// A single tic-tac-toe game and its turn controller.
#[derive(Debug, Clone)]
pub struct GameSession<S = RandomComputer> {
    board: Board,
    phase: Phase,
    mode: Mode,
    history: Vec<Move>,
    computer: S,
}

impl GameSession<RandomComputer> {
    /// Creates a two-player session with an entropy-seeded computer on standby.
    #[instrument]
    pub fn new() -> Self {
        Self::from_settings(&GameSettings::default())
    }

    /// Creates a session from settings.
    #[instrument]
    pub fn from_settings(settings: &GameSettings) -> Self {
        let computer = RandomComputer::from_seed("Computer", *settings.seed());
        Self::with_computer(*settings.mode(), computer)
    }
}

impl Default for GameSession<RandomComputer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSelector> GameSession<S> {
    /// Creates a session in `mode` with a custom computer player.
    pub fn with_computer(mode: Mode, computer: S) -> Self {
        info!(%mode, computer = computer.name(), "Creating game session");
        Self {
            board: Board::new(),
            phase: Phase::START,
            mode,
            history: Vec::new(),
            computer,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Input events
    // ─────────────────────────────────────────────────────────────

    /// Handles a click on cell `index` (0-8) by the player to move.
    ///
    /// In vs-computer mode, the computer answers before this returns.
    #[instrument(skip(self, ui), fields(mode = %self.mode))]
    pub fn select_cell(&mut self, index: usize, ui: &mut impl SessionObserver) {
        let Ok(position) = Position::try_from(index) else {
            return;
        };
        let Phase::InProgress { to_move } = self.phase else {
            return;
        };

        match self.play(position, to_move, ui) {
            Ok(Phase::InProgress { .. }) => {}
            _ => return,
        }

        let next = to_move.opponent();
        self.phase = Phase::InProgress { to_move: next };
        ui.on_status_changed(&self.status_message());

        if self.mode == Mode::VsComputer && next == Player::O {
            self.computer_move(ui);
        }
    }

    /// Clears the board and starts a new game with X to move.
    #[instrument(skip(self, ui))]
    pub fn reset(&mut self, ui: &mut impl SessionObserver) {
        self.board.reset();
        self.history.clear();
        self.phase = Phase::START;
        info!("Game reset");
        ui.on_reset();
        ui.on_status_changed(&self.status_message());
    }

    /// Switches play mode. Always resets the game, even if the mode is unchanged.
    #[instrument(skip(self, ui))]
    pub fn set_mode(&mut self, mode: Mode, ui: &mut impl SessionObserver) {
        info!(from = %self.mode, to = %mode, "Switching mode");
        self.mode = mode;
        self.reset(ui);
        ui.on_mode_changed(mode);
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the play mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::InProgress { to_move } => Some(to_move),
            _ => None,
        }
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::InProgress { .. })
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Returns the moves of the current game in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the computer player.
    pub fn computer(&self) -> &S {
        &self.computer
    }

    /// Returns the status line for the current phase.
    pub fn status_message(&self) -> String {
        match self.phase {
            Phase::InProgress { to_move } => format!("Player {}'s turn", to_move),
            Phase::Won { winner, .. } => format!("Player {} wins!", winner),
            Phase::Draw => "It's a draw!".to_string(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Plays O for the computer.
    ///
    /// If the game continues, the turn goes back to X unconditionally
    /// rather than flipping from the mover.
    fn computer_move(&mut self, ui: &mut impl SessionObserver) {
        let Some(player) = self.to_move() else {
            return;
        };
        let Some(position) = self.computer.select(&self.board) else {
            return;
        };

        match self.play(position, player, ui) {
            Ok(Phase::InProgress { .. }) => {
                self.phase = Phase::InProgress { to_move: Player::X };
                ui.on_status_changed(&self.status_message());
            }
            Ok(_) => {}
            Err(e) => {
                warn!(computer = self.computer.name(), error = %e, "Computer chose an unplayable square");
            }
        }
    }

    /// Places `player`'s mark and settles a win or draw.
    ///
    /// Returns the phase after the move. On `InProgress` the caller decides
    /// who moves next.
    fn play(
        &mut self,
        position: Position,
        player: Player,
        ui: &mut impl SessionObserver,
    ) -> Result<Phase, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        self.board.apply_move(position, player)?;
        let mov = Move::new(player, position);
        self.history.push(mov);
        assert_invariants(&self.board, &self.history);
        debug!(%mov, "Move applied");
        ui.on_cell_changed(position, player);

        if let Some(line) = check_win(&self.board, player) {
            info!(%player, %line, "Game won");
            self.phase = Phase::Won { winner: player, line };
            ui.on_win(line, player, WinHighlight::for_winner(player, self.mode));
            ui.on_status_changed(&self.status_message());
        } else if self.board.is_full() {
            info!("Game drawn");
            self.phase = Phase::Draw;
            ui.on_draw();
            ui.on_status_changed(&self.status_message());
        }

        Ok(self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{EventLog, SessionEvent};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Layer that counts every tracing event it sees.
    #[derive(Clone, Default)]
    struct EventCounter(Arc<AtomicUsize>);

    impl<T: tracing::Subscriber> Layer<T> for EventCounter {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, T>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Runs `f` under a fresh subscriber and returns how many events it emitted.
    fn count_events(f: impl FnOnce()) -> usize {
        let counter = EventCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        tracing::subscriber::with_default(subscriber, f);
        counter.0.load(Ordering::SeqCst)
    }

    /// Computer that plays a fixed list of squares in order.
    struct Scripted(Vec<Position>);

    impl MoveSelector for Scripted {
        fn select(&mut self, board: &Board) -> Option<Position> {
            if board.is_full() || self.0.is_empty() {
                return None;
            }
            Some(self.0.remove(0))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn play_all<S: MoveSelector>(session: &mut GameSession<S>, cells: &[usize]) {
        for &i in cells {
            session.select_cell(i, &mut ());
        }
    }

    #[test]
    fn test_new_session_starts_with_x() {
        let session = GameSession::new();
        assert_eq!(session.phase(), Phase::START);
        assert_eq!(session.to_move(), Some(Player::X));
        assert_eq!(session.mode(), Mode::TwoPlayer);
        assert_eq!(session.status_message(), "Player X's turn");
    }

    #[test]
    fn test_turns_alternate_in_two_player_mode() {
        let mut session = GameSession::new();
        session.select_cell(4, &mut ());
        assert_eq!(session.to_move(), Some(Player::O));
        session.select_cell(0, &mut ());
        assert_eq!(session.to_move(), Some(Player::X));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut session = GameSession::new();
        let mut log = EventLog::new();
        session.select_cell(9, &mut log);
        assert!(log.events().is_empty());
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_occupied_square_is_silent_noop() {
        let mut session = GameSession::new();
        session.select_cell(4, &mut ());
        let before = session.board().clone();

        let mut log = EventLog::new();
        session.select_cell(4, &mut log);

        assert!(log.events().is_empty());
        assert_eq!(session.board(), &before);
        assert_eq!(session.to_move(), Some(Player::O));
    }

    #[test]
    fn test_win_notifications_in_order() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4, 1, 5]);

        let mut log = EventLog::new();
        session.select_cell(2, &mut log);

        assert_eq!(
            log.events(),
            &[
                SessionEvent::CellChanged { index: 2, player: Player::X },
                SessionEvent::Win {
                    line: [0, 1, 2],
                    player: Player::X,
                    highlight: WinHighlight::Player1,
                },
                SessionEvent::StatusChanged { message: "Player X wins!".to_string() },
            ]
        );
        assert!(!session.is_active());
    }

    #[test]
    fn test_moves_after_win_ignored() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4, 1, 5, 2]);
        let before = session.board().clone();

        let mut log = EventLog::new();
        session.select_cell(8, &mut log);

        assert!(log.events().is_empty());
        assert_eq!(session.board(), &before);
        assert_eq!(session.winner(), Some(Player::X));
    }

    #[test]
    fn test_computer_answers_and_returns_turn_to_x() {
        let mut session =
            GameSession::with_computer(Mode::VsComputer, Scripted(vec![Position::TopLeft]));
        let mut log = EventLog::new();
        session.select_cell(4, &mut log);

        assert_eq!(
            log.events(),
            &[
                SessionEvent::CellChanged { index: 4, player: Player::X },
                SessionEvent::StatusChanged { message: "Player O's turn".to_string() },
                SessionEvent::CellChanged { index: 0, player: Player::O },
                SessionEvent::StatusChanged { message: "Player X's turn".to_string() },
            ]
        );
        assert_eq!(session.to_move(), Some(Player::X));
    }

    #[test]
    fn test_computer_win_uses_computer_highlight() {
        let script = vec![Position::MiddleLeft, Position::Center, Position::MiddleRight];
        let mut session = GameSession::with_computer(Mode::VsComputer, Scripted(script));
        let mut log = EventLog::new();
        for i in [0, 1, 8] {
            session.select_cell(i, &mut log);
        }

        assert_eq!(session.winner(), Some(Player::O));
        assert!(log.events().contains(&SessionEvent::Win {
            line: [3, 4, 5],
            player: Player::O,
            highlight: WinHighlight::Computer,
        }));
    }

    #[test]
    fn test_computer_with_no_choice_does_nothing() {
        let mut session = GameSession::with_computer(Mode::VsComputer, Scripted(vec![]));
        session.select_cell(4, &mut ());
        assert_eq!(session.board().count(Player::O), 0);
        assert_eq!(session.to_move(), Some(Player::O));
    }

    #[test]
    fn test_set_mode_resets_and_notifies() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4]);

        let mut log = EventLog::new();
        session.set_mode(Mode::VsComputer, &mut log);

        assert_eq!(session.mode(), Mode::VsComputer);
        assert_eq!(session.board(), &Board::new());
        assert!(session.history().is_empty());
        assert_eq!(
            log.events(),
            &[
                SessionEvent::Reset,
                SessionEvent::StatusChanged { message: "Player X's turn".to_string() },
                SessionEvent::ModeChanged { mode: Mode::VsComputer },
            ]
        );
    }

    #[test]
    fn test_set_mode_to_same_mode_still_resets() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4, 8]);

        let mut log = EventLog::new();
        session.set_mode(Mode::TwoPlayer, &mut log);

        assert_eq!(session.mode(), Mode::TwoPlayer);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.to_move(), Some(Player::X));
        assert!(session.history().is_empty());
        assert_eq!(log.events().first(), Some(&SessionEvent::Reset));
        assert_eq!(log.events().last(), Some(&SessionEvent::ModeChanged { mode: Mode::TwoPlayer }));
    }

    #[test]
    fn test_rejected_input_emits_no_log_events() {
        let mut session = GameSession::new();
        assert!(count_events(|| session.select_cell(4, &mut ())) > 0);

        assert_eq!(count_events(|| session.select_cell(9, &mut ())), 0);
        assert_eq!(count_events(|| session.select_cell(usize::MAX, &mut ())), 0);
        assert_eq!(count_events(|| session.select_cell(4, &mut ())), 0);
        assert_eq!(session.to_move(), Some(Player::O));

        // O:0 X:3 O:1 X:5 completes X's middle row.
        play_all(&mut session, &[0, 3, 1, 5]);
        assert_eq!(session.winner(), Some(Player::X));
        assert_eq!(count_events(|| session.select_cell(8, &mut ())), 0);
    }

    #[test]
    fn test_session_exposes_its_computer() {
        let session = GameSession::with_computer(Mode::VsComputer, Scripted(vec![]));
        assert_eq!(session.computer().name(), "scripted");
        assert_eq!(GameSession::new().computer().name(), "Computer");
    }
}
