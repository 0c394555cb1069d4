use alloc::collections::BTreeMap;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Clicks after which a mine is shown without ending the round.
pub const MINE_CLICK_LIMIT: u8 = 3;

/// Valid transitions:
/// - Active -> Won
/// - Active -> Lost
/// - any -> Active (restart)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Active,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Semantic input, already mapped from whatever the front end received.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    PrimaryClick(Coord2),
    SecondaryClick(Coord2),
    SafeClick,
    Undo,
}

/// All state of a game: the live board, counters, undo history and the tokens
/// that keep deferred tasks honest.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: SmallRng,
    board: Board,
    lives: u8,
    safe_clicks: u8,
    history: History,
    state: RoundState,
    /// Bumped on every restart.
    round: u32,
    /// Safe-click marks still waiting for their revert, by hint id.
    hints: BTreeMap<u32, Coord2>,
    /// Never reused, so a revert can only ever match the hint it was made for.
    next_hint: u32,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::generate(&config, &mut rng);
        log::debug!("new session, seed: {seed}, config: {config:?}");
        Self::from_parts(config, board, rng)
    }

    /// Session over a prepared board, mostly for fixtures.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Self {
        let config = GameConfig {
            size: board.size(),
            mines: board.mine_count(),
            ..config
        };
        Self::from_parts(config, board, SmallRng::seed_from_u64(seed))
    }

    fn from_parts(config: GameConfig, board: Board, rng: SmallRng) -> Self {
        Self {
            config,
            rng,
            history: History::new(&board),
            board,
            lives: config.lives,
            safe_clicks: config.safe_clicks,
            state: RoundState::Active,
            round: 0,
            hints: BTreeMap::new(),
            next_hint: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn safe_clicks(&self) -> u8 {
        self.safe_clicks
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Cells currently carrying a safe-click mark.
    pub fn hinted_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.hints.values().copied()
    }

    /// Throws the round away: fresh mines, counters and history. Every task
    /// scheduled before this point becomes stale.
    pub fn restart(&mut self) {
        self.round = self.round.wrapping_add(1);
        self.hints.clear();
        self.board = Board::generate(&self.config, &mut self.rng);
        self.history = History::new(&self.board);
        self.lives = self.config.lives;
        self.safe_clicks = self.config.safe_clicks;
        self.state = RoundState::Active;
        log::debug!("restarted, round {}", self.round);
    }

    pub fn handle(
        &mut self,
        event: InputEvent,
        scheduler: &mut impl Scheduler,
    ) -> Result<EventOutcome> {
        use InputEvent::*;
        Ok(match event {
            PrimaryClick(coords) => EventOutcome::Reveal(self.primary_click(coords, scheduler)?),
            SecondaryClick(coords) => EventOutcome::Mark(self.secondary_click(coords)?),
            SafeClick => EventOutcome::Assist(self.request_safe_click(scheduler)),
            Undo => EventOutcome::Undo(self.request_undo()),
        })
    }

    /// Reveal request. Every mine click costs a life, marked or shown alike.
    /// Any other unmarked cell is flood-revealed, snapshotted and followed by
    /// a win check, even when it was already shown.
    pub fn primary_click(
        &mut self,
        coords: Coord2,
        scheduler: &mut impl Scheduler,
    ) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if !self.state.is_active() {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.board[coords];
        if cell.is_mine {
            return Ok(self.handle_mine_click(coords, scheduler));
        }
        // a shown cell is never marked
        if cell.is_marked {
            return Ok(RevealOutcome::NoChange);
        }

        let shown = self.board.reveal(coords);
        log::debug!("revealed {coords:?}, {shown} cells shown");
        self.take_snapshot();

        if self.board.is_cleared() {
            log::debug!("board cleared, round won");
            self.state = RoundState::Won;
            return Ok(RevealOutcome::Won);
        }

        Ok(if shown > 0 {
            RevealOutcome::Revealed
        } else {
            RevealOutcome::NoChange
        })
    }

    /// Pushes the live board minus any pending safe-click marks, so undo
    /// never resurrects a hint.
    fn take_snapshot(&mut self) {
        if self.hints.is_empty() {
            self.history.snapshot(&self.board);
            return;
        }
        let mut snapshot = self.board.clone();
        for &coords in self.hints.values() {
            snapshot.set_marked(coords, false);
        }
        self.history.snapshot(&snapshot);
    }

    fn handle_mine_click(
        &mut self,
        coords: Coord2,
        scheduler: &mut impl Scheduler,
    ) -> RevealOutcome {
        self.lives = self.lives.saturating_sub(1);
        let clicks = self.board.record_mine_click(coords);

        if self.lives == 0 {
            log::debug!("game over: mine at {coords:?} took the last life");
            self.board.reveal_all_mines();
            self.state = RoundState::Lost;
            scheduler.schedule(
                self.config.delay_ms,
                DeferredTask::Restart { round: self.round },
            );
            RevealOutcome::GameOver
        } else if clicks == MINE_CLICK_LIMIT {
            log::debug!("mine at {coords:?} exploded, lives left: {}", self.lives);
            self.board.force_show(coords);
            self.hints.retain(|_, hinted| *hinted != coords);
            RevealOutcome::MineExploded {
                lives_left: self.lives,
            }
        } else {
            log::debug!("clicked mine at {coords:?}, lives left: {}", self.lives);
            RevealOutcome::MineHit {
                lives_left: self.lives,
            }
        }
    }

    /// Flag toggle. Not snapshotted, so undo never rolls a flag back. Toggling
    /// a hinted cell hands its mark over to the player.
    pub fn secondary_click(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if !self.state.is_active() {
            return Ok(MarkOutcome::NoChange);
        }
        let outcome = self.board.toggle_flag(coords);
        if outcome.has_update() {
            self.hints.retain(|_, hinted| *hinted != coords);
        }
        Ok(outcome)
    }

    /// Temporarily marks a random covered cell. The cell is not checked for
    /// a mine; the mark is reverted after the configured delay.
    pub fn request_safe_click(&mut self, scheduler: &mut impl Scheduler) -> AssistOutcome {
        if !self.state.is_active() || self.safe_clicks == 0 {
            return AssistOutcome::NoChange;
        }

        let covered = self.board.covered_cells();
        if covered.is_empty() {
            return AssistOutcome::NoChange;
        }

        let coords = covered[self.rng.random_range(0..covered.len())];
        self.board.set_marked(coords, true);
        self.safe_clicks -= 1;

        let hint = self.next_hint;
        self.next_hint = self.next_hint.wrapping_add(1);
        self.hints.insert(hint, coords);
        scheduler.schedule(
            self.config.delay_ms,
            DeferredTask::RevertSafeMark { hint, coords },
        );
        log::debug!(
            "safe click marked {coords:?}, {} left",
            self.safe_clicks
        );
        AssistOutcome::Marked(coords)
    }

    /// Restores the board to the previous snapshot; the seed state stays.
    /// Pending hints carry over onto the restored board while their cell is
    /// still covered there, and keep their scheduled revert.
    pub fn request_undo(&mut self) -> UndoOutcome {
        if !self.state.is_active() {
            return UndoOutcome::NoChange;
        }
        let Some(mut board) = self.history.undo() else {
            return UndoOutcome::NoChange;
        };

        self.hints.retain(|_, coords| board[*coords].is_covered());
        for &coords in self.hints.values() {
            board.set_marked(coords, true);
        }
        self.board = board;
        log::debug!("undo, history length {}", self.history.len());
        UndoOutcome::Restored
    }

    /// Runs a task handed to the scheduler earlier. Returns whether it still
    /// applied; stale tasks are ignored.
    pub fn run_deferred(&mut self, task: DeferredTask) -> bool {
        match task {
            DeferredTask::Restart { round } if round == self.round => {
                self.restart();
                true
            }
            DeferredTask::RevertSafeMark { hint, coords }
                if self.hints.get(&hint) == Some(&coords) =>
            {
                self.hints.remove(&hint);
                self.board.set_marked(coords, false).has_update()
            }
            _ => {
                log::trace!("ignoring stale {task:?}");
                false
            }
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn fixture(config: GameConfig) -> GameSession {
        let board = Board::from_mine_coords(4, &[(0, 0), (3, 3)]).unwrap();
        GameSession::with_board(config, board, 1)
    }

    fn classic() -> GameSession {
        fixture(GameConfig::CLASSIC)
    }

    /// Everything a player can observe, for no-op checks.
    fn observable(session: &GameSession) -> (Board, u8, u8, usize, RoundState, u32, Vec<Coord2>) {
        (
            session.board().clone(),
            session.lives(),
            session.safe_clicks(),
            session.history_len(),
            session.state(),
            session.round(),
            session.hinted_cells().collect(),
        )
    }

    #[test]
    fn new_session_starts_with_full_counters() {
        let session = GameSession::new(GameConfig::CLASSIC, 42);

        assert_eq!(session.lives(), 3);
        assert_eq!(session.safe_clicks(), 3);
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.state(), RoundState::Active);
        assert_eq!(session.board().mine_count(), 2);
        assert_eq!(session.board().size(), 4);
    }

    #[test]
    fn out_of_range_input_is_rejected_without_change() {
        let mut session = classic();
        let before = observable(&session);

        assert_eq!(
            session.primary_click((4, 0), &mut NoScheduler),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            session.secondary_click((0, 4)),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(observable(&session), before);
    }

    #[test]
    fn reveal_snapshots_and_undo_restores_previous_grid() {
        let mut session = classic();
        let seed = session.board().clone();

        assert_eq!(
            session.primary_click((1, 1), &mut NoScheduler),
            Ok(RevealOutcome::Revealed)
        );
        assert_eq!(session.history_len(), 2);

        assert_eq!(session.request_undo(), UndoOutcome::Restored);
        assert_eq!(session.board(), &seed);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn undo_on_seed_state_is_noop() {
        let mut session = classic();
        let before = observable(&session);

        assert_eq!(session.request_undo(), UndoOutcome::NoChange);
        assert_eq!(observable(&session), before);
    }

    #[test]
    fn repeated_reveal_still_pushes_a_snapshot() {
        let mut session = classic();
        let seed = session.board().clone();
        session.primary_click((1, 1), &mut NoScheduler).unwrap();
        let revealed = session.board().clone();

        assert_eq!(
            session.primary_click((1, 1), &mut NoScheduler),
            Ok(RevealOutcome::NoChange)
        );
        assert_eq!(session.history_len(), 3);

        // first undo drops the no-op snapshot, the second the real reveal
        assert_eq!(session.request_undo(), UndoOutcome::Restored);
        assert_eq!(session.board(), &revealed);
        assert_eq!(session.request_undo(), UndoOutcome::Restored);
        assert_eq!(session.board(), &seed);
        assert_eq!(session.request_undo(), UndoOutcome::NoChange);
    }

    #[test]
    fn flag_toggles_are_not_undoable() {
        let mut session = classic();
        assert_eq!(session.secondary_click((2, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(session.history_len(), 1);

        assert_eq!(session.request_undo(), UndoOutcome::NoChange);
        assert!(session.board()[(2, 0)].is_marked);
    }

    #[test]
    fn marked_safe_cell_ignores_primary_click() {
        let mut session = classic();
        assert_eq!(session.secondary_click((2, 0)), Ok(MarkOutcome::Changed));
        let before = observable(&session);

        assert_eq!(
            session.primary_click((2, 0), &mut NoScheduler),
            Ok(RevealOutcome::NoChange)
        );
        assert_eq!(observable(&session), before);
    }

    #[test]
    fn marked_mine_still_costs_a_life() {
        let mut session = classic();
        assert_eq!(session.secondary_click((0, 0)), Ok(MarkOutcome::Changed));

        assert_eq!(
            session.primary_click((0, 0), &mut NoScheduler),
            Ok(RevealOutcome::MineHit { lives_left: 2 })
        );
        let cell = session.board()[(0, 0)];
        assert_eq!(cell.click_count, 1);
        assert!(cell.is_marked && !cell.is_shown);
    }

    #[test]
    fn mine_click_costs_one_life_and_counts_clicks() {
        let mut session = classic();

        assert_eq!(
            session.primary_click((0, 0), &mut NoScheduler),
            Ok(RevealOutcome::MineHit { lives_left: 2 })
        );
        assert_eq!(session.board()[(0, 0)].click_count, 1);
        assert!(!session.board()[(0, 0)].is_shown);
        assert_eq!(session.history_len(), 1);

        assert_eq!(
            session.primary_click((3, 3), &mut NoScheduler),
            Ok(RevealOutcome::MineHit { lives_left: 1 })
        );
        assert_eq!(session.board()[(3, 3)].click_count, 1);
    }

    #[test]
    fn third_click_on_same_mine_shows_it() {
        let mut session = fixture(GameConfig::CLASSIC.with_lives(5));

        for lives_left in [4, 3] {
            assert_eq!(
                session.primary_click((0, 0), &mut NoScheduler),
                Ok(RevealOutcome::MineHit { lives_left })
            );
        }
        assert_eq!(
            session.primary_click((0, 0), &mut NoScheduler),
            Ok(RevealOutcome::MineExploded { lives_left: 2 })
        );

        let cell = session.board()[(0, 0)];
        assert!(cell.is_shown && cell.is_mine);
        assert_eq!(cell.click_count, 3);
        assert!(!session.board()[(3, 3)].is_shown);
        assert_eq!(session.state(), RoundState::Active);

        // a shown mine keeps costing lives
        assert_eq!(
            session.primary_click((0, 0), &mut NoScheduler),
            Ok(RevealOutcome::MineHit { lives_left: 1 })
        );
        let cell = session.board()[(0, 0)];
        assert!(cell.is_shown);
        assert_eq!(cell.click_count, 4);

        assert_eq!(
            session.primary_click((0, 0), &mut NoScheduler),
            Ok(RevealOutcome::GameOver)
        );
        assert_eq!(session.state(), RoundState::Lost);
    }

    #[test]
    fn losing_last_life_reveals_mines_and_schedules_restart() {
        let mut session = classic();
        let mut scheduler = ManualScheduler::new();

        session.primary_click((0, 0), &mut scheduler).unwrap();
        session.primary_click((0, 0), &mut scheduler).unwrap();
        assert_eq!(scheduler.pending(), 0);

        assert_eq!(
            session.primary_click((3, 3), &mut scheduler),
            Ok(RevealOutcome::GameOver)
        );
        assert_eq!(session.lives(), 0);
        assert_eq!(session.state(), RoundState::Lost);
        assert!(session.board()[(0, 0)].is_shown);
        assert!(session.board()[(3, 3)].is_shown);
        assert_eq!(session.board().shown_count(), 2);

        // the round is over until the restart fires
        assert_eq!(
            session.primary_click((1, 1), &mut scheduler),
            Ok(RevealOutcome::NoChange)
        );
        assert_eq!(session.request_safe_click(&mut scheduler), AssistOutcome::NoChange);

        assert!(scheduler.advance(1999).is_empty());
        let due = scheduler.advance(1);
        assert_eq!(due, [DeferredTask::Restart { round: 0 }]);
        for task in due {
            assert!(session.run_deferred(task));
        }

        assert_eq!(session.state(), RoundState::Active);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.safe_clicks(), 3);
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.round(), 1);
        assert_eq!(session.board().mine_count(), 2);
        assert_eq!(session.board().shown_count(), 0);
    }

    #[test]
    fn manual_restart_invalidates_pending_restart() {
        let mut session = classic();
        let mut scheduler = ManualScheduler::new();
        for coords in [(0, 0), (0, 0), (3, 3)] {
            session.primary_click(coords, &mut scheduler).unwrap();
        }

        session.restart();
        session.primary_click((1, 1), &mut scheduler).unwrap();
        let before = observable(&session);

        for task in scheduler.advance(2000) {
            assert!(!session.run_deferred(task));
        }
        assert_eq!(observable(&session), before);
    }

    #[test]
    fn win_is_signalled_once_on_last_settling_reveal() {
        let mut session = classic();
        session.secondary_click((0, 0)).unwrap();
        session.secondary_click((3, 3)).unwrap();

        assert_eq!(
            session.primary_click((0, 3), &mut NoScheduler),
            Ok(RevealOutcome::Won)
        );
        assert_eq!(session.state(), RoundState::Won);

        assert_eq!(session.secondary_click((0, 0)), Ok(MarkOutcome::NoChange));
        assert_eq!(
            session.primary_click((0, 3), &mut NoScheduler),
            Ok(RevealOutcome::NoChange)
        );
        assert_eq!(session.state(), RoundState::Won);
    }

    #[test]
    fn flagging_last_mine_does_not_win_until_next_click() {
        let mut session = classic();
        session.primary_click((0, 3), &mut NoScheduler).unwrap();
        session.secondary_click((0, 0)).unwrap();

        assert_eq!(session.secondary_click((3, 3)), Ok(MarkOutcome::Changed));
        assert_eq!(session.state(), RoundState::Active);

        // a click on an already shown cell still runs the win check
        assert_eq!(
            session.primary_click((1, 1), &mut NoScheduler),
            Ok(RevealOutcome::Won)
        );
        assert_eq!(session.history_len(), 3);
    }

    #[test]
    fn safe_click_marks_covered_cell_then_reverts() {
        let mut session = classic();
        let mut scheduler = ManualScheduler::new();

        let AssistOutcome::Marked(coords) = session.request_safe_click(&mut scheduler) else {
            panic!("expected a marked cell");
        };
        assert!(session.board()[coords].is_marked);
        assert_eq!(session.safe_clicks(), 2);
        assert_eq!(session.history_len(), 1);

        let due = scheduler.advance(2000);
        assert_eq!(
            due,
            [DeferredTask::RevertSafeMark { hint: 0, coords }]
        );
        assert!(session.run_deferred(due[0]));
        assert!(!session.board()[coords].is_marked);
        assert_eq!(session.hinted_cells().count(), 0);

        // a second delivery of the same task is stale
        assert!(!session.run_deferred(due[0]));
    }

    #[test]
    fn safe_clicks_run_out() {
        let mut session = classic();
        let mut scheduler = ManualScheduler::new();
        let marked: Vec<_> = (0..3)
            .map(|_| session.request_safe_click(&mut scheduler))
            .collect();
        assert!(marked.iter().all(|outcome| outcome.has_update()));
        assert_eq!(session.safe_clicks(), 0);
        let before = observable(&session);

        assert_eq!(session.request_safe_click(&mut scheduler), AssistOutcome::NoChange);
        assert_eq!(observable(&session), before);
        assert_eq!(scheduler.pending(), 3);
    }

    #[test]
    fn safe_click_without_covered_cells_is_noop() {
        let mut session = classic();
        session.primary_click((0, 3), &mut NoScheduler).unwrap();
        session.secondary_click((0, 0)).unwrap();
        session.secondary_click((3, 3)).unwrap();
        assert!(session.board().covered_cells().is_empty());
        let before = observable(&session);
        let mut scheduler = ManualScheduler::new();

        assert_eq!(session.request_safe_click(&mut scheduler), AssistOutcome::NoChange);
        assert_eq!(observable(&session), before);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn stale_revert_after_restart_is_ignored() {
        let mut session = classic();
        let mut scheduler = ManualScheduler::new();
        session.request_safe_click(&mut scheduler);

        session.restart();
        for coords in session.board().coords().collect::<Vec<_>>() {
            session.secondary_click(coords).unwrap();
        }
        let before = observable(&session);

        for task in scheduler.advance(2000) {
            assert!(!session.run_deferred(task));
        }
        assert_eq!(observable(&session), before);
    }

    #[test]
    fn undo_never_resurrects_a_safe_click_mark() {
        let mut session = classic();
        let mut scheduler = ManualScheduler::new();
        let AssistOutcome::Marked(coords) = session.request_safe_click(&mut scheduler) else {
            panic!("expected a marked cell");
        };
        // reveals on the far side of the hint, both snapshotted with it live
        let target = if coords == (0, 3) { (3, 0) } else { (0, 3) };
        session.primary_click(target, &mut scheduler).unwrap();
        session.primary_click(target, &mut scheduler).unwrap();

        for task in scheduler.advance(2000) {
            session.run_deferred(task);
        }
        assert!(!session.board()[coords].is_marked);

        while session.request_undo() == UndoOutcome::Restored {
            assert!(!session.board()[coords].is_marked);
        }
        assert_eq!(session.history_len(), 1);
        assert_eq!(scheduler.pending(), 0);
        assert!(session.board().coords().all(|c| !session.board()[c].is_marked));
    }

    #[test]
    fn pending_hint_survives_undo_and_still_reverts() {
        let mut session = classic();
        let mut scheduler = ManualScheduler::new();
        session.primary_click((1, 1), &mut scheduler).unwrap();
        let AssistOutcome::Marked(coords) = session.request_safe_click(&mut scheduler) else {
            panic!("expected a marked cell");
        };

        assert_eq!(session.request_undo(), UndoOutcome::Restored);
        assert!(session.board()[coords].is_marked);
        assert_eq!(session.hinted_cells().collect::<Vec<_>>(), [coords]);

        let due = scheduler.advance(2000);
        assert_eq!(due.len(), 1);
        assert!(session.run_deferred(due[0]));
        assert!(!session.board()[coords].is_marked);
    }

    #[test]
    fn flagging_hinted_cell_takes_over_the_mark() {
        let mut session = classic();
        let mut scheduler = ManualScheduler::new();
        let AssistOutcome::Marked(coords) = session.request_safe_click(&mut scheduler) else {
            panic!("expected a marked cell");
        };

        // unflag, then flag again as the player's own mark
        session.secondary_click(coords).unwrap();
        session.secondary_click(coords).unwrap();
        assert!(session.board()[coords].is_marked);

        for task in scheduler.advance(2000) {
            assert!(!session.run_deferred(task));
        }
        assert!(session.board()[coords].is_marked);
    }

    #[test]
    fn handle_dispatches_events() {
        let mut session = classic();
        let mut scheduler = ManualScheduler::new();

        let outcome = session
            .handle(InputEvent::SecondaryClick((2, 0)), &mut scheduler)
            .unwrap();
        assert_eq!(outcome, EventOutcome::Mark(MarkOutcome::Changed));

        let outcome = session
            .handle(InputEvent::PrimaryClick((1, 1)), &mut scheduler)
            .unwrap();
        assert_eq!(outcome, EventOutcome::Reveal(RevealOutcome::Revealed));

        let outcome = session.handle(InputEvent::Undo, &mut scheduler).unwrap();
        assert_eq!(outcome, EventOutcome::Undo(UndoOutcome::Restored));

        let outcome = session.handle(InputEvent::SafeClick, &mut scheduler).unwrap();
        assert!(outcome.has_update());
    }

    #[test]
    fn restart_reseeds_board() {
        let mut session = GameSession::new(GameConfig::CLASSIC, 3);
        let boards: Vec<_> = (0..8)
            .map(|_| {
                session.restart();
                session.board().clone()
            })
            .collect();

        assert!(boards.iter().all(|board| board.mine_count() == 2));
        assert!(boards.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
