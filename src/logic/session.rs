use log::info;

use crate::error::GameError;
use crate::logic::round::RoundController;
use crate::models::game::{GameSnapshot, Screen, TapOutcome, TickOutcome};
use crate::storage::HighScoreStore;

/// Screen controller: switches between the start, play and game-over screens
/// and keeps the high score up to date.
pub struct GameSession {
    screen: Screen,
    round: RoundController,
    high_score: u32,
    last_score: Option<u32>,
    store: Box<dyn HighScoreStore>,
}

impl GameSession {
    /// Reads the stored high score once; later reads come from memory.
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.read_high_score();
        Self {
            screen: Screen::Init,
            round: RoundController::new(),
            high_score,
            last_score: None,
            store,
        }
    }

    /// Leaves the start or game-over screen and begins a fresh round.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.screen == Screen::Play {
            return Err(GameError::RoundInProgress);
        }
        self.round.start_round();
        self.screen = Screen::Play;
        info!("Round started (high score {})", self.high_score);
        Ok(())
    }

    pub fn tap(&mut self, index: usize) -> Result<TapOutcome, GameError> {
        if self.screen != Screen::Play {
            return Err(GameError::NoRoundInProgress);
        }
        self.round.on_plot_tap(index)
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.round.tick();
        if let TickOutcome::GameOver(score) = outcome {
            self.on_game_over(score);
        }
        outcome
    }

    /// Shows the game-over screen and persists `score` when it beats the record.
    pub fn on_game_over(&mut self, score: u32) {
        self.screen = Screen::End;
        self.last_score = Some(score);
        if score > self.high_score {
            info!("Game over: {score} points, new high score (was {})", self.high_score);
            self.high_score = score;
            self.store.write_high_score(score);
        } else {
            info!("Game over: {score} points (high score {})", self.high_score);
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn round(&self) -> &RoundController {
        &self.round
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            screen: self.screen,
            phase: self.round.phase(),
            countdown: self.round.countdown(),
            score: self.round.score(),
            high_score: self.high_score,
            last_score: self.last_score,
            plots: self.round.plot_views(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::round::ROUND_SECONDS;
    use crate::models::game::RoundPhase;
    use crate::storage::MemoryHighScoreStore;

    fn session_with(stored: u32) -> (GameSession, MemoryHighScoreStore) {
        let probe = MemoryHighScoreStore::new(stored);
        (GameSession::new(Box::new(probe.clone())), probe)
    }

    /// Plays a full round, harvesting plot 0 as often as it ripens.
    fn play_round(session: &mut GameSession, harvests: u32) -> u32 {
        session.start().unwrap();
        let mut harvested = 0;
        session.tap(0).unwrap();
        loop {
            if let TickOutcome::GameOver(score) = session.tick() {
                return score;
            }
            if harvested < harvests && session.tap(0).unwrap().points > 0 {
                harvested += 1;
                session.tap(0).unwrap();
            }
        }
    }

    #[test]
    fn test_session_starts_on_init_screen_with_stored_high_score() {
        let (session, _) = session_with(30);
        assert_eq!(session.screen(), Screen::Init);
        assert_eq!(session.high_score(), 30);
        assert_eq!(session.round().phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_tap_before_start_is_rejected() {
        let (mut session, _) = session_with(0);
        assert_eq!(session.tap(0), Err(GameError::NoRoundInProgress));
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let (mut session, _) = session_with(0);
        session.start().unwrap();
        assert_eq!(session.start(), Err(GameError::RoundInProgress));
    }

    #[test]
    fn test_new_record_is_persisted() {
        let (mut session, probe) = session_with(30);
        session.start().unwrap();
        session.on_game_over(40);
        assert_eq!(session.screen(), Screen::End);
        assert_eq!(session.high_score(), 40);
        assert_eq!(probe.read_high_score(), 40);
    }

    #[test]
    fn test_lower_score_keeps_record() {
        let (mut session, probe) = session_with(30);
        session.start().unwrap();
        session.on_game_over(20);
        assert_eq!(session.high_score(), 30);
        assert_eq!(probe.read_high_score(), 30);
        assert_eq!(session.snapshot().last_score, Some(20));
    }

    #[test]
    fn test_full_round_reaches_end_screen() {
        let (mut session, probe) = session_with(0);
        let score = play_round(&mut session, 2);
        assert_eq!(score, 20);
        assert_eq!(session.screen(), Screen::End);
        assert_eq!(session.round().countdown(), 0);
        assert_eq!(probe.read_high_score(), 20);
        assert_eq!(session.tap(0), Err(GameError::NoRoundInProgress));
    }

    #[test]
    fn test_new_game_after_end_resets_round() {
        let (mut session, _) = session_with(0);
        play_round(&mut session, 1);
        session.start().unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.screen, Screen::Play);
        assert_eq!(snapshot.countdown, ROUND_SECONDS);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.high_score, 10);
        assert_eq!(snapshot.last_score, Some(10));
    }
}
