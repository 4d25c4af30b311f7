use log::debug;

use crate::error::GameError;
use crate::logic::plot_machine;
use crate::models::{
    game::{PlotView, RoundPhase, TapOutcome, TickOutcome},
    plot::Plot,
    Coordinate, Grid, GRID_SIZE,
};

/// Seconds in one round.
pub const ROUND_SECONDS: u32 = 30;

/// Owns the grid, the countdown and the score of a single round.
/// Ticks and taps are plain `&mut self` methods; whoever owns the controller
/// is the only thing that ever mutates it.
#[derive(Debug, Clone)]
pub struct RoundController {
    grid: Grid,
    countdown: u32,
    score: u32,
    phase: RoundPhase,
}

impl RoundController {
    pub fn new() -> Self {
        Self {
            grid: [Plot::empty(); GRID_SIZE],
            countdown: ROUND_SECONDS,
            score: 0,
            phase: RoundPhase::Idle,
        }
    }

    /// Resets the grid, countdown and score, and puts the round in play.
    pub fn start_round(&mut self) {
        self.grid = [Plot::empty(); GRID_SIZE];
        self.countdown = ROUND_SECONDS;
        self.score = 0;
        self.phase = RoundPhase::Running;
    }

    /// Advances the round by one second.
    ///
    /// A countdown already at zero when the tick arrives ends the round without
    /// touching the grid. Otherwise the countdown drops by one and every plot
    /// moves forward; the tick that brings the countdown to zero ends the round.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != RoundPhase::Running {
            return TickOutcome::Idle;
        }
        if self.countdown == 0 {
            return self.finish();
        }

        self.countdown -= 1;
        let transitions = self
            .grid
            .iter_mut()
            .map(|plot| plot.advance())
            .filter(|changed| *changed)
            .count();
        debug!(
            "tick: {}s left, {} plot(s) changed, score {}",
            self.countdown, transitions, self.score
        );

        if self.countdown == 0 {
            return self.finish();
        }
        TickOutcome::Advanced {
            countdown: self.countdown,
            transitions,
        }
    }

    /// Applies the tap rule to the plot at `index`. Harvest points are added
    /// before this returns.
    pub fn on_plot_tap(&mut self, index: usize) -> Result<TapOutcome, GameError> {
        let plot = self
            .grid
            .get_mut(index)
            .ok_or(GameError::PlotOutOfRange(index))?;
        let previous = plot.state;

        let points = match plot_machine::tap_transition(previous) {
            Some((next, points)) => {
                *plot = Plot::entering(next);
                points
            }
            None => 0,
        };
        self.score += points;

        Ok(TapOutcome {
            index,
            previous,
            current: plot.state,
            points,
        })
    }

    /// Stops the round and hands back its final score. Only the first call
    /// on a running round returns a score.
    pub fn end_round(&mut self) -> Option<u32> {
        if self.phase != RoundPhase::Running {
            return None;
        }
        self.phase = RoundPhase::Ended;
        Some(self.score)
    }

    fn finish(&mut self) -> TickOutcome {
        match self.end_round() {
            Some(score) => TickOutcome::GameOver(score),
            None => TickOutcome::Idle,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn plot(&self, index: usize) -> Option<&Plot> {
        self.grid.get(index)
    }

    pub fn plots(&self) -> &Grid {
        &self.grid
    }

    pub fn plot_views(&self) -> Vec<PlotView> {
        self.grid
            .iter()
            .enumerate()
            .map(|(index, plot)| PlotView {
                index,
                position: Coordinate::of_index(index),
                state: plot.state,
                label: plot.state.label().to_string(),
                icon: plot.icon.to_string(),
                tone: plot_machine::tone(plot.state),
                remaining: plot.remaining,
            })
            .collect()
    }
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new()
    }
}
