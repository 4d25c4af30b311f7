use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::logic::plot_machine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum PlotState {
    Empty,
    Planted,
    Ready,
    Wilted,
    Barren,
    Repairing,
}

impl PlotState {
    pub const ALL: [PlotState; 6] = [
        PlotState::Empty,
        PlotState::Planted,
        PlotState::Ready,
        PlotState::Wilted,
        PlotState::Barren,
        PlotState::Repairing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlotState::Empty => "Empty",
            PlotState::Planted => "Planted",
            PlotState::Ready => "Ready",
            PlotState::Wilted => "Wilted",
            PlotState::Barren => "Barren",
            PlotState::Repairing => "Repairing",
        }
    }
}

/// Visual class the front end paints a plot with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Fertile,
    Ripe,
    Wilted,
    Barren,
    Repairing,
}

/// One grid cell.
/// `remaining` is `None` for states that never expire on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plot {
    pub state: PlotState,
    pub remaining: Option<u32>,
    pub icon: &'static str,
}

impl Plot {
    /// A plot freshly entered into `state`, with that state's full duration.
    pub fn entering(state: PlotState) -> Self {
        Self {
            state,
            remaining: plot_machine::initial_duration(state),
            icon: plot_machine::icon(state),
        }
    }

    pub fn empty() -> Self {
        Self::entering(PlotState::Empty)
    }

    /// Moves one second forward. Returns true when the plot changed state.
    pub fn advance(&mut self) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            *self = Plot::entering(plot_machine::next_state(self.state));
            true
        } else {
            self.remaining = Some(remaining);
            false
        }
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::empty()
    }
}
