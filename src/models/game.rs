use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{
    plot::{PlotState, Tone},
    Coordinate,
};

/// Lifecycle of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum RoundPhase {
    Idle,
    Running,
    Ended,
}

/// Top-level screen the player is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Screen {
    Init,
    Play,
    End,
}

/// Render-ready view of one plot.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlotView {
    pub index: usize,
    pub position: Coordinate,
    pub state: PlotState,
    pub label: String,
    pub icon: String,
    pub tone: Tone,
    /// Seconds until the next automatic change; absent when the plot never changes on its own.
    pub remaining: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub screen: Screen,
    pub phase: RoundPhase,
    pub countdown: u32,
    pub score: u32,
    pub high_score: u32,
    /// Final score of the most recently finished round.
    pub last_score: Option<u32>,
    pub plots: Vec<PlotView>,
}

/// Result of tapping one plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TapOutcome {
    pub index: usize,
    pub previous: PlotState,
    pub current: PlotState,
    pub points: u32,
}

impl TapOutcome {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// What one tick of the round produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No round is running; nothing happened.
    Idle,
    /// The round moved one second forward.
    Advanced { countdown: u32, transitions: usize },
    /// The round just ended with this final score.
    GameOver(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TapResponse {
    pub tap: TapOutcome,
    pub game: GameSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreResponse {
    pub high_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
