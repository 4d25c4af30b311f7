use crate::models::plot::{PlotState, Tone};

/// Points awarded for harvesting a ready plot.
pub const HARVEST_POINTS: u32 = 10;

/// Seconds a plot spends in `state` before it moves on by itself.
/// `None` means the state never expires.
pub fn initial_duration(state: PlotState) -> Option<u32> {
    match state {
        PlotState::Empty => Some(3),
        PlotState::Planted => Some(5),
        PlotState::Ready => Some(3),
        PlotState::Repairing => Some(2),
        PlotState::Wilted | PlotState::Barren => None,
    }
}

/// State a plot falls into once its timer runs out.
/// Wilted and Barren loop onto themselves; they never expire, so those arms
/// only matter if they ever get a finite duration.
pub fn next_state(state: PlotState) -> PlotState {
    match state {
        PlotState::Empty => PlotState::Barren,
        PlotState::Planted => PlotState::Ready,
        PlotState::Ready => PlotState::Wilted,
        PlotState::Repairing => PlotState::Empty,
        PlotState::Wilted => PlotState::Wilted,
        PlotState::Barren => PlotState::Barren,
    }
}

pub fn icon(state: PlotState) -> &'static str {
    match state {
        PlotState::Empty => "",
        PlotState::Planted => "🌱",
        PlotState::Ready => "🌻",
        PlotState::Wilted => "🪦",
        PlotState::Barren => "💀",
        PlotState::Repairing => "⛏️",
    }
}

pub fn tone(state: PlotState) -> Tone {
    match state {
        PlotState::Empty | PlotState::Planted => Tone::Fertile,
        PlotState::Ready => Tone::Ripe,
        PlotState::Wilted => Tone::Wilted,
        PlotState::Barren => Tone::Barren,
        PlotState::Repairing => Tone::Repairing,
    }
}

/// What a tap does to a plot in `state`: the state it moves to and the points
/// it earns. `None` when the tap has no effect.
pub fn tap_transition(state: PlotState) -> Option<(PlotState, u32)> {
    match state {
        PlotState::Empty => Some((PlotState::Planted, 0)),
        PlotState::Ready => Some((PlotState::Empty, HARVEST_POINTS)),
        PlotState::Wilted => Some((PlotState::Empty, 0)),
        PlotState::Barren => Some((PlotState::Repairing, 0)),
        PlotState::Planted | PlotState::Repairing => None,
    }
}
