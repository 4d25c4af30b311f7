pub mod game;
pub mod high_score;

pub use game::{get_game, start_round, tap_plot};
pub use high_score::get_high_score;
