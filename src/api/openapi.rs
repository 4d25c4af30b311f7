use utoipa::OpenApi;

use crate::models::{
    game::{
        ErrorResponse, GameSnapshot, HighScoreResponse, PlotView, RoundPhase, Screen, TapOutcome,
        TapResponse,
    },
    plot::{PlotState, Tone},
    Coordinate,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Rush API",
        description = "Thirty-second garden tile game: plant, harvest and repair a 4x4 grid of plots before the clock runs out.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::game::get_game,
        crate::api::handlers::game::start_round,
        crate::api::handlers::game::tap_plot,
        crate::api::handlers::high_score::get_high_score,
    ),
    components(
        schemas(
            // Enums
            PlotState, Tone, RoundPhase, Screen,
            // Game state
            Coordinate, PlotView, GameSnapshot,
            // Responses
            TapOutcome, TapResponse, HighScoreResponse, ErrorResponse,
        )
    ),
    tags(
        (name = "game",       description = "Round lifecycle and plot taps"),
        (name = "high-score", description = "Best score across rounds"),
    )
)]
pub struct ApiDoc;
