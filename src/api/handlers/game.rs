use actix_web::{get, post, web, HttpResponse};

use crate::{
    engine::GameHandle,
    error::GameError,
    models::game::{ErrorResponse, GameSnapshot, TapResponse},
};

/// GET /api/game
/// Returns the current screen, countdown, score and every plot.
#[utoipa::path(
    get,
    path = "/api/game",
    tag = "game",
    responses(
        (status = 200, description = "Current game state", body = GameSnapshot),
        (status = 503, description = "Game engine unavailable", body = ErrorResponse),
    )
)]
#[get("/game")]
pub async fn get_game(game: web::Data<GameHandle>) -> Result<HttpResponse, GameError> {
    let snapshot = game.snapshot().await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/game/start
/// Starts a new 30-second round from the start or game-over screen.
#[utoipa::path(
    post,
    path = "/api/game/start",
    tag = "game",
    responses(
        (status = 200, description = "Round started", body = GameSnapshot),
        (status = 409, description = "A round is already in progress", body = ErrorResponse),
    )
)]
#[post("/game/start")]
pub async fn start_round(game: web::Data<GameHandle>) -> Result<HttpResponse, GameError> {
    let snapshot = game.start().await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/game/plots/{index}/tap
/// Taps one plot: plants, harvests, clears or repairs it depending on its state.
#[utoipa::path(
    post,
    path = "/api/game/plots/{index}/tap",
    tag = "game",
    params(("index" = usize, Path, description = "Plot index, 0 to 15, row by row")),
    responses(
        (status = 200, description = "Tap applied", body = TapResponse),
        (status = 400, description = "No such plot", body = ErrorResponse),
        (status = 409, description = "No round in progress", body = ErrorResponse),
    )
)]
#[post("/game/plots/{index}/tap")]
pub async fn tap_plot(
    game: web::Data<GameHandle>,
    path: web::Path<usize>,
) -> Result<HttpResponse, GameError> {
    let (tap, snapshot) = game.tap(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(TapResponse { tap, game: snapshot }))
}
