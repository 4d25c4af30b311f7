use actix_web::{get, web, HttpResponse};

use crate::{
    engine::GameHandle,
    error::GameError,
    models::game::{ErrorResponse, HighScoreResponse},
};

/// GET /api/high-score
/// Returns the best final score recorded so far.
#[utoipa::path(
    get,
    path = "/api/high-score",
    tag = "high-score",
    responses(
        (status = 200, description = "Best score so far", body = HighScoreResponse),
        (status = 503, description = "Game engine unavailable", body = ErrorResponse),
    )
)]
#[get("/high-score")]
pub async fn get_high_score(game: web::Data<GameHandle>) -> Result<HttpResponse, GameError> {
    let snapshot = game.snapshot().await?;
    Ok(HttpResponse::Ok().json(HighScoreResponse {
        high_score: snapshot.high_score,
    }))
}
