use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::models::GRID_SIZE;

/// Failures a caller of the game can run into.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Plot {0} does not exist; the garden has {} plots.", GRID_SIZE)]
    PlotOutOfRange(usize),

    #[error("A round is already in progress.")]
    RoundInProgress,

    #[error("No round is in progress.")]
    NoRoundInProgress,

    #[error("The game engine has stopped.")]
    EngineStopped,
}

impl ResponseError for GameError {
    fn status_code(&self) -> StatusCode {
        match self {
            GameError::PlotOutOfRange(_) => StatusCode::BAD_REQUEST,
            GameError::RoundInProgress | GameError::NoRoundInProgress => StatusCode::CONFLICT,
            GameError::EngineStopped => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GameError::PlotOutOfRange(16).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(GameError::RoundInProgress.status_code(), StatusCode::CONFLICT);
        assert_eq!(GameError::NoRoundInProgress.status_code(), StatusCode::CONFLICT);
        assert_eq!(GameError::EngineStopped.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_out_of_range_message_names_the_plot() {
        let message = GameError::PlotOutOfRange(42).to_string();
        assert!(message.contains("42"), "Message must mention the index: {message}");
    }
}
