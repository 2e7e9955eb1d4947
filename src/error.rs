use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::transcript::TranscriptError;
use crate::web::pages;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A video id could not be derived from the submitted URL.
    #[error("could not read a video id from that URL")]
    InvalidUrl,

    /// The transcript source could not supply cues.
    #[error("transcript unavailable: {0}")]
    SourceUnavailable(#[from] TranscriptError),

    /// Segmentation worked but produced too few segments to be worth
    /// rendering. Not a hard failure; the input just isn't learnable.
    #[error("transcript produced only {0} segment(s)")]
    InsufficientSegments(usize),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl => StatusCode::BAD_REQUEST,
            AppError::SourceUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::InsufficientSegments(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn page(&self) -> String {
        match self {
            AppError::InvalidUrl => pages::error_page(
                "Bad URL",
                "Please check the URL you entered. It should be a YouTube watch link.",
            ),
            AppError::SourceUnavailable(_) => pages::error_page(
                "Couldn't fetch captions",
                "Something went wrong fetching the captions. The video may have no \
                 auto-generated subtitles, or the caption service did not respond.",
            ),
            AppError::InsufficientSegments(_) => pages::error_page(
                "Couldn't split this video",
                "Not enough captions were found to split this video into sections, or \
                 the captions are too sparse. Try another video with clear auto-generated \
                 subtitles.",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Html(self.page())).into_response()
    }
}
