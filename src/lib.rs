pub mod config;
pub mod error;
pub mod playback;
pub mod segmentation;
pub mod transcript;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
