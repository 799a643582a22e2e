use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;

use super::photo::{PhotoDescriptor, PhotoRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("gallery request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("gallery request returned status {0}")]
    Status(u16),
    #[error("gallery data is not a list of photo descriptors: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// Transport and parse failures get a console note; a plain non-OK
    /// status falls back to the placeholder quietly.
    pub fn announces_placeholder_mode(&self) -> bool {
        matches!(self, LoadError::Network(_) | LoadError::Parse(_))
    }
}

/// What the gallery should show once the single load attempt settles.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<PhotoRecord>),
    Empty,
    Unavailable,
}

impl LoadOutcome {
    pub fn from_result(result: Result<Vec<PhotoDescriptor>, LoadError>) -> Self {
        match result {
            Ok(descriptors) if descriptors.is_empty() => {
                info!("Gallery data is empty");
                LoadOutcome::Empty
            }
            Ok(descriptors) => {
                let photos: Vec<PhotoRecord> =
                    descriptors.into_iter().map(PhotoRecord::from).collect();
                info!("Loaded {} gallery photos", photos.len());
                LoadOutcome::Loaded(photos)
            }
            Err(e) => {
                warn!("Gallery data unavailable: {}", e);
                LoadOutcome::Unavailable
            }
        }
    }
}

pub fn parse_descriptors(body: &str) -> Result<Vec<PhotoDescriptor>, LoadError> {
    Ok(serde_json::from_str(body)?)
}

async fn request_descriptors(url: &str) -> Result<Vec<PhotoDescriptor>, LoadError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    let body = response.text().await?;
    parse_descriptors(&body)
}

/// Fetches the gallery data once. Never fails: every problem ends up as
/// [`LoadOutcome::Unavailable`].
pub async fn load_photos(url: &str) -> LoadOutcome {
    let result = request_descriptors(url).await;
    if result.as_ref().is_err_and(LoadError::announces_placeholder_mode) {
        gloo_console::log!("Gallery JSON not accessible - using placeholder mode");
    }
    LoadOutcome::from_result(result)
}
