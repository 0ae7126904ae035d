use thiserror::Error;

use crate::evaluation_client::TransportError;

pub const MISSING_INPUT_MESSAGE: &str = "Please upload both Resume and Job Description.";
pub const REQUEST_FAILED_MESSAGE: &str =
    "Failed to process. Please check if the backend server is running.";

/// Why a `submit()` call did not produce a result.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A request is already in flight; the call was ignored.
    #[error("An evaluation is already in progress")]
    AlreadyPending,

    #[error("Please upload both Resume and Job Description.")]
    MissingInput,

    #[error("Evaluation request failed: {0}")]
    Request(#[from] TransportError),
}

impl SubmitError {
    /// The text shown to the user. Transport detail is logged here and never
    /// returned.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::AlreadyPending => self.to_string(),
            SubmitError::MissingInput => MISSING_INPUT_MESSAGE.to_string(),
            SubmitError::Request(e) => {
                tracing::error!("Evaluation request error: {e:?}");
                REQUEST_FAILED_MESSAGE.to_string()
            }
        }
    }
}
