use crate::models::EvaluationResult;

/// Lifecycle of the (single) evaluation request of a session.
///
/// At most one of error message / result exists at any time because each
/// lives in its own variant. Transitions replace the whole value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet, or cleared.
    #[default]
    Idle,
    Pending,
    Succeeded(EvaluationResult),
    /// Either a local validation rejection or a request failure; holds the
    /// user-facing message only.
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&EvaluationResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Pending => "pending",
            RequestState::Succeeded(_) => "succeeded",
            RequestState::Failed(_) => "failed",
        }
    }
}
