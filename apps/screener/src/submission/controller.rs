//! Submission controller: owns the request lifecycle of one session.
//!
//! Flow of `submit()`:
//! 1. A request already in flight → rejected, nothing changes.
//! 2. Either selection missing → `Failed(validation message)`, no network call.
//! 3. `Pending` (drops any previous error or result), then one transport call.
//! 4. `Succeeded(result)` or `Failed(generic message)`.
//!
//! Every transition is published on a watch channel so a view can re-render.

use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::{SubmitError, MISSING_INPUT_MESSAGE};
use crate::evaluation_client::EvaluationTransport;
use crate::input::InputCollector;
use crate::models::EvaluationResult;
use crate::submission::state::RequestState;

pub struct SubmissionController<T> {
    transport: T,
    state: watch::Sender<RequestState>,
}

impl<T: EvaluationTransport> SubmissionController<T> {
    pub fn new(transport: T) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self { transport, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Back to `Idle`. No-op while a request is pending.
    #[allow(dead_code)]
    pub fn reset(&self) {
        self.state.send_if_modified(|state| match state {
            RequestState::Pending | RequestState::Idle => false,
            _ => {
                *state = RequestState::Idle;
                true
            }
        });
    }

    pub async fn submit(&self, inputs: &InputCollector) -> Result<EvaluationResult, SubmitError> {
        let selections = inputs.both();

        // Check-and-enter happens in one step on the channel.
        let mut busy = false;
        self.state.send_if_modified(|state| {
            if state.is_pending() {
                busy = true;
                return false;
            }
            *state = match selections {
                Some(_) => RequestState::Pending,
                None => RequestState::Failed(MISSING_INPUT_MESSAGE.to_string()),
            };
            true
        });

        if busy {
            warn!("Submit ignored: an evaluation is already pending");
            return Err(SubmitError::AlreadyPending);
        }

        let Some((resume, jd)) = selections else {
            debug!("Submit rejected: missing resume or job description");
            return Err(SubmitError::MissingInput);
        };

        let mut guard = PendingGuard::new(&self.state);
        let span = info_span!("submission", id = %Uuid::new_v4());

        info!(
            parent: &span,
            "Submitting '{}' against '{}'", resume.file_name, jd.file_name
        );

        let outcome = self
            .transport
            .submit_evaluation(resume, jd)
            .instrument(span.clone())
            .await;
        guard.disarm();

        match outcome {
            Ok(result) => {
                info!(
                    parent: &span,
                    "Evaluation completed: status={}, match={}%",
                    result.candidate_status,
                    result.skill_match_percentage
                );
                self.state.send_replace(RequestState::Succeeded(result.clone()));
                Ok(result)
            }
            Err(e) => {
                let err = SubmitError::from(e);
                let message = span.in_scope(|| err.user_message());
                self.state.send_replace(RequestState::Failed(message));
                Err(err)
            }
        }
    }
}

/// Returns a dropped, still-pending submission to `Idle` so the trigger
/// does not stay disabled forever. The request itself is not aborted.
struct PendingGuard<'a> {
    state: &'a watch::Sender<RequestState>,
    armed: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(state: &'a watch::Sender<RequestState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_if_modified(|state| {
                if state.is_pending() {
                    *state = RequestState::Idle;
                    true
                } else {
                    false
                }
            });
        }
    }
}
