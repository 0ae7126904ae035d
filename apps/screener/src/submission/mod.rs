// Request lifecycle: tagged state plus the controller that drives it.

pub mod controller;
pub mod state;

pub use controller::SubmissionController;
pub use state::RequestState;
