//! One screening session: collect the two documents, submit once, show the
//! final view. Intermediate states (the busy indicator) go to stderr.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::cli::EvaluateArgs;
use crate::evaluation_client::{EvaluationTransport, HttpEvaluationClient};
use crate::input::InputCollector;
use crate::models::FileSelection;
use crate::render::{self, terminal};
use crate::submission::{RequestState, SubmissionController};

/// Builds the session's selections from the CLI paths. A path that is not
/// given leaves its slot empty; an unreadable path is an error.
pub async fn load_inputs(args: &EvaluateArgs) -> Result<InputCollector> {
    let mut inputs = InputCollector::new();

    if let Some(path) = &args.resume {
        inputs.set_resume(Some(FileSelection::from_path(path).await?));
    }
    if let Some(path) = &args.jd {
        inputs.set_jd(Some(FileSelection::from_path(path).await?));
    }

    Ok(inputs)
}

/// Re-renders on every published state; only the busy view is drawn here.
async fn view_loop(mut states: watch::Receiver<RequestState>) {
    while states.changed().await.is_ok() {
        let state = states.borrow_and_update().clone();
        debug!("State changed to {}", state.label());
        let view = render::render(&state);
        if view.busy {
            let _ = terminal::draw(&view, &mut std::io::stderr());
        }
    }
}

/// Runs one submission and writes the final view to `out`.
/// Returns `false` when the session ended in `Failed`.
pub async fn run_evaluation<T>(
    transport: T,
    inputs: &InputCollector,
    json: bool,
    out: &mut impl Write,
) -> Result<bool>
where
    T: EvaluationTransport,
{
    let controller = SubmissionController::new(transport);
    let view_task = tokio::spawn(view_loop(controller.subscribe()));

    // The outcome is already reflected in the state; the error detail was logged.
    let _ = controller.submit(inputs).await;
    let final_state = controller.state();

    drop(controller);
    view_task.await.context("View loop panicked")?;

    let view = render::render(&final_state);
    if json {
        serde_json::to_writer_pretty(&mut *out, &view).context("Failed to serialize view")?;
        writeln!(out)?;
    } else {
        terminal::draw(&view, out)?;
    }

    Ok(view.error.is_none())
}

pub async fn run_health(client: &HttpEvaluationClient, api_url: &str) -> Result<()> {
    let health = client
        .health()
        .await
        .with_context(|| format!("Evaluation service is not reachable at {api_url}"))?;

    info!("Health probe answered: {}", health.status);
    println!("Evaluation service at {api_url}: {}", health.status);
    Ok(())
}
