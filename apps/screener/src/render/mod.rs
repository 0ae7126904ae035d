//! Result rendering: a pure mapping from `RequestState` to a `ViewModel`.
//!
//! Nothing here performs I/O. `terminal` draws a `ViewModel` as text.

pub mod terminal;

use serde::Serialize;

use crate::models::EvaluationResult;
use crate::submission::RequestState;

pub const SUBMIT_LABEL: &str = "Process Evaluation";
pub const BUSY_LABEL: &str = "Analyzing Documents...";
pub const NO_SKILLS_PLACEHOLDER: &str = "No skills matched directly.";
pub const EXPERIENCE_CAPTION: &str = "Verified Years";

/// Strictly above this the bar is `Primary`; 50 itself is `Warning`.
const PRIMARY_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub submit: SubmitTrigger,
    pub busy: bool,
    pub error: Option<String>,
    pub result: Option<ResultPanel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitTrigger {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPanel {
    pub badge: StatusBadge,
    pub match_bar: MatchBar,
    pub reason: String,
    pub skills: SkillsRegion,
    pub experience: ExperienceFigure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBadge {
    pub tone: BadgeTone,
    pub headline: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarColor {
    Primary,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchBar {
    /// The service value as-is, not clamped.
    pub width_percent: f64,
    pub color: BarColor,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SkillsRegion {
    Chips(Vec<String>),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceFigure {
    pub years: f64,
    pub caption: &'static str,
}

pub fn render(state: &RequestState) -> ViewModel {
    let busy = state.is_pending();

    ViewModel {
        submit: SubmitTrigger {
            label: if busy { BUSY_LABEL } else { SUBMIT_LABEL },
            enabled: !busy,
        },
        busy,
        error: state.error().map(str::to_string),
        result: state.result().map(result_panel),
    }
}

fn result_panel(result: &EvaluationResult) -> ResultPanel {
    ResultPanel {
        badge: status_badge(result),
        match_bar: match_bar(result.skill_match_percentage),
        reason: result.reason.clone(),
        skills: skills_region(&result.matched_skills),
        experience: ExperienceFigure {
            years: result.experience,
            caption: EXPERIENCE_CAPTION,
        },
    }
}

fn status_badge(result: &EvaluationResult) -> StatusBadge {
    if result.is_selected() {
        StatusBadge {
            tone: BadgeTone::Positive,
            headline: "Selected",
            caption: "Recommended",
        }
    } else {
        StatusBadge {
            tone: BadgeTone::Negative,
            headline: "Rejected",
            caption: "Not Suitable",
        }
    }
}

fn match_bar(percentage: f64) -> MatchBar {
    MatchBar {
        width_percent: percentage,
        color: if percentage > PRIMARY_THRESHOLD {
            BarColor::Primary
        } else {
            BarColor::Warning
        },
        label: format!("{percentage}%"),
    }
}

fn skills_region(skills: &[String]) -> SkillsRegion {
    if skills.is_empty() {
        SkillsRegion::Placeholder(NO_SKILLS_PLACEHOLDER)
    } else {
        SkillsRegion::Chips(skills.to_vec())
    }
}
