use std::io::{self, Write};

use super::{BadgeTone, BarColor, SkillsRegion, ViewModel};

const BAR_CELLS: usize = 20;

/// Number of filled cells for a percentage. Out-of-range values are clamped
/// here only; the view model keeps the raw number.
fn filled_cells(width_percent: f64) -> usize {
    let clamped = if width_percent.is_finite() {
        width_percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    ((clamped / 100.0) * BAR_CELLS as f64).round() as usize
}

pub fn draw(view: &ViewModel, out: &mut impl Write) -> io::Result<()> {
    if view.busy {
        writeln!(out, "[{}]", view.submit.label)?;
    }

    if let Some(error) = &view.error {
        writeln!(out, "! {error}")?;
    }

    let Some(panel) = &view.result else {
        return Ok(());
    };

    let marker = match panel.badge.tone {
        BadgeTone::Positive => '+',
        BadgeTone::Negative => '-',
    };
    writeln!(out, "Decision: {} ({}) {marker}", panel.badge.headline, panel.badge.caption)?;

    let filled = filled_cells(panel.match_bar.width_percent);
    let fill = match panel.match_bar.color {
        BarColor::Primary => '#',
        BarColor::Warning => '=',
    };
    writeln!(
        out,
        "Match Score: {} [{}{}]",
        panel.match_bar.label,
        fill.to_string().repeat(filled),
        ".".repeat(BAR_CELLS - filled)
    )?;

    writeln!(out, "Evaluation Feedback: {}", panel.reason)?;

    match &panel.skills {
        SkillsRegion::Chips(skills) => {
            let chips: Vec<String> = skills.iter().map(|s| format!("[{s}]")).collect();
            writeln!(out, "Matched Skills: {}", chips.join(" "))?;
        }
        SkillsRegion::Placeholder(text) => writeln!(out, "Matched Skills: {text}")?,
    }

    writeln!(
        out,
        "Years of Experience: {} {}",
        panel.experience.years, panel.experience.caption
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EvaluationResult;
    use crate::render::render;
    use crate::submission::RequestState;

    fn draw_to_string(state: &RequestState) -> String {
        let mut out = Vec::new();
        draw(&render(state), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_filled_cells_clamps() {
        assert_eq!(filled_cells(-20.0), 0);
        assert_eq!(filled_cells(50.0), 10);
        assert_eq!(filled_cells(250.0), BAR_CELLS);
    }

    #[test]
    fn test_draws_selected_result() {
        let text = draw_to_string(&RequestState::Succeeded(EvaluationResult {
            candidate_status: "Selected".to_string(),
            reason: "Solid match".to_string(),
            matched_skills: vec!["Rust".to_string(), "Docker".to_string()],
            skill_match_percentage: 75.0,
            experience: 4.0,
        }));

        assert!(text.contains("Decision: Selected (Recommended) +"));
        assert!(text.contains("Match Score: 75% [###############.....]"));
        assert!(text.contains("Matched Skills: [Rust] [Docker]"));
        assert!(text.contains("Years of Experience: 4 Verified Years"));
    }

    #[test]
    fn test_draws_placeholder_and_warning_bar() {
        let text = draw_to_string(&RequestState::Succeeded(EvaluationResult {
            candidate_status: "Rejected".to_string(),
            skill_match_percentage: 50.0,
            ..Default::default()
        }));

        assert!(text.contains("Decision: Rejected (Not Suitable) -"));
        assert!(text.contains("[==========..........]"));
        assert!(text.contains("Matched Skills: No skills matched directly."));
    }

    #[test]
    fn test_draws_busy_and_error_lines() {
        assert_eq!(draw_to_string(&RequestState::Pending), "[Analyzing Documents...]\n");
        assert_eq!(
            draw_to_string(&RequestState::Failed("Please upload both Resume and Job Description.".to_string())),
            "! Please upload both Resume and Job Description.\n"
        );
        assert_eq!(draw_to_string(&RequestState::Idle), "");
    }
}
