use serde::{Deserialize, Serialize};

/// The verdict returned by `POST /screening/`.
///
/// Deserialization is lenient: a missing field falls back to its empty value
/// instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationResult {
    pub candidate_status: String,
    pub reason: String,
    pub matched_skills: Vec<String>,
    /// Nominally 0 to 100. Passed through unclamped.
    pub skill_match_percentage: f64,
    /// Years.
    pub experience: f64,
}

pub const SELECTED_STATUS: &str = "Selected";

impl EvaluationResult {
    /// Binary: anything other than exactly "Selected" counts as not selected.
    pub fn is_selected(&self) -> bool {
        self.candidate_status == SELECTED_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_full_payload() {
        let body = json!({
            "candidate_status": "Selected",
            "reason": "Strong Rust background",
            "matched_skills": ["Rust", "Tokio", "SQL"],
            "skill_match_percentage": 82.5,
            "experience": 6
        });

        let result: EvaluationResult = serde_json::from_value(body).unwrap();
        assert!(result.is_selected());
        assert_eq!(result.matched_skills, vec!["Rust", "Tokio", "SQL"]);
        assert_eq!(result.skill_match_percentage, 82.5);
        assert_eq!(result.experience, 6.0);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let result: EvaluationResult =
            serde_json::from_value(json!({ "candidate_status": "Rejected" })).unwrap();
        assert!(!result.is_selected());
        assert_eq!(result.reason, "");
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.skill_match_percentage, 0.0);
    }

    #[test]
    fn test_status_is_binary_not_enumerated() {
        for status in ["Rejected", "Pending Review", "selected", ""] {
            let result = EvaluationResult {
                candidate_status: status.to_string(),
                ..Default::default()
            };
            assert!(!result.is_selected(), "{status:?} must not count as selected");
        }
    }

    #[test]
    fn test_out_of_range_percentage_passes_through() {
        let result: EvaluationResult =
            serde_json::from_value(json!({ "skill_match_percentage": 140 })).unwrap();
        assert_eq!(result.skill_match_percentage, 140.0);
    }
}
