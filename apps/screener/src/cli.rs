use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "screener", author, version, about = "Screen a resume against a job description", long_about = None)]
pub struct Cli {
    /// Evaluation service base address (overrides SCREENER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit a resume and a job description and show the verdict
    Evaluate(EvaluateArgs),
    /// Check that the evaluation service is up
    Health,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Candidate resume (PDF)
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Job description (PDF)
    #[arg(long)]
    pub jd: Option<PathBuf>,

    /// Print the view as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_evaluate_with_both_files() {
        let cli = Cli::try_parse_from([
            "screener", "evaluate", "--resume", "cv.pdf", "--jd", "role.pdf", "--json",
        ])
        .unwrap();

        match cli.command {
            Command::Evaluate(args) => {
                assert_eq!(args.resume, Some(PathBuf::from("cv.pdf")));
                assert_eq!(args.jd, Some(PathBuf::from("role.pdf")));
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_files_are_optional() {
        let cli = Cli::try_parse_from(["screener", "evaluate", "--resume", "cv.pdf"]).unwrap();
        match cli.command {
            Command::Evaluate(args) => assert!(args.jd.is_none()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_api_url_is_global() {
        let cli = Cli::try_parse_from(["screener", "health", "--api-url", "http://10.0.0.5:8000"])
            .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert!(matches!(cli.command, Command::Health));
    }
}
