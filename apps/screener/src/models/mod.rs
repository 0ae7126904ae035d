pub mod evaluation;
pub mod selection;

pub use evaluation::EvaluationResult;
pub use selection::FileSelection;
