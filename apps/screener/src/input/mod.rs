//! Holds the two document selections of a session.
//!
//! Both setters are total: each call replaces the previous selection, `None`
//! clears it. Nothing here validates; presence is checked at submit time.

use tracing::{debug, warn};

use crate::models::FileSelection;

#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    resume: Option<FileSelection>,
    jd: Option<FileSelection>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resume(&mut self, file: Option<FileSelection>) {
        log_selection("resume", file.as_ref());
        self.resume = file;
    }

    pub fn set_jd(&mut self, file: Option<FileSelection>) {
        log_selection("jd", file.as_ref());
        self.jd = file;
    }

    pub fn resume(&self) -> Option<&FileSelection> {
        self.resume.as_ref()
    }

    pub fn jd(&self) -> Option<&FileSelection> {
        self.jd.as_ref()
    }

    /// Both documents, or `None` if either is missing.
    pub fn both(&self) -> Option<(&FileSelection, &FileSelection)> {
        Some((self.resume()?, self.jd()?))
    }
}

fn log_selection(slot: &str, file: Option<&FileSelection>) {
    match file {
        Some(f) if !f.looks_like_pdf() => {
            warn!("{slot}: '{}' is not a PDF; sending it anyway", f.file_name)
        }
        Some(f) => debug!("{slot}: selected '{}' ({} bytes)", f.file_name, f.bytes.len()),
        None => debug!("{slot}: selection cleared"),
    }
}
