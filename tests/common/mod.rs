// Shared test helpers for fragdown.

use std::fs;
use std::path::Path;

use fragdown::{Options, UnclosedTags};
use serde::Deserialize;

/// One data-driven conversion case.
#[derive(Debug, Deserialize)]
pub struct Case {
    pub name: String,
    pub html: String,
    /// Expected Markdown. Absent when the case must fail.
    #[serde(default)]
    pub markdown: Option<String>,
    /// Expected error kind (`"unterminated"`, `"mismatch"`, `"unclosed"`).
    #[serde(default)]
    pub error: Option<String>,
    /// Reject unclosed tags instead of keeping them.
    #[serde(default)]
    pub strict: bool,
}

impl Case {
    pub fn options(&self) -> Options {
        let unclosed = if self.strict {
            UnclosedTags::Error
        } else {
            UnclosedTags::Ignore
        };
        Options::new().with_unclosed_tags(unclosed)
    }
}

/// Load every case from a JSON file under `test-fixtures/`.
pub fn load_cases(file: &str) -> Vec<Case> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(file);
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Missing fixture file: {}", path.display()));
    serde_json::from_str(&json).unwrap_or_else(|e| panic!("Bad fixture file {file}: {e}"))
}
