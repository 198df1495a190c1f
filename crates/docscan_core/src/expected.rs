use serde::{Deserialize, Serialize};

/// One abbreviated-code entry: the index table glyph remainder and the full
/// status names accepted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub code: String,
    pub statuses: Vec<String>,
}

/// Mapping from the abbreviated status code shown in the PEP index table to
/// the set of full status names considered valid for that code.
///
/// This is policy data, not logic: it is loaded from configuration (with the
/// vocabulary below as the built-in default) and read-only during a run. Entry
/// order is significant — the output ordering of the tally follows the first
/// appearance of each status name across entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedStatusMap {
    entries: Vec<StatusEntry>,
}

impl ExpectedStatusMap {
    pub fn new(entries: Vec<StatusEntry>) -> Self {
        Self { entries }
    }

    /// The default PEP status vocabulary. The empty code is a real key: index
    /// rows whose status glyph carries no status character are draft-class.
    pub fn builtin() -> Self {
        fn entry(code: &str, statuses: &[&str]) -> StatusEntry {
            StatusEntry {
                code: code.to_string(),
                statuses: statuses.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self::new(vec![
            entry("A", &["Active", "Accepted"]),
            entry("D", &["Deferred"]),
            entry("F", &["Final"]),
            entry("P", &["Provisional"]),
            entry("R", &["Rejected"]),
            entry("S", &["Superseded"]),
            entry("W", &["Withdrawn"]),
            entry("", &["Draft", "Active"]),
        ])
    }

    /// Acceptable full status names for an abbreviated code, or `None` when
    /// the code is not part of the vocabulary.
    pub fn expected_for(&self, code: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.statuses.as_slice())
    }

    /// All status names in declaration order, deduplicated on first
    /// appearance. This fixes the row order of the rendered tally.
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            for status in &entry.statuses {
                if !names.contains(&status.as_str()) {
                    names.push(status);
                }
            }
        }
        names
    }
}

impl Default for ExpectedStatusMap {
    fn default() -> Self {
        Self::builtin()
    }
}
