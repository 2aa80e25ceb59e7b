use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERR ",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        }
    }
}

/// A single report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFinding {
    pub severity: Severity,
    pub message: String,
}

impl ScanFinding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

impl fmt::Display for ScanFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.message)
    }
}

/// Append-only, ordered list of findings owned by a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FindingLog {
    entries: Vec<ScanFinding>,
}

impl FindingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: ScanFinding) {
        self.entries.push(finding);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScanFinding> {
        self.entries.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ScanFinding> {
        self.entries.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl<'a> IntoIterator for &'a FindingLog {
    type Item = &'a ScanFinding;
    type IntoIter = std::slice::Iter<'a, ScanFinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
