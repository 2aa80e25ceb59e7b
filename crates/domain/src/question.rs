use super::domain_name::fqdn;
use super::RecordType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestionClass {
    #[default]
    Internet,
}

/// The single entry of an outbound query's question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    name: Arc<str>,
    record_type: RecordType,
    class: QuestionClass,
}

impl Question {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            name: Arc::from(fqdn(name)),
            record_type,
            class: QuestionClass::Internet,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn class(&self) -> QuestionClass {
        self.class
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IN {}", self.name, self.record_type)
    }
}
