#![allow(dead_code)]
use async_trait::async_trait;
use nsaudit_application::ports::DnsExchange;
use nsaudit_domain::{
    DomainError, QueryOutcome, Question, RecordData, RecordType, ResourceRecord, ResponseStatus,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Answers TXT questions from a fixed table; everything else is NXDOMAIN.
#[derive(Clone, Default)]
pub struct TxtExchange {
    records: Arc<Mutex<HashMap<String, String>>>,
    asked: Arc<Mutex<Vec<(String, String)>>>,
}

impl TxtExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_txt(self, name: &str, text: &str) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(name.to_string(), text.to_string());
        self
    }

    /// (question name, server) pairs in the order they were asked.
    pub fn asked(&self) -> Vec<(String, String)> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsExchange for TxtExchange {
    async fn exchange(
        &self,
        question: &Question,
        server: &str,
        _secure: bool,
    ) -> Result<QueryOutcome, DomainError> {
        self.asked
            .lock()
            .unwrap()
            .push((question.name().to_string(), server.to_string()));

        let text = match question.record_type() {
            RecordType::TXT => self.records.lock().unwrap().get(question.name()).cloned(),
            _ => None,
        };

        let outcome = match text {
            Some(text) => QueryOutcome::new(
                vec![ResourceRecord::new(question.name(), 14400, RecordData::TXT(text))],
                Duration::from_millis(5),
                ResponseStatus::NoError,
            ),
            None => QueryOutcome::new(vec![], Duration::from_millis(5), ResponseStatus::NxDomain),
        };
        Ok(outcome)
    }
}
