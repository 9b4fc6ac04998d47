//! Stub response generator.

use async_trait::async_trait;

use super::ports::{ResponderError, ResponderPort};

/// Deterministic placeholder for a real inference client.
///
/// Produces the same response for the same query every time, by prefixing a
/// fixed marker. Kept behind [`ResponderPort`] so a real client can replace
/// it without touching the store's write/read contract.
#[derive(Debug, Clone, Default)]
pub struct MockResponder;

impl MockResponder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponderPort for MockResponder {
    async fn answer(&self, query: &str) -> Result<String, ResponderError> {
        Ok(format!("LLM processed query: {query}"))
    }
}
