//! A search provider that replays a fixed script of responses.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::error::Result;
use crate::search::{DateRestrict, ResultItem, SearchProvider, SearchRequest};

/// Owned copy of a request the provider received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub query: String,
    pub page_size: u32,
    pub start: u32,
    pub date_restrict: Option<DateRestrict>,
}

/// Answers each call with the next scripted response, then with empty pages.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<Vec<ResultItem>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Result<Vec<ResultItem>>>) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

impl SearchProvider for ScriptedProvider {
    fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<ResultItem>> {
        self.requests.lock().push(RecordedRequest {
            query: request.query.to_string(),
            page_size: request.page_size,
            start: request.start,
            date_restrict: request.date_restrict,
        });
        self.script.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
