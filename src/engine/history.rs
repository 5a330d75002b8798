use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::race::RaceResult;
use crate::engine::config::DEFAULT_HISTORY_LIMIT;

/// Ограниченная история итогов гонок: хранятся только последние `limit` записей.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultHistory {
    limit: usize,
    entries: VecDeque<RaceResult>,
}

impl ResultHistory {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            entries: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
        }
    }

    /// Добавить итог; самые старые записи вытесняются.
    pub fn push(&mut self, result: RaceResult) {
        self.entries.push_back(result);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn last(&self) -> Option<&RaceResult> {
        self.entries.back()
    }

    /// От старых к новым.
    pub fn iter(&self) -> impl Iterator<Item = &RaceResult> {
        self.entries.iter()
    }
}
