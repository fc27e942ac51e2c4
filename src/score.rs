#![cfg(feature = "std")]

//! Final-score hand-off to the platform's persistence layer.
//!
//! The scoring formula lives outside this crate; the record is carried
//! opaquely to whatever sink the request layer wires in.

use serde::{Deserialize, Serialize};

/// Score record for a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub game_id: u64,
    /// Unix epoch seconds.
    pub obtained_at: u64,
    pub right_answers: u32,
    pub wrong_answers: u32,
    /// Seconds the match took.
    pub time_taken: u32,
    pub user_id: u64,
    pub stars: u8,
}

/// Persistence collaborator for finished matches.
pub trait ScoreSink {
    fn record(&mut self, score: &ScoreRecord) -> anyhow::Result<()>;
}

/// In-memory sink for tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<ScoreRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }
}

impl ScoreSink for MemorySink {
    fn record(&mut self, score: &ScoreRecord) -> anyhow::Result<()> {
        self.records.push(score.clone());
        Ok(())
    }
}
