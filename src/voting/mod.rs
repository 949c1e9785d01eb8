pub mod closure;
pub mod filter;
pub mod ranking;
pub mod summary;
pub mod voter;

use serde::Serialize;

// Generic structure for poll results
#[derive(Debug, Clone)]
pub struct PollResults {
    pub winner: String,        // Label of the leading option
    pub summary: String,       // Detailed results as formatted text
    pub winner_id: String,     // ID of the leading option, empty when nobody voted
    pub raw_results: Vec<RankedOption>, // Ranked view of every option
}

/// One option's place in the ranked view. Derived on every evaluation and
/// never written back to the poll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedOption {
    pub id: String,
    pub score: f64,
    pub rank: usize,
    pub percent: i64,
}
