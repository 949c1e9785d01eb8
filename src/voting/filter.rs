use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::models::Poll;
use crate::voting::closure::parse_end_date;

/// List filters offered on the poll browsing pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PollFilter {
    #[default]
    All,
    Active,
    Closed,
    Unvoted,
}

impl FromStr for PollFilter {
    type Err = std::convert::Infallible;

    // Unknown filters fall back to showing everything
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "active" => PollFilter::Active,
            "closed" => PollFilter::Closed,
            "unvote" | "unvoted" => PollFilter::Unvoted,
            _ => PollFilter::All,
        })
    }
}

impl PollFilter {
    /// Only the end date and vote total are consulted; a reached vote cap
    /// does not move a poll into `Closed` here.
    pub fn matches_at(&self, poll: &Poll, now: DateTime<Utc>) -> bool {
        let end = poll.end_date.as_deref().and_then(parse_end_date);
        match self {
            PollFilter::All => true,
            PollFilter::Active => end.is_none_or(|end| end >= now),
            PollFilter::Closed => end.is_some_and(|end| end < now),
            PollFilter::Unvoted => poll.total_votes() == 0,
        }
    }
}

pub fn filter_polls(polls: &[Poll], filter: PollFilter, now: DateTime<Utc>) -> Vec<&Poll> {
    polls.iter().filter(|poll| filter.matches_at(poll, now)).collect()
}
