use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::voting::{closure, ranking, RankedOption};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub vote_type: VoteType,
    #[serde(default)]
    pub answers: Vec<AnswerOption>,
    #[serde(default)]
    pub desc: Option<String>,
    // Kept raw: a malformed date must leave the poll open, not fail the load.
    #[serde(default, deserialize_with = "deserialize_end_date")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub max_vote: Option<u32>,
    #[serde(default)]
    pub total_vote: Option<u32>,
    #[serde(default)]
    pub max_score: Option<u32>,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub vote_list: Vec<RecordedVote>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteType {
    #[default]
    SingleChoice,
    MultipleChoice,
    Score,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedVote {
    #[serde(default)]
    pub user_info: VoterInfo,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Who cast a vote, or who is looking at a poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterInfo {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
}

/// Accept the end date as a string or as epoch milliseconds (how stored
/// `Date`s come out of the document store). Any other shape is dropped.
fn deserialize_end_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => Some(raw),
        Some(Value::Number(ms)) => ms
            .as_i64()
            .or_else(|| ms.as_f64().map(|f| f as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.to_rfc3339()),
        _ => None,
    })
}

impl VoteType {
    pub fn is_score_mode(&self) -> bool {
        matches!(self, VoteType::Score)
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VoteType::SingleChoice => "single choice",
            VoteType::MultipleChoice => "multiple choice",
            VoteType::Score => "score",
        };
        f.write_str(name)
    }
}

impl VoterInfo {
    pub fn new(user_id: Option<&str>, ip: Option<&str>) -> Self {
        Self {
            user_id: user_id.map(str::to_string),
            ip: ip.map(str::to_string),
        }
    }

    // Empty strings are treated as missing
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|s| !s.is_empty())
    }

    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref().filter(|s| !s.is_empty())
    }
}

impl RecordedVote {
    pub fn by_user(user_id: &str) -> Self {
        Self {
            user_info: VoterInfo::new(Some(user_id), None),
            score: None,
        }
    }

    pub fn scored(user_id: &str, score: f64) -> Self {
        Self {
            user_info: VoterInfo::new(Some(user_id), None),
            score: Some(score),
        }
    }
}

impl AnswerOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            photo: None,
            vote_list: Vec::new(),
        }
    }

    pub fn with_id(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::new(label)
        }
    }

    /// Thumbnail variant of the photo reference: `a/b.jpg` becomes `a/b_thumb.jpg`.
    pub fn thumbnail_src(&self) -> Option<String> {
        let photo = self.photo.as_deref()?;
        match photo.rfind('.') {
            Some(dot) => Some(format!("{}_thumb{}", &photo[..dot], &photo[dot..])),
            None => Some(photo.to_string()),
        }
    }
}

impl Poll {
    pub fn new(title: String, options: Vec<String>, vote_type: VoteType) -> Self {
        let answers = options.into_iter().map(AnswerOption::new).collect();

        Self {
            id: Uuid::new_v4().to_string(),
            title,
            vote_type,
            answers,
            desc: None,
            end_date: None,
            max_vote: None,
            total_vote: None,
            max_score: None,
            is_private: false,
        }
    }

    /// Recorded vote total, falling back to counting the vote lists.
    pub fn total_votes(&self) -> u32 {
        self.total_vote.unwrap_or_else(|| {
            self.answers
                .iter()
                .map(|option| option.vote_list.len() as u32)
                .sum()
        })
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed_at(Utc::now())
    }

    pub fn is_closed_at(&self, now: DateTime<Utc>) -> bool {
        closure::is_closed_at(
            self.end_date.as_deref(),
            self.max_vote,
            Some(self.total_votes()),
            now,
        )
    }

    pub fn ranking(&self) -> Vec<RankedOption> {
        ranking::rank(&self.answers, self.vote_type.is_score_mode())
    }
}
