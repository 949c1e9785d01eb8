//! Poll tallying: ranks answer options, decides when polls close and finds
//! the option a visitor already voted for.

pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod snapshot;
pub mod tasks;
pub mod voting;

pub use error::PollError;
pub use listing::{paginate, Page};
pub use models::{AnswerOption, Poll, RecordedVote, VoteType, VoterInfo};
pub use voting::closure::{is_closed, is_closed_at};
pub use voting::ranking::rank;
pub use voting::{PollResults, RankedOption};
