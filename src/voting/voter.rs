use std::collections::HashMap;

use crate::models::{AnswerOption, VoterInfo};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum VoterKey {
    User(String),
    Ip(String),
}

/// Lookup from voter identity to the option that voter picked.
///
/// Built once per poll view instead of rescanning every vote list for each
/// lookup. When the same voter shows up more than once, the vote seen first
/// in option order wins.
#[derive(Debug, Default)]
pub struct VoterIndex {
    // key -> (position in iteration order, option id)
    entries: HashMap<VoterKey, (usize, String)>,
}

impl VoterIndex {
    pub fn build(options: &[AnswerOption]) -> Self {
        let mut entries = HashMap::new();
        let mut position = 0;

        for option in options {
            for vote in &option.vote_list {
                let info = &vote.user_info;
                if let Some(ip) = info.ip() {
                    entries
                        .entry(VoterKey::Ip(ip.to_string()))
                        .or_insert_with(|| (position, option.id.clone()));
                }
                if let Some(user_id) = info.user_id() {
                    entries
                        .entry(VoterKey::User(user_id.to_string()))
                        .or_insert_with(|| (position, option.id.clone()));
                }
                position += 1;
            }
        }

        Self { entries }
    }

    /// The option holding the earliest vote that matches either the viewer's
    /// IP or user id.
    pub fn find(&self, viewer: &VoterInfo) -> Option<&str> {
        let by_ip = viewer
            .ip()
            .and_then(|ip| self.entries.get(&VoterKey::Ip(ip.to_string())));
        let by_user = viewer
            .user_id()
            .and_then(|id| self.entries.get(&VoterKey::User(id.to_string())));

        [by_ip, by_user]
            .into_iter()
            .flatten()
            .min_by_key(|(position, _)| *position)
            .map(|(_, option_id)| option_id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One-off lookup of the option a viewer already voted for.
pub fn find_user_checked(options: &[AnswerOption], viewer: &VoterInfo) -> Option<String> {
    VoterIndex::build(options).find(viewer).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordedVote;

    fn vote(user_id: Option<&str>, ip: Option<&str>) -> RecordedVote {
        RecordedVote {
            user_info: VoterInfo::new(user_id, ip),
            score: None,
        }
    }

    fn option(id: &str, votes: Vec<RecordedVote>) -> AnswerOption {
        let mut option = AnswerOption::with_id(id, id);
        option.vote_list = votes;
        option
    }

    #[test]
    fn finds_by_user_id() {
        let options = vec![
            option("a", vec![vote(Some("u1"), None)]),
            option("b", vec![vote(Some("u2"), None)]),
        ];
        let viewer = VoterInfo::new(Some("u2"), None);
        assert_eq!(find_user_checked(&options, &viewer).as_deref(), Some("b"));
    }

    #[test]
    fn finds_by_ip_when_logged_out() {
        let options = vec![
            option("a", vec![vote(None, Some("1.1.1.1"))]),
            option("b", vec![vote(Some("u2"), Some("2.2.2.2"))]),
        ];
        let viewer = VoterInfo::new(None, Some("2.2.2.2"));
        assert_eq!(find_user_checked(&options, &viewer).as_deref(), Some("b"));
    }

    #[test]
    fn unknown_viewer_finds_nothing() {
        let options = vec![option("a", vec![vote(Some("u1"), Some("1.1.1.1"))])];
        assert_eq!(find_user_checked(&options, &VoterInfo::new(Some("u9"), Some("9.9.9.9"))), None);
        assert_eq!(find_user_checked(&options, &VoterInfo::default()), None);
    }

    #[test]
    fn empty_strings_never_match() {
        let options = vec![option("a", vec![vote(Some(""), Some(""))])];
        let index = VoterIndex::build(&options);
        assert!(index.is_empty());
        assert_eq!(index.find(&VoterInfo::new(Some(""), Some(""))), None);
    }

    #[test]
    fn first_vote_in_option_order_wins_for_duplicates() {
        let options = vec![
            option("a", vec![vote(Some("u3"), None), vote(Some("u1"), None)]),
            option("b", vec![vote(Some("u1"), None)]),
        ];
        let index = VoterIndex::build(&options);
        assert_eq!(index.find(&VoterInfo::new(Some("u1"), None)), Some("a"));
    }

    #[test]
    fn earliest_of_ip_and_user_matches_wins() {
        // The viewer's IP matches a vote in "a"; their user id matches a later vote in "b".
        let options = vec![
            option("a", vec![vote(Some("other"), Some("5.5.5.5"))]),
            option("b", vec![vote(Some("me"), Some("6.6.6.6"))]),
        ];
        let viewer = VoterInfo::new(Some("me"), Some("5.5.5.5"));
        assert_eq!(find_user_checked(&options, &viewer).as_deref(), Some("a"));

        let reversed: Vec<AnswerOption> = options.into_iter().rev().collect();
        assert_eq!(find_user_checked(&reversed, &viewer).as_deref(), Some("b"));
    }
}
