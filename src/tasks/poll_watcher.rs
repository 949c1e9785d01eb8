use crate::config::Config;
use crate::models::Poll;
use crate::snapshot::load_polls_async;
use chrono::{DateTime, Utc};
use log::{error, info};
use std::collections::HashSet;
use tokio::time::interval;

/// Periodically reload the snapshot and log polls as they close.
///
/// Only observes: closure is re-evaluated from each snapshot and nothing is
/// written back. The set of already-reported polls lives in this task.
pub async fn watch_polls(config: Config) {
    info!(
        "Watching {} for closed polls every {}s",
        config.snapshot_path.display(),
        config.check_interval.as_secs()
    );
    let mut interval = interval(config.check_interval);
    let mut reported: HashSet<String> = HashSet::new();

    loop {
        interval.tick().await; // Wait for the next interval tick
        let now = Utc::now();

        match load_polls_async(&config.snapshot_path).await {
            Ok(polls) => {
                forget_missing(&mut reported, &polls);
                let closed = newly_closed(&polls, &reported, now);
                if !closed.is_empty() {
                    info!("Found {} newly closed poll(s).", closed.len());
                }
                for poll in closed {
                    info!(
                        "Poll {} ({}) is closed with {} votes",
                        poll.id,
                        poll.title,
                        poll.total_votes()
                    );
                    reported.insert(poll.id.clone());
                }
            }
            Err(e) => {
                error!("Failed to load poll snapshot: {}", e);
            }
        }
    }
}

/// Drop reported ids whose polls are no longer in the snapshot.
pub fn forget_missing(reported: &mut HashSet<String>, polls: &[Poll]) {
    let present: HashSet<&str> = polls.iter().map(|poll| poll.id.as_str()).collect();
    reported.retain(|id| present.contains(id.as_str()));
}

/// Polls closed at `now` that have not been reported yet, in snapshot order.
pub fn newly_closed<'a>(polls: &'a [Poll], reported: &HashSet<String>, now: DateTime<Utc>) -> Vec<&'a Poll> {
    polls
        .iter()
        .filter(|poll| !reported.contains(&poll.id))
        .filter(|poll| poll.is_closed_at(now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordedVote, VoteType};
    use chrono::TimeZone;

    fn poll(id: &str, end_date: Option<&str>, max_vote: Option<u32>, votes: usize) -> Poll {
        let mut poll = Poll::new(id.to_string(), vec!["a".into()], VoteType::SingleChoice);
        poll.id = id.to_string();
        poll.end_date = end_date.map(str::to_string);
        poll.max_vote = max_vote;
        for i in 0..votes {
            poll.answers[0].vote_list.push(RecordedVote::by_user(&format!("u{}", i)));
        }
        poll
    }

    #[test]
    fn reports_each_closed_poll_once() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let polls = vec![
            poll("expired", Some("2024-01-01"), None, 0),
            poll("running", Some("2024-02-01"), None, 0),
            poll("capped", None, Some(2), 2),
            poll("no-limits", None, None, 5),
        ];

        let mut reported = HashSet::new();
        let first: Vec<&str> = newly_closed(&polls, &reported, now).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(first, vec!["expired", "capped"]);

        reported.extend(first.iter().map(|id| id.to_string()));
        assert!(newly_closed(&polls, &reported, now).is_empty());

        let later = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let second: Vec<&str> = newly_closed(&polls, &reported, later).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(second, vec!["running"]);
    }

    #[test]
    fn forgets_polls_that_left_the_snapshot() {
        let polls = vec![poll("kept", None, None, 0)];
        let mut reported: HashSet<String> = ["kept", "deleted"].iter().map(|id| id.to_string()).collect();

        forget_missing(&mut reported, &polls);

        assert_eq!(reported.len(), 1);
        assert!(reported.contains("kept"));

        forget_missing(&mut reported, &[]);
        assert!(reported.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn watcher_survives_missing_snapshot() {
        let config = Config {
            snapshot_path: std::env::temp_dir().join(format!("poll-tally-absent-{}.json", uuid::Uuid::new_v4())),
            check_interval: std::time::Duration::from_secs(1),
            watch: true,
        };

        let handle = tokio::spawn(watch_polls(config));
        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        assert!(!handle.is_finished());
        handle.abort();
    }
}
