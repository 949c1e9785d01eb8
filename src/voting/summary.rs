use crate::models::Poll;
use crate::voting::PollResults;
use std::collections::HashMap;

pub fn calculate_results(poll: &Poll) -> PollResults {
    let ranked = poll.ranking();
    let unit = if poll.vote_type.is_score_mode() { "points" } else { "votes" };

    // Join ranked entries back to their options; with duplicate ids the last option wins.
    // Every ranked id comes from `poll.answers`, so indexing by it cannot miss.
    let labels: HashMap<&str, &str> = poll
        .answers
        .iter()
        .map(|option| (option.id.as_str(), option.label.as_str()))
        .collect();

    let mut summary = String::new();
    summary.push_str(&format!("**{}** ({})", poll.title, poll.vote_type));
    if poll.is_closed() {
        summary.push_str(" [Closed]");
    }
    summary.push_str("\n\n");

    let total_score: f64 = ranked.iter().map(|r| r.score).sum();

    // If no votes were cast
    if total_score == 0.0 {
        for entry in &ranked {
            summary.push_str(&format!(
                "{}. {}: 0 {} (0%)\n",
                entry.rank,
                labels[entry.id.as_str()],
                unit
            ));
        }
        summary.push_str("\nNo votes were cast in this poll.");

        return PollResults {
            winner: "No votes were cast".to_string(),
            summary,
            winner_id: String::new(),
            raw_results: ranked,
        };
    }

    let winner_id = ranked[0].id.clone();
    let winner_name = labels[winner_id.as_str()].to_string();

    for entry in &ranked {
        let option_name = labels[entry.id.as_str()];

        // Format the line differently for the leader
        let line = if entry.rank == 1 {
            format!("{}. **{}**: {} {} ({}%)", entry.rank, option_name, entry.score, unit, entry.percent)
        } else {
            format!("{}. {}: {} {} ({}%)", entry.rank, option_name, entry.score, unit, entry.percent)
        };

        summary.push_str(&line);
        summary.push('\n');
    }

    summary.push_str(&format!("\n{} votes recorded.", poll.total_votes()));

    PollResults {
        winner: winner_name,
        summary,
        winner_id,
        raw_results: ranked,
    }
}
