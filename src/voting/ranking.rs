use crate::models::AnswerOption;
use crate::voting::RankedOption;

/// Rank a poll's options by score, highest first.
///
/// In score mode an option's score is the sum of its votes' `score` fields
/// (missing scores count as 0); otherwise it is the number of votes.
/// Ranks run 1..=N with no gaps, even for tied scores; equal scores keep
/// their input order. Percentages are rounded half away from zero and are
/// all 0 when nobody has scored anything, so they need not add up to 100.
///
/// The result is in ranked order, not input order. Callers that render
/// options in their original order join back by id.
pub fn rank(options: &[AnswerOption], score_mode: bool) -> Vec<RankedOption> {
    let mut ranked: Vec<RankedOption> = options
        .iter()
        .map(|option| RankedOption {
            id: option.id.clone(),
            score: option_score(option, score_mode),
            rank: 0, // Will set after sorting
            percent: 0,
        })
        .collect();

    let total_score: f64 = ranked.iter().map(|r| r.score).sum();

    // Sort by score (highest first)
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = i + 1;
        entry.percent = percent_of(entry.score, total_score);
    }

    ranked
}

fn option_score(option: &AnswerOption, score_mode: bool) -> f64 {
    if score_mode {
        option
            .vote_list
            .iter()
            .map(|vote| vote.score.unwrap_or(0.0))
            .sum()
    } else {
        option.vote_list.len() as f64
    }
}

fn percent_of(score: f64, total_score: f64) -> i64 {
    if total_score == 0.0 {
        return 0;
    }
    (score * 100.0 / total_score).round() as i64
}
