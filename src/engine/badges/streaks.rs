//! Streak badges: longest consecutive day, week, and month runs
//!
//! Unlike milestone badges, streaks award every threshold the run meets.
//! Runs are computed from the full history on demand; no streak state is
//! stored.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::calendar::{day_index, month_index, week_index};
use crate::catalog::badges::{DAILY_STREAK_TIERS, MONTHLY_STREAK_TIERS, WEEKLY_STREAK_TIERS};
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::store::StoreError;

/// Longest run of consecutive bucket indices in an ordered sequence.
///
/// Equal neighbors (several completions in one bucket) leave the run
/// untouched; a gap of exactly 1 extends it; anything larger resets to 1.
pub fn longest_run(indices: &[i64]) -> u32 {
    if indices.is_empty() {
        return 0;
    }
    let mut max_run = 1u32;
    let mut run = 1u32;
    for pair in indices.windows(2) {
        let gap = pair[1] - pair[0];
        if gap == 1 {
            run += 1;
        } else if gap > 1 {
            run = 1;
        }
        max_run = max_run.max(run);
    }
    max_run
}

fn bucket_indices(history: &[DateTime<Utc>], key: fn(DateTime<Utc>) -> i64) -> Vec<i64> {
    history.iter().map(|at| key(*at)).collect()
}

pub struct StreakBadges;

#[async_trait]
impl Evaluator for StreakBadges {
    fn name(&self) -> &'static str {
        "streaks"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let history: Vec<DateTime<Utc>> = ctx
            .facts
            .list_completions(ctx.user)
            .await?
            .into_iter()
            .map(|c| c.completed_at)
            .collect();
        if history.is_empty() {
            return Ok(vec![]);
        }

        let daily = longest_run(&bucket_indices(&history, day_index));
        let weekly = longest_run(&bucket_indices(&history, week_index));
        let monthly = longest_run(&bucket_indices(&history, month_index));

        let mut candidates = Vec::new();
        for (kind, run, tiers) in [
            ("daily", daily, DAILY_STREAK_TIERS),
            ("weekly", weekly, WEEKLY_STREAK_TIERS),
            ("monthly", monthly, MONTHLY_STREAK_TIERS),
        ] {
            // Every tier the run meets, not just the highest
            for threshold in tiers.iter().filter(|t| run >= **t) {
                candidates.push(Candidate::badge(format!("streak_{kind}_{threshold}")));
            }
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> i64 {
        day_index(Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap())
    }

    #[test]
    fn run_counts_consecutive_days() {
        let days = [
            day(2026, 3, 1),
            day(2026, 3, 2),
            day(2026, 3, 3),
            day(2026, 3, 10),
            day(2026, 3, 11),
        ];
        assert_eq!(longest_run(&days), 3);
    }

    #[test]
    fn same_day_repeats_do_not_break_a_run() {
        let days = [
            day(2026, 3, 1),
            day(2026, 3, 2),
            day(2026, 3, 2),
            day(2026, 3, 3),
        ];
        assert_eq!(longest_run(&days), 3);
    }

    #[test]
    fn two_day_gap_resets() {
        let days = [day(2026, 3, 1), day(2026, 3, 2), day(2026, 3, 5)];
        assert_eq!(longest_run(&days), 2);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(longest_run(&[]), 0);
        assert_eq!(longest_run(&[day(2026, 1, 1)]), 1);
    }

    #[test]
    fn weekly_run_spans_month_boundary() {
        // Mondays four weeks running, crossing March into April
        let weeks: Vec<i64> = [(3, 23), (3, 30), (4, 6), (4, 13)]
            .iter()
            .map(|(m, d)| week_index(Utc.with_ymd_and_hms(2026, *m, *d, 8, 0, 0).unwrap()))
            .collect();
        assert_eq!(longest_run(&weeks), 4);
    }

    #[test]
    fn monthly_run_spans_year_boundary() {
        let months: Vec<i64> = [(2025, 11), (2025, 12), (2026, 1)]
            .iter()
            .map(|(y, m)| month_index(Utc.with_ymd_and_hms(*y, *m, 15, 8, 0, 0).unwrap()))
            .collect();
        assert_eq!(longest_run(&months), 3);
    }
}
