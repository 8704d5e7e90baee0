//! Calendar arithmetic for badge evaluation
//!
//! All bucketing uses UTC so a completion lands in the same day, week, and
//! season regardless of where it was logged from.

use chrono::{DateTime, Datelike, Utc};

/// One of the four season buckets used for season badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }

    /// Season for a UTC month (1-12). Winter wraps the year boundary.
    pub fn from_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Self::Winter,
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            _ => Self::Autumn,
        }
    }

    pub fn all() -> [Season; 4] {
        [Self::Winter, Self::Spring, Self::Summer, Self::Autumn]
    }
}

/// Season-year a season badge id is keyed on.
///
/// Winter spans the calendar boundary: any evaluation before December
/// attributes the winter bucket to the previous year. Keyed off the
/// evaluation instant, not the completion timestamps — inherited behavior,
/// see DESIGN.md.
pub fn season_year(season: Season, now: DateTime<Utc>) -> i32 {
    if season == Season::Winter && now.month() < 12 {
        now.year() - 1
    } else {
        now.year()
    }
}

/// Day index for consecutive-day arithmetic: calendar days differ by 1.
pub fn day_index(at: DateTime<Utc>) -> i64 {
    i64::from(at.date_naive().num_days_from_ce())
}

/// Monday-start week index: consecutive weeks differ by 1.
///
/// Day 1 of the proleptic Gregorian calendar is a Monday, so aligning on
/// `days - 1` puts every Monday at the start of a bucket.
pub fn week_index(at: DateTime<Utc>) -> i64 {
    (day_index(at) - 1).div_euclid(7)
}

/// Month index for consecutive-month arithmetic: adjacent months differ by 1.
pub fn month_index(at: DateTime<Utc>) -> i64 {
    i64::from(at.year()) * 12 + i64::from(at.month0())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn seasons_from_months() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(9), Season::Autumn);
        assert_eq!(Season::from_month(11), Season::Autumn);
    }

    #[test]
    fn winter_season_year_follows_evaluation_time() {
        // Evaluated before December: winter belongs to the previous year
        assert_eq!(season_year(Season::Winter, utc(2026, 11, 1)), 2025);
        // Evaluated in December: winter belongs to the current year
        assert_eq!(season_year(Season::Winter, utc(2026, 12, 15)), 2026);
        // Other seasons always use the calendar year
        assert_eq!(season_year(Season::Summer, utc(2026, 11, 1)), 2026);
        assert_eq!(season_year(Season::Autumn, utc(2026, 12, 15)), 2026);
    }

    #[test]
    fn day_index_is_consecutive_across_month_boundary() {
        assert_eq!(day_index(utc(2026, 3, 1)) - day_index(utc(2026, 2, 28)), 1);
        assert_eq!(day_index(utc(2025, 1, 1)) - day_index(utc(2024, 12, 31)), 1);
    }

    #[test]
    fn week_index_is_monday_aligned() {
        // 2024-01-01 was a Monday
        let monday = utc(2024, 1, 1);
        let sunday = utc(2024, 1, 7);
        let next_monday = utc(2024, 1, 8);
        assert_eq!(week_index(monday), week_index(sunday));
        assert_eq!(week_index(next_monday), week_index(monday) + 1);
    }

    #[test]
    fn month_index_spans_year_boundary() {
        assert_eq!(
            month_index(utc(2025, 1, 10)) - month_index(utc(2024, 12, 20)),
            1
        );
    }
}
