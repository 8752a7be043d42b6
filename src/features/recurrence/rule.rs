//! Recurrence rule types.
//!
//! A rule is the abstract repetition pattern of a parsed phrase, independent
//! of any concrete start date. Frequency-specific fields live on the variant
//! that uses them, so an ordinal can only exist on a monthly rule.

use chrono::{NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use crate::core::calendar::{nth_weekday_of_month, ordinal_suffix, weekday_index};

/// Repetition frequency of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    /// Repeats every `interval` days.
    Daily,
    /// Repeats on a set of weekdays every `interval` weeks.
    Weekly,
    /// Repeats once every `interval` months.
    Monthly,
}

impl std::fmt::Display for RecurrenceFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        })
    }
}

/// Which day of the month a monthly rule lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonthlyPattern {
    /// The `ordinal`-th `weekday` of the month ("first Friday").
    OrdinalWeekday {
        /// 1..=5
        ordinal: u8,
        #[serde(serialize_with = "serialize_weekday")]
        weekday: Weekday,
    },
    /// A fixed day of the month ("the 3rd").
    DayOfMonth {
        /// 1..=31
        day: u32,
    },
}

impl MonthlyPattern {
    /// Resolve the pattern inside a given month.
    ///
    /// Returns `None` for months that have no such day, e.g. a fifth Friday
    /// in a four-Friday month or the 31st of April.
    #[must_use]
    pub fn resolve_in(&self, year: i32, month: u32) -> Option<NaiveDate> {
        match *self {
            Self::OrdinalWeekday { ordinal, weekday } => {
                nth_weekday_of_month(year, month, weekday, ordinal)
            },
            Self::DayOfMonth { day } => NaiveDate::from_ymd_opt(year, month, day),
        }
    }
}

/// A recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "frequency", rename_all = "lowercase")]
pub enum RecurrenceRule {
    /// Every `interval` days.
    Daily {
        /// Days between occurrences.
        interval: u32,
    },
    /// On each of `days`, every `interval` weeks.
    Weekly {
        /// Weeks between active weeks.
        interval: u32,
        /// Weekdays in the order they were written; treated as a set.
        #[serde(rename = "daysOfWeek", serialize_with = "serialize_weekdays")]
        days: Vec<Weekday>,
    },
    /// Once per month, every `interval` months.
    Monthly {
        /// Months between occurrences.
        interval: u32,
        /// Day selection within each month.
        pattern: MonthlyPattern,
    },
}

const WORKWEEK: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

impl RecurrenceRule {
    /// Every `interval` days.
    #[must_use]
    pub fn daily(interval: u32) -> Self {
        Self::Daily {
            interval: interval.max(1),
        }
    }

    /// Weekly on the given days, keeping first-seen order and dropping repeats.
    #[must_use]
    pub fn weekly(interval: u32, days: &[Weekday]) -> Self {
        let mut unique: Vec<Weekday> = Vec::with_capacity(days.len());
        for day in days {
            if !unique.contains(day) {
                unique.push(*day);
            }
        }
        Self::Weekly {
            interval: interval.max(1),
            days: unique,
        }
    }

    /// Monday through Friday.
    #[must_use]
    pub fn workweek() -> Self {
        Self::weekly(1, &WORKWEEK)
    }

    /// Saturday and Sunday.
    #[must_use]
    pub fn weekend() -> Self {
        Self::weekly(1, &WEEKEND)
    }

    /// The `ordinal`-th `weekday` of every `interval` months.
    #[must_use]
    pub fn monthly_on_weekday(interval: u32, ordinal: u8, weekday: Weekday) -> Self {
        Self::Monthly {
            interval: interval.max(1),
            pattern: MonthlyPattern::OrdinalWeekday {
                ordinal: ordinal.clamp(1, 5),
                weekday,
            },
        }
    }

    /// A fixed day of every `interval` months.
    #[must_use]
    pub fn monthly_on_day(interval: u32, day: u32) -> Self {
        Self::Monthly {
            interval: interval.max(1),
            pattern: MonthlyPattern::DayOfMonth {
                day: day.clamp(1, 31),
            },
        }
    }

    /// The rule's frequency.
    #[must_use]
    pub const fn frequency(&self) -> RecurrenceFrequency {
        match self {
            Self::Daily { .. } => RecurrenceFrequency::Daily,
            Self::Weekly { .. } => RecurrenceFrequency::Weekly,
            Self::Monthly { .. } => RecurrenceFrequency::Monthly,
        }
    }

    /// Interval between repetitions, never below 1.
    #[must_use]
    pub fn interval(&self) -> u32 {
        match self {
            Self::Daily { interval } | Self::Weekly { interval, .. } | Self::Monthly { interval, .. } => {
                (*interval).max(1)
            },
        }
    }

    /// Weekdays the rule is constrained to, in rule order.
    #[must_use]
    pub fn days_of_week(&self) -> Vec<Weekday> {
        match self {
            Self::Weekly { days, .. } => days.clone(),
            Self::Monthly {
                pattern: MonthlyPattern::OrdinalWeekday { weekday, .. },
                ..
            } => vec![*weekday],
            Self::Daily { .. }
            | Self::Monthly {
                pattern: MonthlyPattern::DayOfMonth { .. },
                ..
            } => Vec::new(),
        }
    }

    /// Ordinal of a monthly ordinal-weekday rule.
    #[must_use]
    pub const fn ordinal(&self) -> Option<u8> {
        match self {
            Self::Monthly {
                pattern: MonthlyPattern::OrdinalWeekday { ordinal, .. },
                ..
            } => Some(*ordinal),
            _ => None,
        }
    }

    /// Weekly days sorted Sunday-first with duplicates removed.
    fn sorted_days(days: &[Weekday]) -> Vec<Weekday> {
        let mut sorted = days.to_vec();
        sorted.sort_by_key(|d| weekday_index(*d));
        sorted.dedup();
        sorted
    }
}

impl std::fmt::Display for RecurrenceRule {
    /// Human label such as `Every 2 weeks · Mon · Wed` or `1st Friday each month`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily { interval } => match interval {
                0 | 1 => f.write_str("Daily"),
                n => write!(f, "Every {n} days"),
            },
            Self::Weekly { interval, days } => {
                let sorted = Self::sorted_days(days);
                if *interval <= 1 && sorted == Self::sorted_days(&WORKWEEK) {
                    return f.write_str("Weekdays");
                }
                if *interval <= 1 && sorted == Self::sorted_days(&WEEKEND) {
                    return f.write_str("Weekends");
                }
                match interval {
                    0 | 1 => f.write_str("Weekly")?,
                    n => write!(f, "Every {n} weeks")?,
                }
                for day in sorted {
                    write!(f, " · {day}")?;
                }
                Ok(())
            },
            Self::Monthly { interval, pattern } => {
                match pattern {
                    MonthlyPattern::OrdinalWeekday { ordinal, weekday } => {
                        let n = u32::from(*ordinal);
                        write!(f, "{n}{} {}", ordinal_suffix(n), weekday_long_name(*weekday))?;
                        match interval {
                            0 | 1 => f.write_str(" each month"),
                            n => write!(f, " every {n} months"),
                        }
                    },
                    MonthlyPattern::DayOfMonth { day } => {
                        match interval {
                            0 | 1 => f.write_str("Monthly")?,
                            n => write!(f, "Every {n} months")?,
                        }
                        write!(f, " on the {day}{}", ordinal_suffix(*day))
                    },
                }
            },
        }
    }
}

fn weekday_long_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn serialize_weekday<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(weekday_index(*weekday))
}

fn serialize_weekdays<S: Serializer>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(days.iter().map(|d| weekday_index(*d)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============
    // Constructors
    // ==============

    #[test]
    fn test_weekly_dedups_in_first_seen_order() {
        let rule = RecurrenceRule::weekly(1, &[Weekday::Wed, Weekday::Mon, Weekday::Wed]);
        assert_eq!(rule.days_of_week(), vec![Weekday::Wed, Weekday::Mon]);
    }

    #[test]
    fn test_interval_floor_is_one() {
        assert_eq!(RecurrenceRule::daily(0).interval(), 1);
        assert_eq!(RecurrenceRule::weekly(0, &[]).interval(), 1);
        assert_eq!(RecurrenceRule::monthly_on_day(0, 3).interval(), 1);
    }

    #[test]
    fn test_ordinal_only_on_monthly() {
        assert_eq!(RecurrenceRule::daily(1).ordinal(), None);
        assert_eq!(RecurrenceRule::workweek().ordinal(), None);
        assert_eq!(RecurrenceRule::monthly_on_day(1, 3).ordinal(), None);
        assert_eq!(
            RecurrenceRule::monthly_on_weekday(1, 2, Weekday::Tue).ordinal(),
            Some(2)
        );
    }

    #[test]
    fn test_frequency() {
        assert_eq!(RecurrenceRule::daily(1).frequency(), RecurrenceFrequency::Daily);
        assert_eq!(RecurrenceRule::weekend().frequency(), RecurrenceFrequency::Weekly);
        assert_eq!(
            RecurrenceRule::monthly_on_weekday(1, 1, Weekday::Fri).frequency(),
            RecurrenceFrequency::Monthly
        );
    }

    #[test]
    fn test_monthly_pattern_skips_missing_days() {
        let fifth_friday = MonthlyPattern::OrdinalWeekday {
            ordinal: 5,
            weekday: Weekday::Fri,
        };
        assert_eq!(fifth_friday.resolve_in(2024, 2), None);
        assert_eq!(
            fifth_friday.resolve_in(2024, 3),
            NaiveDate::from_ymd_opt(2024, 3, 29)
        );
        let thirty_first = MonthlyPattern::DayOfMonth { day: 31 };
        assert_eq!(thirty_first.resolve_in(2024, 4), None);
    }

    // ==============
    // Labels
    // ==============

    #[test]
    fn test_labels() {
        assert_eq!(RecurrenceRule::daily(1).to_string(), "Daily");
        assert_eq!(RecurrenceRule::daily(3).to_string(), "Every 3 days");
        assert_eq!(RecurrenceRule::workweek().to_string(), "Weekdays");
        assert_eq!(RecurrenceRule::weekend().to_string(), "Weekends");
        assert_eq!(
            RecurrenceRule::weekly(2, &[Weekday::Wed, Weekday::Mon]).to_string(),
            "Every 2 weeks · Mon · Wed"
        );
        assert_eq!(
            RecurrenceRule::weekly(1, &[Weekday::Fri]).to_string(),
            "Weekly · Fri"
        );
        assert_eq!(
            RecurrenceRule::monthly_on_weekday(1, 1, Weekday::Fri).to_string(),
            "1st Friday each month"
        );
        assert_eq!(
            RecurrenceRule::monthly_on_weekday(3, 2, Weekday::Tue).to_string(),
            "2nd Tuesday every 3 months"
        );
        assert_eq!(
            RecurrenceRule::monthly_on_day(1, 3).to_string(),
            "Monthly on the 3rd"
        );
        assert_eq!(
            RecurrenceRule::monthly_on_day(2, 21).to_string(),
            "Every 2 months on the 21st"
        );
    }

    // ==============
    // Serialization
    // ==============

    #[test]
    fn test_serialize_weekly_uses_sunday_based_indices() {
        let rule = RecurrenceRule::weekly(1, &[Weekday::Mon, Weekday::Wed]);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["frequency"], "weekly");
        assert_eq!(json["interval"], 1);
        assert_eq!(json["daysOfWeek"], serde_json::json!([1, 3]));
    }

    #[test]
    fn test_serialize_monthly_ordinal() {
        let rule = RecurrenceRule::monthly_on_weekday(1, 1, Weekday::Fri);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["frequency"], "monthly");
        assert_eq!(json["pattern"]["kind"], "ordinal_weekday");
        assert_eq!(json["pattern"]["ordinal"], 1);
        assert_eq!(json["pattern"]["weekday"], 5);
    }
}
