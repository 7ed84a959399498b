//! Translate a visitor's time budget into a number of places to visit.

use thiserror::Error;

/// Place count used when a time label is not recognised.
pub const DEFAULT_PLACE_COUNT: usize = 3;

/// The time budgets offered to visitors.
///
/// # Examples
/// ```
/// use promenade_core::TimeBudget;
///
/// let budget: TimeBudget = "3 hours".parse().unwrap();
/// assert_eq!(budget.place_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBudget {
    /// One hour of walking.
    OneHour,
    /// Two hours of walking.
    TwoHours,
    /// Three hours of walking.
    ThreeHours,
    /// Four hours of walking.
    FourHours,
}

/// Error returned when a label does not name a [`TimeBudget`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time budget '{label}'")]
pub struct TimeBudgetParseError {
    /// The rejected label.
    pub label: String,
}

impl TimeBudget {
    /// Every budget, shortest first.
    pub const ALL: [Self; 4] = [
        Self::OneHour,
        Self::TwoHours,
        Self::ThreeHours,
        Self::FourHours,
    ];

    /// Return the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneHour => "1 hour",
            Self::TwoHours => "2 hours",
            Self::ThreeHours => "3 hours",
            Self::FourHours => "4 hours",
        }
    }

    /// Number of places that fit the budget.
    #[must_use]
    pub const fn place_count(&self) -> usize {
        match self {
            Self::OneHour => 2,
            Self::TwoHours => 3,
            Self::ThreeHours => 4,
            Self::FourHours => 5,
        }
    }
}

impl std::fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeBudget {
    type Err = TimeBudgetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|budget| budget.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TimeBudgetParseError {
                label: s.to_owned(),
            })
    }
}

/// Number of places for a time label, or [`DEFAULT_PLACE_COUNT`] when the
/// label does not equal one of the offered labels exactly.
///
/// # Examples
/// ```
/// use promenade_core::{DEFAULT_PLACE_COUNT, place_count};
///
/// assert_eq!(place_count("1 hour"), 2);
/// assert_eq!(place_count("a fortnight"), DEFAULT_PLACE_COUNT);
/// ```
#[must_use]
pub fn place_count(label: &str) -> usize {
    TimeBudget::ALL
        .into_iter()
        .find(|budget| budget.as_str() == label)
        .map_or(DEFAULT_PLACE_COUNT, |budget| budget.place_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1 hour", 2)]
    #[case("2 hours", 3)]
    #[case("3 hours", 4)]
    #[case("4 hours", 5)]
    #[case(" 4 HOURS ", DEFAULT_PLACE_COUNT)]
    #[case("", DEFAULT_PLACE_COUNT)]
    #[case("5 hours", DEFAULT_PLACE_COUNT)]
    fn maps_labels_to_counts(#[case] label: &str, #[case] expected: usize) {
        assert_eq!(place_count(label), expected);
    }

    #[test]
    fn from_str_ignores_case_and_whitespace() {
        assert_eq!(" 4 HOURS ".parse::<TimeBudget>(), Ok(TimeBudget::FourHours));
    }

    #[test]
    fn parse_error_keeps_label() {
        let err = "forever".parse::<TimeBudget>().expect_err("unknown label");
        assert_eq!(err.label, "forever");
        assert!(err.to_string().contains("unknown time budget"));
    }

    #[test]
    fn display_matches_as_str() {
        for budget in TimeBudget::ALL {
            assert_eq!(budget.to_string(), budget.as_str());
        }
    }
}
