//! Message statistics time modes

use std::fmt;
use std::str::FromStr;

/// Granularity a statistics query is truncated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    Minute,
    Hour,
    Day,
}

impl TimeBucket {
    /// Unit name accepted by PostgreSQL `date_trunc`
    pub fn as_sql_unit(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

/// Lookback window and bucket size for the message stats endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageStatsMode {
    #[default]
    FifteenMinutes,
    OneHour,
    OneDay,
    SevenDays,
    ThirtyDays,
}

impl MessageStatsMode {
    pub const ALL: [Self; 5] = [
        Self::FifteenMinutes,
        Self::OneHour,
        Self::OneDay,
        Self::SevenDays,
        Self::ThirtyDays,
    ];

    pub fn bucket(self) -> TimeBucket {
        match self {
            Self::FifteenMinutes | Self::OneHour => TimeBucket::Minute,
            Self::OneDay | Self::SevenDays => TimeBucket::Hour,
            Self::ThirtyDays => TimeBucket::Day,
        }
    }

    /// Window as a PostgreSQL interval literal
    pub fn window(self) -> &'static str {
        match self {
            Self::FifteenMinutes => "15 minutes",
            Self::OneHour => "1 hour",
            Self::OneDay => "24 hours",
            Self::SevenDays => "7 days",
            Self::ThirtyDays => "30 days",
        }
    }

    /// Keyword used in the `mode` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FifteenMinutes => "15m",
            Self::OneHour => "1h",
            Self::OneDay => "24h",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
        }
    }
}

/// Error for an unrecognized mode keyword
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stats mode: {0}")]
pub struct InvalidStatsMode(pub String);

impl FromStr for MessageStatsMode {
    type Err = InvalidStatsMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| InvalidStatsMode(s.to_string()))
    }
}

impl fmt::Display for MessageStatsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
