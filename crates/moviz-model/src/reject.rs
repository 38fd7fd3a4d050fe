//! Record-level rejection taxonomy.
//!
//! Every reason here is recoverable: the offending record is dropped and the
//! run continues. The only fatal conditions in the pipeline are structural
//! (a dataset missing a column required for normalization) and are modeled
//! as errors, not rejections.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RejectReason {
    /// A required transform could not parse its input (e.g. a non-empty but
    /// unparseable date).
    MalformedField,
    /// A critical column (title, year) is null or empty.
    CriticalNull,
    /// Year outside the accepted 1880..=2025 range.
    YearOutOfRange,
    /// TMDB-only: adult flag set or status is not "Released".
    AdultOrUnreleased,
    /// More than the allowed fraction of non-critical columns is missing.
    NonCriticalThreshold,
    /// TMDB-only: runtime, budget and revenue are all zero or absent.
    MissingPayload,
    /// Budgets-only: release date after the run date.
    FutureRelease,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MalformedField => "malformed_field",
            Self::CriticalNull => "critical_null",
            Self::YearOutOfRange => "year_out_of_range",
            Self::AdultOrUnreleased => "adult_or_unreleased",
            Self::NonCriticalThreshold => "non_critical_threshold",
            Self::MissingPayload => "missing_payload",
            Self::FutureRelease => "future_release",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
