//! Derived-column computation applied uniformly post-cleaning.

use moviz_model::NormalizedRecord;

/// Ten-year bucket containing `year` (1994 -> 1990).
pub fn decade_of(year: i32) -> i32 {
    year - year.rem_euclid(10)
}

/// Fill in the decade bucket for every surviving record.
pub fn assign_decades(records: &mut [NormalizedRecord]) {
    for record in records {
        record.decade = record.year.map(decade_of);
    }
}
