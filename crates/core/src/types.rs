/// Catalog record identifiers are assigned by the store and never reused.
pub type MovieId = u64;

/// Release dates carry no time-of-day or zone.
pub type ReleaseDate = chrono::NaiveDate;
