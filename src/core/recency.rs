//! Groups dated records into display buckets relative to a reference day.
//!
//! Boundaries are calendar-day differences, not 24-hour windows: anything on
//! the previous date is "Yesterday" whatever the time of day.

use super::format::{Locale, month_year_label};
use crate::entities::{LoanPayment, Transaction};
use chrono::{Datelike, NaiveDate};

/// Anything that can be placed on a calendar.
pub trait Dated {
    /// Calendar day the record belongs to.
    fn date(&self) -> NaiveDate;
}

impl Dated for Transaction {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for LoanPayment {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl<D: Dated + ?Sized> Dated for &D {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}

/// Which group a record falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecencyBucket {
    /// Same calendar day as the reference
    Today,
    /// The day before the reference
    Yesterday,
    /// Two to seven days back, or any future date
    ThisWeek,
    /// Older records, grouped by calendar month
    Month {
        /// Calendar year
        year: i32,
        /// Month number, 1 to 12
        month: u32,
    },
}

impl RecencyBucket {
    /// Classifies `date` against `reference`.
    #[must_use]
    pub fn classify(date: NaiveDate, reference: NaiveDate) -> Self {
        match (reference - date).num_days() {
            0 => Self::Today,
            1 => Self::Yesterday,
            days if days <= 7 => Self::ThisWeek,
            _ => Self::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }

    /// Heading shown above the group.
    #[must_use]
    pub fn label(self, locale: Locale) -> String {
        match (self, locale) {
            (Self::Today, Locale::EsMx) => "Hoy".to_string(),
            (Self::Today, Locale::EnUs) => "Today".to_string(),
            (Self::Yesterday, Locale::EsMx) => "Ayer".to_string(),
            (Self::Yesterday, Locale::EnUs) => "Yesterday".to_string(),
            (Self::ThisWeek, Locale::EsMx) => "Esta Semana".to_string(),
            (Self::ThisWeek, Locale::EnUs) => "This Week".to_string(),
            (Self::Month { year, month }, _) => month_year_label(year, month, locale),
        }
    }
}

/// One bucket and the records that landed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecencyGroup<R> {
    /// Group the records fall into
    pub bucket: RecencyBucket,
    /// Records in their original order
    pub records: Vec<R>,
}

/// Partitions `records` into recency buckets.
///
/// Buckets appear in the order their first record was seen and records keep
/// their input order inside each bucket, so a date-descending list stays sorted.
pub fn bucket_by_recency<R, I>(records: I, reference: NaiveDate) -> Vec<RecencyGroup<R>>
where
    R: Dated,
    I: IntoIterator<Item = R>,
{
    let mut groups: Vec<RecencyGroup<R>> = Vec::new();
    for record in records {
        let bucket = RecencyBucket::classify(record.date(), reference);
        match groups.iter_mut().find(|group| group.bucket == bucket) {
            Some(group) => group.records.push(record),
            None => groups.push(RecencyGroup {
                bucket,
                records: vec![record],
            }),
        }
    }
    groups
}
