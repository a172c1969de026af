// Holiday Aligner: joins two countries' holiday streams and picks the first
// date both observe.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use futures::future;

use crate::client::HolidaySource;
use crate::error::HolidayError;
use crate::iso;
use crate::model::{HolidayAlignment, PublicHoliday};

/// Computes the first shared future holiday of two countries over a
/// [`HolidaySource`].
pub struct HolidayAligner<S> {
    source: S,
}

impl<S: HolidaySource> HolidayAligner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Find the soonest date strictly after `date` on which both countries
    /// observe a public holiday.
    ///
    /// Both codes are validated before any fetch; an invalid code fails with
    /// [`HolidayError::InvalidInput`] and no network call is made. The two
    /// fetches run concurrently and are joined; the first failure wins, and
    /// dropping the returned future cancels both.
    pub async fn align(
        &self,
        date: NaiveDate,
        first_country_code: &str,
        second_country_code: &str,
    ) -> Result<HolidayAlignment, HolidayError> {
        if !iso::is_valid_iso_country(first_country_code)
            || !iso::is_valid_iso_country(second_country_code)
        {
            return Err(HolidayError::InvalidInput);
        }

        tracing::debug!(
            %date,
            first_country_code,
            second_country_code,
            "aligning holidays"
        );

        let (first_holidays, second_holidays) = future::try_join(
            self.source.holidays_after(date, first_country_code),
            self.source.holidays_after(date, second_country_code),
        )
        .await?;

        let grouped = group_by_date(first_holidays.into_iter().chain(second_holidays));

        // Smallest date whose bucket holds exactly two records. A bucket of
        // one means only one country observes that date; a bucket of three or
        // more means one country reported coinciding holidays and pairing
        // would be ambiguous, so the date is skipped.
        let (shared_date, pair) = grouped
            .into_iter()
            .find(|(_, group)| group.len() == 2)
            .ok_or(HolidayError::NoMatch)?;

        let mut by_country: HashMap<String, PublicHoliday> = pair
            .into_iter()
            .map(|h| (h.country_code.clone(), h))
            .collect();

        match (
            by_country.remove(first_country_code),
            by_country.remove(second_country_code),
        ) {
            (Some(first), Some(second)) => Ok(HolidayAlignment {
                date: shared_date,
                first_country_name: first.local_name,
                second_country_name: second.local_name,
            }),
            // Both records of the pair carried the same country code.
            _ => Err(HolidayError::MalformedResult),
        }
    }
}

fn group_by_date(
    holidays: impl Iterator<Item = PublicHoliday>,
) -> BTreeMap<NaiveDate, Vec<PublicHoliday>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<PublicHoliday>> = BTreeMap::new();
    for holiday in holidays {
        grouped.entry(holiday.date).or_default().push(holiday);
    }
    grouped
}
