// Value types exchanged with the public holiday provider and returned to callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One public holiday occurrence for one country, as reported by the provider.
///
/// Field names follow the provider's JSON shape (`localName`, `countryCode`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    pub date: NaiveDate,
    /// Holiday name in the country's local language.
    pub local_name: String,
    /// English/common name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code this record belongs to.
    pub country_code: String,
}

/// The earliest future date on which both queried countries observe a holiday,
/// with each country's local holiday name.
///
/// Serializes as `{date, name1, name2}`, where `name1`/`name2` correspond to
/// the first/second country code of the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayAlignment {
    pub date: NaiveDate,
    #[serde(rename = "name1")]
    pub first_country_name: String,
    #[serde(rename = "name2")]
    pub second_country_name: String,
}
