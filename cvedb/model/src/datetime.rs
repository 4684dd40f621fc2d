//! Timestamps as sent by the backend.
//!
//! Columns carrying a timezone are sent in RFC 3339 format, others as naive ISO 8601 date/time,
//! which is interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    match NaiveDateTime::parse_from_str(value, NAIVE_FORMAT) {
        Ok(timestamp) => Ok(timestamp.and_utc()),
        Err(err) => match NaiveDate::parse_from_str(value, DATE_FORMAT) {
            Ok(date) => Ok(date.and_time(Default::default()).and_utc()),
            Err(_) => Err(err),
        },
    }
}

pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.serialize_str(&super::format(timestamp)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) if !value.trim().is_empty() => super::parse(&value).map(Some).map_err(Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_variants() -> anyhow::Result<()> {
        let expected = Utc.with_ymd_and_hms(2021, 1, 1, 12, 30, 0).unwrap();

        assert_eq!(parse("2021-01-01T12:30:00Z")?, expected);
        assert_eq!(parse("2021-01-01T12:30:00+00:00")?, expected);
        assert_eq!(parse("2021-01-01T14:30:00+02:00")?, expected);
        assert_eq!(parse("2021-01-01T12:30:00")?, expected);
        assert_eq!(parse("2021-01-01T12:30:00.000")?, expected);
        assert_eq!(parse("2021-01-01")?, Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());

        assert!(parse("yesterday").is_err());

        Ok(())
    }

    #[test]
    fn format_offset() {
        let timestamp = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format(&timestamp), "2021-01-01T00:00:00+00:00");
    }
}
