//! Custom serde helpers for Txbit's serialization formats.
//!
//! Txbit timestamps look like `2019-10-21T14:02:52.11`: an ISO-8601 date and
//! time with a variable-length fractional second and no UTC offset. They map
//! to [`time::PrimitiveDateTime`] with a custom format description.

use serde::{Deserialize, Deserializer, Serializer, de};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Txbit's timestamp format. The subsecond part is absent on some
/// endpoints, hence the optional group.
const TXBIT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);

/// Serialize/deserialize a [`PrimitiveDateTime`] in Txbit's timestamp format.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use time::PrimitiveDateTime;
/// use txbit_api_client::types::serde_helpers::txbit_datetime;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(with = "txbit_datetime")]
///     created: PrimitiveDateTime,
/// }
///
/// let response: Response =
///     serde_json::from_str(r#"{"created":"2019-10-21T14:02:52.11"}"#).unwrap();
/// assert_eq!(response.created.year(), 2019);
/// ```
pub mod txbit_datetime {
    use super::*;

    /// Serialize a datetime in Txbit's format.
    pub fn serialize<S>(value: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = value
            .format(TXBIT_FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    /// Deserialize a datetime in Txbit's format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PrimitiveDateTime::parse(&s, TXBIT_FORMAT).map_err(de::Error::custom)
    }
}

/// Serialize/deserialize an `Option<PrimitiveDateTime>` in Txbit's format.
///
/// Fields like an order's `Closed` stay `null` until the order leaves the
/// book; this helper treats JSON `null` as `None`. Pair with
/// `#[serde(default)]` so an absent field also maps to `None`.
pub mod option_txbit_datetime {
    use super::*;

    /// Serialize an optional datetime in Txbit's format, `None` as null.
    pub fn serialize<S>(value: &Option<PrimitiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => txbit_datetime::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional datetime, accepting null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        s.map(|s| PrimitiveDateTime::parse(&s, TXBIT_FORMAT).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Stamped {
        #[serde(with = "txbit_datetime")]
        at: PrimitiveDateTime,
        #[serde(default, with = "option_txbit_datetime")]
        closed: Option<PrimitiveDateTime>,
    }

    #[test]
    fn test_parse_with_fraction() {
        let stamped: Stamped =
            serde_json::from_str(r#"{"at":"2019-10-21T14:02:52.11","closed":null}"#).unwrap();
        assert_eq!(stamped.at.year(), 2019);
        assert_eq!(stamped.at.second(), 52);
        assert!(stamped.closed.is_none());
    }

    #[test]
    fn test_parse_without_fraction() {
        let stamped: Stamped = serde_json::from_str(r#"{"at":"2014-07-09T03:21:20"}"#).unwrap();
        assert_eq!(stamped.at.hour(), 3);
        assert_eq!(stamped.at.minute(), 21);
    }

    #[test]
    fn test_parse_optional_present() {
        let stamped: Stamped = serde_json::from_str(
            r#"{"at":"2019-10-21T14:02:52.11","closed":"2019-10-21T15:00:00.5"}"#,
        )
        .unwrap();
        assert_eq!(stamped.closed.unwrap().hour(), 15);
    }

    #[test]
    fn test_roundtrip() {
        let stamped: Stamped =
            serde_json::from_str(r#"{"at":"2019-10-21T14:02:52.11","closed":null}"#).unwrap();
        let json = serde_json::to_string(&stamped).unwrap();
        let again: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(stamped, again);
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let result: Result<Stamped, _> = serde_json::from_str(r#"{"at":"21/10/2019 14:02"}"#);
        assert!(result.is_err());
    }
}
