//! Cell parsers for trip request datasets.

use carpool_core::{GeoPoint, Role};
use chrono::{NaiveDateTime, NaiveTime};

use crate::error::RowError;

/// Formats accepted for `time_of_travel`, tried in order.
const TIME_FORMATS: [&str; 6] = [
    "%H:%M:%S",
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M %p",
    "%I:%M:%S %p",
    "%I:%M%p",
];

/// Spreadsheet exports sometimes carry a full timestamp; only the time is kept.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a `"lat,lon"` pair. Surrounding whitespace and parentheses are tolerated.
pub fn parse_coordinates(field: &'static str, value: &str) -> Result<GeoPoint, RowError> {
    let invalid = || RowError::InvalidCoordinates {
        field,
        value: value.to_owned(),
    };

    let inner = value
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    let mut parts = inner.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    Ok(GeoPoint::new(lat, lon))
}

pub fn parse_time_of_travel(value: &str) -> Result<NaiveTime, RowError> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.time())
        })
        .ok_or_else(|| RowError::InvalidTime(value.to_owned()))
}

/// Parse a boolean cell: true/false, yes/no, y/n, 1/0 in any case.
pub fn parse_flag(field: &'static str, value: &str) -> Result<bool, RowError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "1.0" => Ok(true),
        "false" | "no" | "n" | "0" | "0.0" => Ok(false),
        _ => Err(RowError::InvalidFlag {
            field,
            value: value.to_owned(),
        }),
    }
}

pub fn parse_number(field: &'static str, value: &str) -> Result<f64, RowError> {
    value.trim().parse().map_err(|_| RowError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

pub fn parse_role(value: &str) -> Result<Role, RowError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("driver") {
        Ok(Role::Driver)
    } else if value.eq_ignore_ascii_case("rider") {
        Ok(Role::Rider)
    } else {
        Err(RowError::UnknownRole(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_parenthesized_coordinates() {
        assert_eq!(
            parse_coordinates("start_location", "52.52,13.405").unwrap(),
            GeoPoint::new(52.52, 13.405)
        );
        assert_eq!(
            parse_coordinates("start_location", " (52.52, 13.405) ").unwrap(),
            GeoPoint::new(52.52, 13.405)
        );
        assert_eq!(
            parse_coordinates("start_location", "-33.8688,151.2093").unwrap(),
            GeoPoint::new(-33.8688, 151.2093)
        );
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "52.52", "52.52,13.4,1", "north,east", "52.52;13.4"] {
            assert_eq!(
                parse_coordinates("destination_location", bad),
                Err(RowError::InvalidCoordinates {
                    field: "destination_location",
                    value: bad.to_owned()
                }),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn parses_common_time_formats() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(parse_time_of_travel("09:00").unwrap(), nine);
        assert_eq!(parse_time_of_travel("9:00").unwrap(), nine);
        assert_eq!(parse_time_of_travel("09:00:00").unwrap(), nine);
        assert_eq!(parse_time_of_travel("9:00 AM").unwrap(), nine);
        assert_eq!(parse_time_of_travel("2024-03-01 09:00:00").unwrap(), nine);
        assert_eq!(
            parse_time_of_travel("5:30 PM").unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
        assert_eq!(parse_time_of_travel("9:00AM").unwrap(), nine);
        assert_eq!(parse_time_of_travel("2024-03-01T09:00:00").unwrap(), nine);
        assert_eq!(
            parse_time_of_travel("09:00:30.5").unwrap(),
            NaiveTime::from_hms_milli_opt(9, 0, 30, 500).unwrap()
        );
    }

    #[test]
    fn rejects_non_times() {
        for bad in ["", "soon", "25:00", "09:60"] {
            assert!(matches!(parse_time_of_travel(bad), Err(RowError::InvalidTime(_))), "{bad:?}");
        }
    }

    #[test]
    fn parses_flags_in_any_case() {
        for yes in ["true", "TRUE", "Yes", "y", "1", "1.0"] {
            assert_eq!(parse_flag("non_smoking", yes), Ok(true));
        }
        for no in ["false", "False", "NO", "n", "0", "0.0"] {
            assert_eq!(parse_flag("non_smoking", no), Ok(false));
        }
        assert!(matches!(
            parse_flag("same_gender", "maybe"),
            Err(RowError::InvalidFlag { field: "same_gender", .. })
        ));
    }

    #[test]
    fn parses_roles_case_insensitively() {
        assert_eq!(parse_role("Driver"), Ok(Role::Driver));
        assert_eq!(parse_role(" rider "), Ok(Role::Rider));
        assert_eq!(parse_role("Passenger"), Err(RowError::UnknownRole("Passenger".into())));
    }

    #[test]
    fn parses_numbers() {
        assert_eq!(parse_number("max_detour_distance", " 4.5 "), Ok(4.5));
        assert!(parse_number("max_detour_distance", "five").is_err());
    }
}
