use std::fmt::{Display, Write};
use std::str::FromStr;

use chrono::{DateTime, Locale, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::core::{
    error::{TimeServerError, TimeServerResult},
    models::{IsoStyle, TimeFormat, TimeRequest, TimeResult},
    utils::{
        AM_MARKER, ISO_OFFSET_FORMAT, ISO_UTC_FORMAT, ISO_WALL_CLOCK_FORMAT, LOCALE_FORMAT,
        NUMERIC_FORMAT, PM_MARKER, UTC_TIMEZONE, ZONE_FORMAT,
    },
};

const LOCALE: Locale = Locale::es_AR;

/// Renders the current instant for a timezone in one of the supported formats
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeFormatter {
    iso_style: IsoStyle,
}

impl TimeFormatter {
    pub fn new(iso_style: IsoStyle) -> Self {
        Self { iso_style }
    }

    pub fn iso_style(&self) -> IsoStyle {
        self.iso_style
    }

    /// Format the current instant. Failures are reported inside the result.
    pub fn format(&self, request: &TimeRequest) -> TimeResult {
        self.format_at(request, Utc::now())
    }

    /// Format a given instant. Failures are reported inside the result.
    pub fn format_at(&self, request: &TimeRequest, instant: DateTime<Utc>) -> TimeResult {
        match self.render(request, instant) {
            Ok(text) => TimeResult::success(text),
            Err(e) => {
                tracing::debug!(timezone = %request.timezone, "time formatting failed: {}", e);
                TimeResult::error(format!("Error getting time: {}", e))
            }
        }
    }

    fn render(&self, request: &TimeRequest, instant: DateTime<Utc>) -> TimeServerResult<String> {
        // Unlike the historical service, an unknown zone is an error even for
        // `timestamp` and UTC `iso`, which never read it.
        let timezone = parse_timezone(&request.timezone)?;
        let local = instant.with_timezone(&timezone);

        match request.format {
            TimeFormat::Iso if request.timezone == UTC_TIMEZONE => {
                write_pattern(&instant, ISO_UTC_FORMAT)
            }
            TimeFormat::Iso => match self.iso_style {
                // Known quirk kept for compatibility: the local wall-clock
                // fields are emitted as if they were UTC.
                IsoStyle::WallClock => write_pattern(&local.naive_local(), ISO_WALL_CLOCK_FORMAT),
                IsoStyle::OffsetAware => write_pattern(&local, ISO_OFFSET_FORMAT),
            },
            TimeFormat::Locale => write_long_form(&local),
            TimeFormat::Timestamp => Ok(instant.timestamp_millis().to_string()),
            TimeFormat::Numeric => write_localized(&local, NUMERIC_FORMAT),
        }
    }
}

/// Resolve an IANA timezone identifier, `UTC` included
pub fn parse_timezone(timezone_name: &str) -> TimeServerResult<Tz> {
    Tz::from_str(timezone_name).map_err(|_| TimeServerError::InvalidTimezone {
        timezone: timezone_name.to_string(),
    })
}

/// Anything chrono can format with a strftime pattern
trait Formattable {
    fn write_to(&self, out: &mut String, pattern: &'static str) -> std::fmt::Result;
}

impl<Z> Formattable for DateTime<Z>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    fn write_to(&self, out: &mut String, pattern: &'static str) -> std::fmt::Result {
        write!(out, "{}", self.format(pattern))
    }
}

impl Formattable for chrono::NaiveDateTime {
    fn write_to(&self, out: &mut String, pattern: &'static str) -> std::fmt::Result {
        write!(out, "{}", self.format(pattern))
    }
}

fn write_pattern<F: Formattable>(value: &F, pattern: &'static str) -> TimeServerResult<String> {
    let mut out = String::new();
    value
        .write_to(&mut out, pattern)
        .map_err(|_| TimeServerError::Formatting { pattern })?;
    Ok(out)
}

fn write_localized(value: &DateTime<Tz>, pattern: &'static str) -> TimeServerResult<String> {
    let mut out = String::new();
    write!(out, "{}", value.format_localized(pattern, LOCALE))
        .map_err(|_| TimeServerError::Formatting { pattern })?;
    Ok(out)
}

/// Long form with an explicit day-period marker, e.g. `02:04:05 p. m. -03`
fn write_long_form(value: &DateTime<Tz>) -> TimeServerResult<String> {
    let (is_pm, _) = value.hour12();
    let marker = if is_pm { PM_MARKER } else { AM_MARKER };

    Ok(format!(
        "{} {} {}",
        write_localized(value, LOCALE_FORMAT)?,
        marker,
        write_pattern(value, ZONE_FORMAT)?
    ))
}
