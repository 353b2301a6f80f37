use chrono_tz::Tz;

use crate::config::TimeDefaults;
use crate::core::{
    formatter::TimeFormatter,
    models::{TimeFormat, TimeRequest, TimeResult},
    utils,
};

/// Applies configured defaults and builds user facing time messages
#[derive(Debug, Clone)]
pub struct TimeProvider {
    defaults: TimeDefaults,
    formatter: TimeFormatter,
    pub(crate) local_timezone: Tz,
}

impl TimeProvider {
    pub fn new(defaults: TimeDefaults, formatter: TimeFormatter) -> Self {
        Self {
            defaults,
            formatter,
            local_timezone: detect_local_timezone(),
        }
    }

    pub fn defaults(&self) -> &TimeDefaults {
        &self.defaults
    }

    pub fn formatter(&self) -> &TimeFormatter {
        &self.formatter
    }

    /// Build a request, falling back to the configured defaults
    pub fn request(&self, format: Option<TimeFormat>, timezone: Option<String>) -> TimeRequest {
        TimeRequest::new(
            format.unwrap_or(self.defaults.format),
            timezone.unwrap_or_else(|| self.defaults.timezone.clone()),
        )
    }

    pub fn default_request(&self) -> TimeRequest {
        self.request(None, None)
    }

    /// Current time as a message naming the location, or the formatter's error
    pub fn current_time(&self, request: &TimeRequest) -> TimeResult {
        let result = self.formatter.format(request);
        if result.is_error {
            tracing::warn!(timezone = %request.timezone, "{}", result.text);
            return result;
        }

        let location = utils::location_label(&request.timezone);
        TimeResult::success(format!("Current time in {}: {}", location, result.text))
    }
}

/// Try to detect the system's local timezone
fn detect_local_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(tz_name) => match tz_name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                chrono_tz::UTC
            }
        },
        Err(_) => {
            tracing::warn!("Could not detect system timezone, defaulting to UTC");
            chrono_tz::UTC
        }
    }
}

impl Default for TimeProvider {
    fn default() -> Self {
        Self::new(TimeDefaults::default(), TimeFormatter::default())
    }
}
