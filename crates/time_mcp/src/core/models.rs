use clap::ValueEnum;
use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};

/// Helper function to deserialize, trim and drop blank strings
fn deserialize_trimmed_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Output representation of the current instant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// ISO 8601 timestamp
    Iso,
    /// Long Argentine Spanish form with weekday and month name
    #[default]
    Locale,
    /// Milliseconds since the Unix epoch
    Timestamp,
    /// Numeric day/month/year with 24-hour time; used for unrecognized formats
    #[serde(other)]
    #[schemars(skip)]
    Numeric,
}

/// How `iso` output is produced for zones other than UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IsoStyle {
    /// Wall-clock fields of the target zone stamped with a `Z` marker.
    ///
    /// This matches the historical output of the service, which is not a
    /// correct instant for any zone other than UTC.
    #[default]
    WallClock,
    /// Proper RFC 3339 timestamp carrying the zone's UTC offset
    OffsetAware,
}

/// A fully resolved request for the formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRequest {
    pub format: TimeFormat,
    pub timezone: String,
}

impl TimeRequest {
    pub fn new(format: TimeFormat, timezone: impl Into<String>) -> Self {
        Self {
            format,
            timezone: timezone.into(),
        }
    }
}

/// Outcome of a time query, errors included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResult {
    pub text: String,
    pub is_error: bool,
}

impl TimeResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl From<TimeResult> for CallToolResult {
    fn from(result: TimeResult) -> Self {
        let content = vec![Content::text(result.text)];
        if result.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

/// Request to get the current time
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetCurrentTimeRequest {
    /// Time format preference (iso, locale, or timestamp)
    #[serde(default)]
    pub format: Option<TimeFormat>,
    /// Timezone (e.g., America/Argentina/Buenos_Aires, America/New_York, Europe/London, UTC)
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    pub timezone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_result_serialization() {
        let result = TimeResult::error("Error getting time: Invalid timezone: Mars/Base");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isError"], true);
        assert_eq!(
            json["text"],
            "Error getting time: Invalid timezone: Mars/Base"
        );
    }

    #[test]
    fn test_format_parsing() {
        let format: TimeFormat = serde_json::from_str(r#""iso""#).unwrap();
        assert_eq!(format, TimeFormat::Iso);

        let format: TimeFormat = serde_json::from_str(r#""timestamp""#).unwrap();
        assert_eq!(format, TimeFormat::Timestamp);

        // Unknown values fall back to the numeric representation
        let format: TimeFormat = serde_json::from_str(r#""rfc2822""#).unwrap();
        assert_eq!(format, TimeFormat::Numeric);
    }

    #[test]
    fn test_format_schema_lists_named_formats() {
        let schema = serde_json::to_string(&schemars::schema_for!(TimeFormat)).unwrap();
        assert!(schema.contains(r#""iso""#), "{}", schema);
        assert!(schema.contains(r#""locale""#), "{}", schema);
        assert!(schema.contains(r#""timestamp""#), "{}", schema);
        assert!(!schema.contains(r#""numeric""#), "{}", schema);
    }

    #[test]
    fn test_request_defaults_are_absent() {
        let request: GetCurrentTimeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.format.is_none());
        assert!(request.timezone.is_none());
    }

    #[test]
    fn test_timezone_trimming() {
        let json = r#"{"format": "locale", "timezone": "   Africa/Cairo   "}"#;
        let request: GetCurrentTimeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.format, Some(TimeFormat::Locale));
        assert_eq!(request.timezone.as_deref(), Some("Africa/Cairo"));

        let json = r#"{"timezone": "   "}"#;
        let request: GetCurrentTimeRequest = serde_json::from_str(json).unwrap();
        assert!(request.timezone.is_none());
    }

    #[test]
    fn test_error_result_sets_tool_error_flag() {
        let call_result: CallToolResult = TimeResult::error("Error getting time").into();
        assert_eq!(call_result.is_error, Some(true));

        let call_result: CallToolResult = TimeResult::success("12:00").into();
        assert_ne!(call_result.is_error, Some(true));
    }
}
