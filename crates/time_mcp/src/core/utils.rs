// Format patterns, evaluated with the es_AR locale
pub const LOCALE_FORMAT: &str = "%A, %-d de %B de %Y, %I:%M:%S";
pub const ZONE_FORMAT: &str = "%Z";
pub const NUMERIC_FORMAT: &str = "%d/%m/%Y, %H:%M:%S %Z";
pub const ISO_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
pub const ISO_WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";
pub const ISO_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

// chrono's es_AR data has empty AM/PM strings, so `%p` cannot be used
pub const AM_MARKER: &str = "a. m.";
pub const PM_MARKER: &str = "p. m.";

pub const UTC_TIMEZONE: &str = "UTC";
pub const DEFAULT_TIMEZONE: &str = "America/Argentina/Buenos_Aires";

/// Available resource URIs for the Time MCP Server
pub const AVAILABLE_RESOURCES: &[&str] = &["time://status", "time://help"];

/// Derive a human readable location from a timezone identifier
///
/// Any Argentine zone is reported as "Argentina"; other zones use their last
/// path segment with underscores turned into spaces.
///
/// # Examples
///
/// `America/New_York` becomes `New York`, `UTC` stays `UTC`.
pub fn location_label(timezone: &str) -> String {
    if timezone.contains("Argentina") {
        return "Argentina".to_string();
    }

    timezone
        .rsplit('/')
        .next()
        .unwrap_or(timezone)
        .replace('_', " ")
}
