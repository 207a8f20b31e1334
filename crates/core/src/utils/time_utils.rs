use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Default timezone for "last update" labels.
pub const DEFAULT_LABEL_TZ: Tz = chrono_tz::UTC;

/// Renders an instant as a 12-hour clock label, e.g. `02:05 PM`.
///
/// This is the single source of truth for turning an observation time
/// into the text shown next to a price.
pub fn update_label(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%I:%M %p").to_string()
}
