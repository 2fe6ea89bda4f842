use std::fmt;

use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;

use crate::zone;

/// The current instant as observed in the host's local timezone.
///
/// Holds the calendar date and time of day at a fixed UTC offset, plus the
/// zone's display name for that instant. Built once at invocation, rendered,
/// and dropped; never mutated.
#[derive(Clone, Debug)]
pub struct LocalTimestamp {
    datetime: DateTime<FixedOffset>,
    zone_name: String,
}

impl LocalTimestamp {
    /// Read the system clock and attach the local timezone.
    pub fn now() -> Self {
        match zone::system() {
            Some(tz) => Self::from_zoned(Utc::now().with_timezone(&tz)),
            // No resolvable zone name; keep the correct offset and leave
            // the name empty, matching what the platform reports.
            None => Self {
                datetime: Local::now().fixed_offset(),
                zone_name: String::new(),
            },
        }
    }

    fn from_zoned(zoned: DateTime<Tz>) -> Self {
        // `%Z` on a zoned datetime yields the DST-aware abbreviation for
        // this instant (e.g. PDT vs PST), or an offset label for zones
        // without one.
        let zone_name = zoned.format("%Z").to_string();
        Self {
            datetime: zoned.fixed_offset(),
            zone_name,
        }
    }
}

impl fmt::Display for LocalTimestamp {
    /// Render as `YYYY-MM-DD HH:MM:SS <TZ_NAME> (<±HHMM>)`.
    ///
    /// All numeric fields are zero-padded, the clock is 24-hour, and the
    /// offset carries no colon. An empty zone name leaves two adjacent
    /// spaces rather than collapsing the field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.datetime.format("%Y-%m-%d %H:%M:%S"),
            self.zone_name,
            self.datetime.format("%z"),
        )
    }
}
