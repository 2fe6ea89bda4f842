use chrono_tz::Tz;

/// Resolve the host's configured timezone against the bundled tz database.
///
/// Returns `None` when the platform cannot name a local zone or the name is
/// unknown to the database; callers fall back to a plain UTC offset with no
/// zone label, which is what the platform itself reports on such hosts.
pub fn system() -> Option<Tz> {
    let name = iana_time_zone::get_timezone().ok()?;
    name.parse().ok()
}
