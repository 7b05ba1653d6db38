use time::{Date, OffsetDateTime, UtcOffset};

/// The local UTC offset, or UTC when it cannot be determined.
/// Call before any other thread is spawned.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

pub fn local_today(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}
