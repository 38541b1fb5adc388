use chrono::{DateTime, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{allocator::IdAllocator, error::AppError};


fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0).unwrap()
}
