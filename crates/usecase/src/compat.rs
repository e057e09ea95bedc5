//! Sentinel-value view of a query result, for callers that expect a plain
//! integer with `-1` meaning "could not open".

use file_size_shared_kernel::{FileSize, Result};

/// Returned in place of a size when the query fails.
pub const SENTINEL_NOT_ACCESSIBLE: i64 = -1;

/// Legacy diagnostic line printed by compatibility output on failure.
pub const NOT_FOUND_DIAGNOSTIC: &str = "File Not Found!";

/// Collapses a query result into a signed integer. Every failure maps to
/// [`SENTINEL_NOT_ACCESSIBLE`], so a valid size is never negative.
pub fn to_sentinel(result: &Result<FileSize>) -> i64 {
    match result {
        Ok(size) => size.as_signed(),
        Err(_) => SENTINEL_NOT_ACCESSIBLE,
    }
}
