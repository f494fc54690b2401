/// Backend page size for post listings.
pub const PAGE_SIZE: u64 = 12;

/// Pages needed to show `count` items: ceiling division by [`PAGE_SIZE`].
///
/// A zero count still renders as one (empty) page, so page controls always
/// have something to point at.
pub fn total_pages(count: u64) -> u32 {
    if count == 0 {
        1
    } else {
        count.div_ceil(PAGE_SIZE) as u32
    }
}
