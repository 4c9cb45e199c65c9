use super::*;

// =============================================================
// Content-Range construction
// =============================================================

#[test]
fn content_range_is_inclusive_of_the_last_byte() {
    assert_eq!(content_range(0, 1024, 4096), "bytes 0-1023/4096");
}

#[test]
fn content_range_for_the_final_chunk_ends_at_total() {
    assert_eq!(content_range(4096, 1000, 5096), "bytes 4096-5095/5096");
}

#[test]
fn content_range_for_a_single_byte() {
    assert_eq!(content_range(10, 1, 11), "bytes 10-10/11");
}

// =============================================================
// committed-offset parsing
// =============================================================

#[test]
fn committed_offset_is_one_past_the_last_byte() {
    assert_eq!(parse_committed_offset(Some("bytes=0-524287")), 524_288);
}

#[test]
fn absent_range_header_means_nothing_committed() {
    assert_eq!(parse_committed_offset(None), 0);
}

#[test]
fn unreadable_range_header_means_nothing_committed() {
    assert_eq!(parse_committed_offset(Some("garbage")), 0);
    assert_eq!(parse_committed_offset(Some("bytes=0-")), 0);
}
