#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_is_empty_outside_browser() {
    assert_eq!(read("video_notes.cancel_policy"), None);
    assert_eq!(read(""), None);
}
