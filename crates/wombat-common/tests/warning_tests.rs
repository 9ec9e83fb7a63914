//! Integration tests for the deduplicated warning system.
//!
//! The warning set is process-global and `clear_warnings` wipes all of it,
//! so the whole lifecycle is exercised from a single test.

use wombat_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_warning_lifecycle() {
    assert!(!has_warned("TEST", "first message"));
    warn_once("TEST", "first message");
    assert!(has_warned("TEST", "first message"));

    // A second call is a no-op.
    warn_once("TEST", "first message");
    assert!(has_warned("TEST", "first message"));

    // Warnings are keyed by component as well as text.
    warn_once("CSS", "shared text");
    assert!(has_warned("CSS", "shared text"));
    assert!(!has_warned("CLI", "shared text"));

    clear_warnings();
    assert!(!has_warned("TEST", "first message"));
    assert!(!has_warned("CSS", "shared text"));
}
