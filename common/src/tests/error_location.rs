use crate::ErrorLocation;

/// **VALUE**: Verifies that `ErrorLocation::here()` reports the line of its caller.
///
/// **WHY THIS MATTERS**: Every client error carries a location; if `here()` reported its own
/// line instead of the caller's, all errors would point into this crate.
#[test]
fn given_here_when_called_then_captures_this_file_and_column() {
    // GIVEN / WHEN: Capturing the current location
    let location = ErrorLocation::here();

    // THEN: File is this test file and column is populated
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert!(location.column > 0, "Should capture column number");
}

#[test]
fn given_tracked_helper_when_called_twice_then_lines_are_sequential() {
    #[track_caller]
    fn capture() -> ErrorLocation {
        ErrorLocation::here()
    }

    let first = capture();
    let second = capture();

    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line, "Lines should be sequential");
}

#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    let location = ErrorLocation {
        file: "src/pop_client/mod.rs",
        line: 42,
        column: 7,
    };

    assert_eq!(location.to_string(), "[src/pop_client/mod.rs:42:7]");
}
