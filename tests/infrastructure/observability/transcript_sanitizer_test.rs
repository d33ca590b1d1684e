use parlance::infrastructure::observability::sanitize_transcript;

#[test]
fn given_blank_transcript_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_transcript("   "), "[EMPTY]");
}

#[test]
fn given_short_transcript_when_sanitizing_then_returns_it_trimmed() {
    assert_eq!(sanitize_transcript("  hello there "), "hello there");
}

#[test]
fn given_long_transcript_when_sanitizing_then_truncates_on_char_boundary() {
    let text = "é".repeat(100);

    let sanitized = sanitize_transcript(&text);

    assert!(sanitized.starts_with(&"é".repeat(80)));
    assert!(sanitized.ends_with("... (100 chars total)"));
}

#[test]
fn given_spoken_card_number_when_sanitizing_then_masks_digits() {
    let sanitized = sanitize_transcript("my card is 4111111111111111 and pin 1234");

    assert_eq!(sanitized, "my card is ################ and pin 1234");
}

#[test]
fn given_token_in_transcript_when_sanitizing_then_redacts_it() {
    let sanitized = sanitize_transcript("use token=abc.def to log in");

    assert_eq!(sanitized, "use token=[REDACTED] to log in");
}
