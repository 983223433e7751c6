use concierge::domain::ExtractedText;

#[test]
fn given_short_text_when_capping_then_keeps_text_and_counts() {
    let extracted = ExtractedText::capped("Quarterly revenue grew by ten percent.".to_string(), 100);

    assert_eq!(extracted.text, "Quarterly revenue grew by ten percent.");
    assert_eq!(extracted.word_count, 6);
    assert_eq!(extracted.char_count, 38);
    assert!(!extracted.truncated);
}

#[test]
fn given_text_longer_than_cap_when_capping_then_truncates_but_counts_full_text() {
    let raw = "word ".repeat(10);

    let extracted = ExtractedText::capped(raw, 12);

    assert_eq!(extracted.text, "word word wo");
    assert_eq!(extracted.char_count, 50);
    assert_eq!(extracted.word_count, 10);
    assert!(extracted.truncated);
}

#[test]
fn given_multibyte_text_when_capping_then_cuts_on_char_boundary() {
    let extracted = ExtractedText::capped("héllo wörld".to_string(), 4);

    assert_eq!(extracted.text, "héll");
    assert!(extracted.truncated);
}

#[test]
fn given_whitespace_only_text_when_checking_blank_then_returns_true() {
    let extracted = ExtractedText::capped(" \n\t ".to_string(), 100);

    assert!(extracted.is_blank());
}
