use parlance::domain::{InvalidLanguageCode, LanguageCode};

#[test]
fn given_uppercase_code_when_parsing_then_lowercases_primary_subtag() {
    let code = LanguageCode::parse(" FR ").unwrap();

    assert_eq!(code.as_str(), "fr");
}

#[test]
fn given_regional_code_when_parsing_then_keeps_region() {
    let dashed = LanguageCode::parse("zh-CN").unwrap();
    let underscored = LanguageCode::parse("pt_BR").unwrap();

    assert_eq!(dashed.as_str(), "zh-CN");
    assert_eq!(dashed.primary(), "zh");
    assert_eq!(underscored.as_str(), "pt-BR");
}

#[test]
fn given_malformed_codes_when_parsing_then_returns_error() {
    for raw in ["", "e", "english", "e1", "en-", "en-toolong", "fr us"] {
        assert_eq!(
            LanguageCode::parse(raw),
            Err(InvalidLanguageCode(raw.to_string())),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn given_same_primary_language_when_comparing_then_matches() {
    let code = LanguageCode::parse("en").unwrap();

    assert!(code.same_language("en-US"));
    assert!(code.same_language("EN"));
    assert!(!code.same_language("fr"));
    assert!(!code.same_language("not a code"));
}

#[test]
fn given_regional_target_when_comparing_then_only_that_variant_matches() {
    let code = LanguageCode::parse("zh-TW").unwrap();

    assert!(code.same_language("zh-tw"));
    assert!(!code.same_language("zh"));
    assert!(!code.same_language("zh-CN"));
}

#[test]
fn given_no_code_when_defaulting_then_returns_english() {
    assert_eq!(LanguageCode::default().as_str(), "en");
}

#[test]
fn given_string_when_parsing_via_from_str_then_matches_parse() {
    let code: LanguageCode = "hi".parse().unwrap();

    assert_eq!(code, LanguageCode::parse("hi").unwrap());
    assert_eq!(code.to_string(), "hi");
}
