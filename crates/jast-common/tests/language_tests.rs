//! Tests for language level parsing and ordering.

use super::*;

#[test]
fn test_levels_are_ordered() {
    assert!(LanguageLevel::Java9 > LanguageLevel::Java8);
    assert!(LanguageLevel::Java1_2.is_at_least(LanguageLevel::Java1_2));
    assert!(!LanguageLevel::Java1_1.is_at_least(LanguageLevel::Java1_2));
    assert_eq!(LanguageLevel::ALL.last(), Some(&LanguageLevel::CURRENT));
}

#[test]
fn test_parse_release_spellings() {
    assert_eq!("8".parse::<LanguageLevel>(), Ok(LanguageLevel::Java8));
    assert_eq!("1.8".parse::<LanguageLevel>(), Ok(LanguageLevel::Java8));
    assert_eq!("java9".parse::<LanguageLevel>(), Ok(LanguageLevel::Java9));
    assert_eq!("JAVA_1_4".parse::<LanguageLevel>(), Ok(LanguageLevel::Java1_4));
    assert_eq!("1.0".parse::<LanguageLevel>(), Ok(LanguageLevel::Java1_0));
    assert!("42".parse::<LanguageLevel>().is_err());
}

#[test]
fn test_serde_names() {
    let level: LanguageLevel = serde_json::from_str("\"java1_2\"").expect("valid level");
    assert_eq!(level, LanguageLevel::Java1_2);
    assert_eq!(
        serde_json::to_string(&LanguageLevel::Java17).expect("serializable"),
        "\"java17\""
    );
}

#[test]
fn test_display() {
    assert_eq!(LanguageLevel::Java1_4.to_string(), "Java 1.4");
    assert_eq!(LanguageLevel::default(), LanguageLevel::Java11);
}
