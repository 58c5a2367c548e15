use chrono::NaiveDate;
use librarian_catalog::*;

fn sample() -> Component {
    Component {
        id: 7,
        name: "Singleton".to_string(),
        pattern_name: Some("Creational".to_string()),
        pattern_category: Some("Utility".to_string()),
        language: Some("Java".to_string()),
        description: None,
        code_snippet: Some("class S{}".to_string()),
        author: None,
        date_added: NaiveDate::from_ymd_opt(2024, 3, 9),
    }
}

#[test]
fn accessors_default_to_empty() {
    let c = sample();
    assert_eq!(c.pattern(), "Creational");
    assert_eq!(c.language(), "Java");
    assert_eq!(c.author(), "");
    assert_eq!(c.date_label(), "2024-03-09");
}

#[test]
fn unknown_date_is_blank() {
    let c = Component {
        date_added: None,
        ..sample()
    };
    assert_eq!(c.date_label(), "");
    assert!(serde_json::to_value(c).unwrap()["date_added"].is_null());
}

#[test]
fn date_serializes_as_iso_day() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["date_added"], "2024-03-09");
    assert_eq!(json["id"], 7);
    assert!(json["author"].is_null());
}

#[test]
fn vocabularies_are_case_sensitive() {
    assert!(is_known(PATTERN_TYPES, "Creational"));
    assert!(!is_known(PATTERN_TYPES, "creational"));
    assert!(is_known(LANGUAGES, "C++"));
    assert!(!is_known(LANGUAGES, "Rust"));
    assert!(is_known(CATEGORIES, "Other"));
}
