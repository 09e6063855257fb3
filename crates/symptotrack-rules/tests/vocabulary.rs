use std::io::Write;

use symptotrack_rules::RuleSet;
use symptotrack_rules::error::RulesError;
use symptotrack_rules::vocabulary::DEFAULT_VERSION;

#[test]
fn default_rule_set_is_valid() {
    let rule_set = RuleSet::default();
    rule_set.validate().unwrap();
    assert_eq!(rule_set.version, DEFAULT_VERSION);
    assert_eq!(rule_set.critical_pain_threshold, 7);
    assert_eq!(rule_set.spike_threshold, 2);
    assert!(rule_set.critical_tags.contains(&"chest pain".to_string()));
}

#[test]
fn parses_rule_set_json() {
    let json = r#"{
        "version": 3,
        "danger_words": ["sharp", "stabbing"],
        "critical_tags": ["chest pain"],
        "critical_pain_threshold": 8,
        "spike_threshold": 3
    }"#;
    let rule_set = RuleSet::from_json(json).unwrap();
    assert_eq!(rule_set.version, 3);
    assert_eq!(rule_set.danger_words, vec!["sharp", "stabbing"]);
}

#[test]
fn blank_danger_word_is_rejected() {
    let rule_set = RuleSet {
        danger_words: vec!["sharp".to_string(), "  ".to_string()],
        ..RuleSet::default()
    };
    assert!(matches!(
        rule_set.validate(),
        Err(RulesError::InvalidRuleSet(_))
    ));
}

#[test]
fn case_insensitive_duplicate_tag_is_rejected() {
    let rule_set = RuleSet {
        critical_tags: vec!["Chest Pain".to_string(), "chest pain".to_string()],
        ..RuleSet::default()
    };
    let err = rule_set.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&RuleSet::default()).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = RuleSet::load(file.path()).unwrap();
    assert_eq!(loaded, RuleSet::default());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RuleSet::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RulesError::Io(_)));
}
