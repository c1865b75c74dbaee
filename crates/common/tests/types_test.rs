use ai_tools_common::types::*;
use strum::IntoEnumIterator;

#[test]
fn test_language_allow_list() {
    let names: Vec<&str> = ProgrammingLanguage::iter().map(|l| l.as_str()).collect();
    assert_eq!(
        names,
        vec!["javascript", "python", "java", "cpp", "csharp", "php", "ruby", "go", "rust", "swift"]
    );
    for language in ProgrammingLanguage::iter() {
        assert_eq!(language.to_string(), language.as_str());
    }
}

#[test]
fn test_defaults() {
    assert_eq!(ProgrammingLanguage::default(), ProgrammingLanguage::Javascript);
    assert_eq!(ExplanationDepth::default(), ExplanationDepth::Detailed);
    assert_eq!(ExperienceLevel::default(), ExperienceLevel::Beginner);
}

#[test]
fn test_serde_uses_lowercase_names() {
    let depth: ExplanationDepth = serde_json::from_str("\"advanced\"").unwrap();
    assert_eq!(depth, ExplanationDepth::Advanced);

    let level = serde_json::to_string(&ExperienceLevel::Intermediate).unwrap();
    assert_eq!(level, "\"intermediate\"");

    assert!(serde_json::from_str::<ProgrammingLanguage>("\"JavaScript\"").is_err());
}
