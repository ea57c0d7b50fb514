use answerbank_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = AnswerbankConfig::from_toml("").unwrap();

    assert_eq!(config.knowledge.path, "knowledge_base.json");
    assert_eq!(config.knowledge.duplicate_policy, DuplicatePolicy::LastWins);

    assert_eq!(config.embedding.provider, "hashed");
    assert_eq!(config.embedding.dimensions, 300);
    assert_eq!(config.embedding.batch_size, 50);
    assert_eq!(config.embedding.query_cache_size, 1_000);

    assert!(config.similarity.max_distance.is_none());
    assert_eq!(config.pool.workers, 5);

    assert!(config.sentiment.enabled);
    assert_eq!(config.sentiment.capacity, 1_000);

    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[knowledge]
path = "/srv/faq.json"

[embedding]
batch_size = 10

[similarity]
max_distance = 0.8
"#;
    let config = AnswerbankConfig::from_toml(toml).unwrap();
    assert_eq!(config.knowledge.path, "/srv/faq.json");
    assert_eq!(config.embedding.batch_size, 10);
    // Non-overridden fields keep defaults
    assert_eq!(config.embedding.dimensions, 300);
    assert_eq!(config.similarity.max_distance, Some(0.8));
    assert_eq!(config.pool.workers, 5);
}

#[test]
fn config_rejects_invalid_toml() {
    let err = AnswerbankConfig::from_toml("[pool\nworkers = 3").unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn config_rejects_wrong_types() {
    let err = AnswerbankConfig::from_toml("[pool]\nworkers = \"five\"").unwrap_err();
    assert!(matches!(err, answerbank_core::errors::ConfigError::Parse { .. }));
}

#[test]
fn config_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnswerbankConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, answerbank_core::errors::ConfigError::Io { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = AnswerbankConfig::default();
    config.pool.workers = 2;
    config.similarity.max_distance = Some(1.5);
    let text = config.to_toml().unwrap();
    let back = AnswerbankConfig::from_toml(&text).unwrap();
    assert_eq!(back.pool.workers, 2);
    assert_eq!(back.similarity.max_distance, Some(1.5));
}
