use std::collections::HashMap;

use threadfeed::app::ids::IdStrategy;
use threadfeed::config::{AppConfig, DEFAULT_MAX_TEXT_CHARS};

fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.id_strategy, IdStrategy::Uuid);
    assert_eq!(config.max_text_chars, DEFAULT_MAX_TEXT_CHARS);
}

#[test]
fn values_are_read_from_lookup() {
    let config = config_from(&[
        ("FEED_ID_STRATEGY", "sequential"),
        ("FEED_MAX_TEXT_CHARS", "280"),
    ])
    .unwrap();
    assert_eq!(config.id_strategy, IdStrategy::Sequential);
    assert_eq!(config.max_text_chars, 280);
}

#[test]
fn invalid_strategy_names_the_variable() {
    let err = config_from(&[("FEED_ID_STRATEGY", "snowflake")]).unwrap_err();
    assert!(err.to_string().starts_with("invalid FEED_ID_STRATEGY"), "{}", err);
}

#[test]
fn invalid_limit_is_rejected() {
    assert!(config_from(&[("FEED_MAX_TEXT_CHARS", "lots")]).is_err());
    assert!(config_from(&[("FEED_MAX_TEXT_CHARS", "0")]).is_err());
}
