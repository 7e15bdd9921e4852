use doclink::config::*;
use tempfile::TempDir;

#[test]
fn test_default_config_grammar() {
    let config = DocLinkConfig::default();
    assert!(config.mapping_types.iter().any(|t| t == "Hash"));
    assert!(config.tuple_markers.iter().any(|t| t == "Tuple"));
    assert_eq!(config.default_collection, "Array");
    assert_eq!(config.symbols_path, DEFAULT_SYMBOLS_PATH);
}

#[test]
fn test_missing_config_yields_default() {
    let dir = TempDir::new().unwrap();
    let loaded = load_config(dir.path()).unwrap();
    assert_eq!(loaded, DocLinkConfig::default());
}

#[test]
fn test_save_and_load_config() {
    let dir = TempDir::new().unwrap();
    let config = DocLinkConfig {
        mapping_types: vec!["Hash".to_string(), "Map".to_string()],
        ..DocLinkConfig::default()
    };
    save_config(dir.path(), &config).unwrap();
    assert!(get_config_path(dir.path()).exists());
    let loaded = load_config(dir.path()).unwrap();
    assert_eq!(config, loaded);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        get_config_path(dir.path()),
        "symbols_path = \"build/symbols.json\"\n",
    )
    .unwrap();
    let loaded = load_config(dir.path()).unwrap();
    assert_eq!(loaded.symbols_path, "build/symbols.json");
    assert_eq!(loaded.default_collection, "Array");
    assert!(loaded.symbols_file(dir.path()).ends_with("build/symbols.json"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(get_config_path(dir.path()), "version = [").unwrap();
    let err = load_config(dir.path()).unwrap_err();
    assert!(err.to_string().contains("doclink.toml"));
}

#[test]
fn test_grammar_options_follow_config() {
    let config = DocLinkConfig {
        tuple_markers: vec!["Pair".to_string()],
        ..DocLinkConfig::default()
    };
    let options = config.grammar_options();
    assert_eq!(options.tuple_markers, vec!["Pair".to_string()]);
    assert_eq!(options.mapping_types, config.mapping_types);
}
