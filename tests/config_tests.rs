use mindspace_tui::config::{Config, PRIVACY_MODES, privacy_description};

#[test]
fn empty_config_file_loads_with_defaults() {
    let config: Config = toml::from_str("").expect("empty config parses");

    assert_eq!(config.key_bindings.quit, "q");
    assert_eq!(config.key_bindings.submit, "Ctrl+s");
    assert_eq!(config.current_theme, "default");
    assert!(config.preferences.daily_reminder);
    assert_eq!(config.preferences.privacy, "private");
}

#[test]
fn partial_config_keeps_unspecified_defaults() {
    let toml = r#"
        current_theme = "light"

        [key_bindings]
        quit = "Q"

        [preferences]
        daily_reminder = false
    "#;
    let config: Config = toml::from_str(toml).expect("partial config parses");

    assert_eq!(config.current_theme, "light");
    assert_eq!(config.key_bindings.quit, "Q");
    // Unspecified fields fall back to their defaults
    assert_eq!(config.key_bindings.help, "F1");
    assert!(!config.preferences.daily_reminder);
    assert!(config.preferences.notifications);
}

#[test]
fn config_survives_a_serialize_round_trip() {
    let mut config = Config::default();
    config.preferences.privacy = "research".to_string();
    config.key_bindings.category = "f".to_string();

    let serialized = toml::to_string_pretty(&config).expect("config serializes");
    let reloaded: Config = toml::from_str(&serialized).expect("config reloads");

    assert_eq!(reloaded.preferences.privacy, "research");
    assert_eq!(reloaded.key_bindings.category, "f");
    assert_eq!(reloaded.config_version, config.config_version);
}

#[test]
fn privacy_modes_cycle_through_all_options() {
    let mut config = Config::default();
    assert_eq!(config.preferences.privacy, PRIVACY_MODES[0]);

    config.cycle_privacy();
    assert_eq!(config.preferences.privacy, "anonymous");
    config.cycle_privacy();
    assert_eq!(config.preferences.privacy, "research");
    config.cycle_privacy();
    assert_eq!(config.preferences.privacy, "private");

    // Every mode has a human-readable description
    for mode in PRIVACY_MODES {
        assert!(!privacy_description(mode).is_empty());
    }
}
