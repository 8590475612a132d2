use figment::Jail;
use fit_config::{ConfigError, DefaultFormat, FitConfig};
use fit_core::Clock;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("FITTRACK_GENERAL__FORMAT", "json");
        jail.set_env("FITTRACK_GENERAL__CLOCK", "utc");
        jail.set_env("FITTRACK_SESSION__USER_ID", "from-env");

        let config = FitConfig::load().expect("config loads");
        assert_eq!(config.general.format, DefaultFormat::Json);
        assert_eq!(config.general.clock, Clock::Utc);
        assert_eq!(config.session.user_id, "from-env");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".fittrack")?;
        jail.create_file(
            ".fittrack/config.toml",
            r#"
[session]
user_id = "from-toml"
show_examples = false
"#,
        )?;
        jail.set_env("FITTRACK_SESSION__USER_ID", "from-env");

        let config = FitConfig::load().expect("config loads");
        assert_eq!(config.session.user_id, "from-env");
        assert!(!config.session.show_examples);
        Ok(())
    });
}

#[test]
fn invalid_env_clock_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("FITTRACK_GENERAL__CLOCK", "martian");

        let err = FitConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)), "{err}");
        assert!(err.to_string().contains("martian"), "{err}");
        Ok(())
    });
}
