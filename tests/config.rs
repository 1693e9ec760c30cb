#[cfg(test)]
mod tests {
    use hmcalc::libs::config::{Config, CONFIG_FILE_NAME, TIME_FORMATS};
    use hmcalc::libs::data_storage::DataStorage;
    use hmcalc::libs::time_value::TimeFormat;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the user's home/appdata directory at a temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        time_format: TimeFormat,
        show_trace: bool,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                temp_dir,
                time_format: TimeFormat::HoursMinutesAndSeconds,
                show_trace: true,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.time_format, TimeFormat::HoursAndMinutes);
        assert!(!config.show_trace);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            time_format: TimeFormat::HoursMinutesAndSeconds,
            show_trace: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"time_format\":\"hours_minutes_and_seconds\""));
        assert!(json.contains("\"show_trace\":true"));

        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_json::from_str("{\"show_trace\": true}").unwrap();
        assert_eq!(config.time_format, TimeFormat::HoursAndMinutes);
        assert!(config.show_trace);

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_wizard_preselects_configured_format() {
        assert_eq!(TIME_FORMATS.len(), 2);
        assert_eq!(Config::default().time_format_index(), 0);

        let config = Config {
            time_format: TimeFormat::HoursMinutesAndSeconds,
            show_trace: false,
        };
        assert_eq!(TIME_FORMATS[config.time_format_index()], TimeFormat::HoursMinutesAndSeconds);
    }

    #[test]
    fn test_unknown_time_format_is_rejected() {
        assert!(serde_json::from_str::<Config>("{\"time_format\": \"minutes\"}").is_err());
    }

    // HOME is process-wide, so everything touching the file system runs in
    // one test.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_lifecycle(ctx: &mut ConfigTestContext) {
        // Nothing stored yet
        assert_eq!(Config::read().unwrap(), Config::default());
        assert!(!Config::delete().unwrap());

        let config = Config {
            time_format: ctx.time_format,
            show_trace: ctx.show_trace,
        };
        config.save().unwrap();

        let storage = DataStorage::new();
        assert!(storage.base_path().starts_with(ctx.temp_dir.path()));
        assert!(storage.base_path().ends_with("hmcalc"));

        let path = storage.get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());
        assert_eq!(Config::read().unwrap(), config);

        // Partial file
        fs::write(&path, "{\"show_trace\": true}").unwrap();
        let partial = Config::read().unwrap();
        assert_eq!(partial.time_format, TimeFormat::HoursAndMinutes);
        assert!(partial.show_trace);

        // Corrupted file
        fs::write(&path, "{ not json").unwrap();
        let error = Config::read().unwrap_err();
        let report = format!("{error:#}");
        assert_eq!(report.matches("Failed to parse configuration").count(), 1);
        assert!(report.contains(&path.display().to_string()));
        assert!(report.contains("line 1"));
        assert_eq!(Config::read_or_default(), Config::default());

        assert!(Config::delete().unwrap());
        assert!(!path.exists());
        assert!(!Config::delete().unwrap());
    }
}
