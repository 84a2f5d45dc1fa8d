use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

/// Read settings from the default location.
///
/// A missing file is not an error and yields defaults.
pub(crate) fn load_settings() -> Result<SettingsData, SettingsError> {
    load_settings_from_path(&settings_path())
}

/// Read settings for startup, falling back to defaults on any failure.
pub(crate) fn load_initial() -> SettingsData {
    match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!(
                "settings from {} ignored: {err}",
                settings_path().display()
            );
            SettingsData::default()
        },
    }
}

fn load_settings_from_path(path: &Path) -> Result<SettingsData, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(SettingsData::default());
        },
        Err(err) => return Err(err.into()),
    };

    SettingsData::from_json(&data)
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("pagenav")
            .join("settings.json");
    }

    std::env::temp_dir().join("pagenav").join("settings.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    #[test]
    fn given_missing_file_when_load_then_returns_defaults() {
        let root = test_temp_dir("missing");

        let loaded = load_settings_from_path(&root.join("settings.json"))
            .expect("missing file is not an error");

        assert_eq!(loaded, SettingsData::default());
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_pages_are_read() {
        let root = test_temp_dir("valid");
        let path = root.join("settings.json");
        fs::write(
            &path,
            r#"{ "pages": [{ "id": "x", "title": "Solo", "icon": "info" }] }"#,
        )
        .expect("test payload should be written");

        let loaded =
            load_settings_from_path(&path).expect("settings should load");

        assert_eq!(loaded.pages().len(), 1);
        assert_eq!(loaded.pages()[0].title(), "Solo");
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_json_error_is_returned() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("settings.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let err = load_settings_from_path(&path)
            .expect_err("malformed payload is rejected");

        assert!(matches!(err, SettingsError::Json(_)));
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_settings_path_then_file_is_named_settings_json() {
        let path = settings_path();
        assert!(path.ends_with("pagenav/settings.json"));
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "pagenav-settings-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
