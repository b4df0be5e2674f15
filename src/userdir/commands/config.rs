use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::config::DirectoryConfig;
use crate::error::{Result, UserdirError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = DirectoryConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = DirectoryConfig::load(dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| UserdirError::Api(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::new(MessageLevel::Info, val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = DirectoryConfig::load(dir)?;
            config.set(&key, &value).map_err(UserdirError::Api)?;
            config.save(dir)?;
            log::info!("config {} set", key);
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::new(
                MessageLevel::Success,
                format!("{} set to {}", key, display_val),
            ));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    #[test]
    fn set_persists_normalized_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("default-status".into(), "inactive".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "default-status set to Inactive");

        let shown = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().default_status, Status::Inactive);
    }

    #[test]
    fn show_key_reports_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("default-role".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "Admin");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path(), ConfigAction::ShowKey("colour".into())).unwrap_err();
        assert!(matches!(err, UserdirError::Api(ref msg) if msg.contains("colour")));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn invalid_value_is_an_error_and_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            dir.path(),
            ConfigAction::Set("default-role".into(), "root".into()),
        )
        .unwrap_err();
        assert!(matches!(err, UserdirError::Api(_)));
        assert!(!dir.path().join("config.json").exists());
    }
}
