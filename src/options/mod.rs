//! Camera and input options with TOML preset support.
//!
//! The starting pose, look limits, projection, and key bindings are
//! consolidated here. Options serialize to/from TOML so a host can keep
//! named presets in a directory.

mod camera;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera pose, limits, and projection.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check that every section holds usable values.
    pub fn validate(&self) -> Result<(), FlycamError> {
        self.camera.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// The result is validated before it is returned.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)
    }

    /// Load the preset `name` from `dir`, logging the outcome.
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, FlycamError> {
        let path = dir.join(format!("{name}.toml"));
        match Self::load(&path) {
            Ok(options) => {
                log::info!("Loaded camera preset '{name}'");
                Ok(options)
            }
            Err(e) => {
                log::error!("Failed to load camera preset '{name}': {e}");
                Err(e)
            }
        }
    }

    /// Save these options as preset `name` in `dir`, logging the outcome.
    pub fn save_preset(&self, dir: &Path, name: &str) -> Result<(), FlycamError> {
        let path = dir.join(format!("{name}.toml"));
        match self.save(&path) {
            Ok(()) => {
                log::info!("Saved camera preset '{name}'");
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save camera preset '{name}': {e}");
                Err(e)
            }
        }
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::input::MoveAction;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("flycam-{tag}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
mouse_sensitivity = 0.2
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.mouse_sensitivity, 0.2);
        // Everything else should be default
        assert_eq!(opts.camera.position, [0.0, 0.0, 6.0]);
        assert_eq!(opts.camera.max_pitch, 89.0);
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(MoveAction::Forward));
    }

    #[test]
    fn keybindings_parse_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
ArrowUp = "forward"
Escape = "quit"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(MoveAction::Forward)
        );
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn default_options_are_valid() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cases: [fn(&mut CameraOptions); 6] = [
            |c| c.mouse_sensitivity = 0.0,
            |c| c.min_pitch = 89.5,
            |c| c.max_pitch = 95.0,
            |c| c.znear = 200.0,
            |c| c.yaw = f32::NAN,
            |c| c.move_speed = -1.0,
        ];
        for mutate in cases {
            let mut opts = Options::default();
            mutate(&mut opts.camera);
            assert!(matches!(
                opts.validate(),
                Err(FlycamError::InvalidOptions(_))
            ));
        }
    }

    #[test]
    fn save_then_load_preset() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.camera.position = [1.0, 2.0, 3.0];
        opts.camera.move_speed = 8.0;

        opts.save_preset(&dir, "overview").unwrap();
        opts.save_preset(&dir, "closeup").unwrap();

        assert_eq!(Options::list_presets(&dir), ["closeup", "overview"]);
        assert_eq!(Options::load_preset(&dir, "overview").unwrap(), opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_io_parse_and_validation_errors() {
        let dir = scratch_dir("errors");
        std::fs::create_dir_all(&dir).unwrap();

        let missing = Options::load(&dir.join("missing.toml"));
        assert!(matches!(missing, Err(FlycamError::Io(_))));

        let garbled = dir.join("garbled.toml");
        std::fs::write(&garbled, "[camera\nyaw = ").unwrap();
        assert!(matches!(
            Options::load(&garbled),
            Err(FlycamError::OptionsParse(_))
        ));

        let invalid = dir.join("invalid.toml");
        std::fs::write(&invalid, "[camera]\nzfar = -1.0\n").unwrap();
        assert!(matches!(
            Options::load(&invalid),
            Err(FlycamError::InvalidOptions(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("mouse_sensitivity").is_some());
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("position").is_none());
        assert!(camera.get("znear").is_none());
    }
}
