//! Runtime configuration with TOML preset support.
//!
//! Window, camera, projection and keybinding settings are consolidated
//! here. Options serialize to/from TOML so a lesson can be started from a
//! preset file (`freelook camera_cubes --preset slow`, which reads
//! `presets/slow.toml`).

mod camera;
mod keybindings;
mod projection;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::FreelookError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Window size, title and presentation.
    pub window: WindowOptions,
    /// Initial camera placement and control tuning.
    pub camera: CameraOptions,
    /// Clip planes for the perspective projection.
    pub projection: ProjectionOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, FreelookError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FreelookError> {
        let content = std::fs::read_to_string(path).map_err(FreelookError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FreelookError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FreelookError::Io)?;
        }
        std::fs::write(path, content).map_err(FreelookError::Io)
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
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 7.5
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 7.5);
        // Everything else should be default
        assert_eq!(opts.camera.mouse_sensitivity, 0.1);
        assert_eq!(opts.camera.yaw, -90.0);
        assert_eq!(opts.window.width, 800);
        assert_eq!(opts.projection.zfar, 100.0);
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
    }

    #[test]
    fn partial_bindings_keep_other_defaults() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
exit = "KeyQ"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        let keys = &opts.keybindings;
        assert_eq!(keys.lookup("ArrowUp"), Some(KeyAction::MoveForward));
        assert_eq!(keys.lookup("KeyQ"), Some(KeyAction::Exit));
        assert_eq!(keys.lookup("KeyW"), None);
        assert_eq!(keys.lookup("Escape"), None);

        assert_eq!(keys.lookup("KeyS"), Some(KeyAction::MoveBackward));
        assert_eq!(keys.lookup("KeyA"), Some(KeyAction::MoveLeft));
        assert_eq!(keys.lookup("KeyD"), Some(KeyAction::MoveRight));
        assert_eq!(keys.lookup("Space"), Some(KeyAction::MoveUp));
        assert_eq!(keys.lookup("ShiftLeft"), Some(KeyAction::MoveDown));
        assert_eq!(
            keys.lookup("Tab"),
            Some(KeyAction::ToggleCursorCapture)
        );
    }

    #[test]
    fn rebinding_a_default_key_moves_it() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = ["KeyW", "KeyS"]
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        let keys = &opts.keybindings;
        assert_eq!(keys.lookup("KeyS"), Some(KeyAction::MoveForward));
        assert!(keys.keys(KeyAction::MoveBackward).is_empty());
    }

    #[test]
    fn shipped_presets_parse() {
        let slow =
            Options::from_toml_str(include_str!("../../presets/slow.toml"))
                .unwrap();
        assert_eq!(slow.camera.movement_speed, 1.0);
        assert_eq!(slow.keybindings.lookup("KeyE"), Some(KeyAction::MoveUp));
        assert_eq!(
            slow.keybindings.lookup("ShiftRight"),
            Some(KeyAction::MoveDown)
        );
        assert_eq!(
            slow.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );

        let arrows =
            Options::from_toml_str(include_str!("../../presets/arrows.toml"))
                .unwrap();
        assert_eq!(
            arrows.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::MoveLeft)
        );
        assert_eq!(arrows.keybindings.lookup("Escape"), Some(KeyAction::Exit));
        assert_eq!(arrows.keybindings.lookup("KeyQ"), Some(KeyAction::Exit));
        assert_eq!(arrows.camera, CameraOptions::default());
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera]\nyaw = \"left\"").unwrap_err();
        assert!(matches!(err, FreelookError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(opts.keybindings.lookup("Space"), Some(KeyAction::MoveUp));
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Exit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_updates_reverse_lookup() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveUp, "KeyE");
        assert_eq!(bindings.lookup("KeyE"), Some(KeyAction::MoveUp));
        assert_eq!(bindings.lookup("Space"), None);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("freelook-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.zoom = 30.0;
        opts.window.title = "Preset".into();

        opts.save(&dir.join("narrow.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["narrow".to_owned()]);
        let loaded = Options::load(&dir.join("narrow.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/freelook.toml"))
            .unwrap_err();
        assert!(matches!(err, FreelookError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("window"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("projection"));
        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("mouse_sensitivity").is_some());
        assert!(camera.get("zoom").is_some());
        assert!(camera.get("position").is_none());
    }
}
