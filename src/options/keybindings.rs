use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// A `[keybindings.bindings]` table only needs the actions it changes;
/// every other action keeps its default keys. An action may take a single
/// key or a list:
///
/// ```toml
/// [keybindings.bindings]
/// move_forward = "ArrowUp"
/// move_down = ["KeyC", "ControlLeft"]
/// ```
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `Exit` → `["Escape"]`).
    #[serde(deserialize_with = "overlay_defaults")]
    pub bindings: HashMap<KeyAction, Vec<String>>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            bindings: default_bindings(),
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

fn default_bindings() -> HashMap<KeyAction, Vec<String>> {
    let keys = |keys: &[&str]| -> Vec<String> {
        keys.iter().map(|&k| k.to_owned()).collect()
    };
    HashMap::from([
        (KeyAction::MoveForward, keys(&["KeyW"])),
        (KeyAction::MoveBackward, keys(&["KeyS"])),
        (KeyAction::MoveLeft, keys(&["KeyA"])),
        (KeyAction::MoveRight, keys(&["KeyD"])),
        (KeyAction::MoveUp, keys(&["Space"])),
        (KeyAction::MoveDown, keys(&["ShiftLeft", "ShiftRight"])),
        (KeyAction::ToggleCursorCapture, keys(&["Tab"])),
        (KeyAction::Exit, keys(&["Escape"])),
    ])
}

/// One key or several, as written in a preset.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeyList {
    One(String),
    Many(Vec<String>),
}

impl From<KeyList> for Vec<String> {
    fn from(list: KeyList) -> Self {
        match list {
            KeyList::One(key) => vec![key],
            KeyList::Many(keys) => keys,
        }
    }
}

/// Start from the default bindings and apply the preset's entries on top.
fn overlay_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<KeyAction, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<KeyAction, KeyList>::deserialize(deserializer)?;
    let mut bindings = default_bindings();
    for (action, keys) in overrides {
        assign(&mut bindings, action, keys.into());
    }
    Ok(bindings)
}

/// Give `keys` to `action`, taking them away from any other action.
fn assign(
    bindings: &mut HashMap<KeyAction, Vec<String>>,
    action: KeyAction,
    keys: Vec<String>,
) {
    for (other, other_keys) in bindings.iter_mut() {
        if *other != action {
            other_keys.retain(|k| !keys.contains(k));
        }
    }
    let _ = bindings.insert(action, keys);
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// A key listed under several actions resolves to the first in
    /// [`KeyAction::ALL`] order.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for action in KeyAction::ALL {
            for key in self.bindings.get(&action).into_iter().flatten() {
                let _ = self.key_to_action.entry(key.clone()).or_insert(action);
            }
        }
    }

    /// Bind `action` to `key` alone, replacing its previous keys. The key is
    /// removed from any other action.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        assign(&mut self.bindings, action, vec![key.into()]);
        self.rebuild_reverse_map();
    }

    /// Keys currently bound to `action`.
    #[must_use]
    pub fn keys(&self, action: KeyAction) -> &[String] {
        self.bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_shift_keys_move_down() {
        let bindings = KeybindingOptions::default();
        assert_eq!(bindings.lookup("ShiftLeft"), Some(KeyAction::MoveDown));
        assert_eq!(bindings.lookup("ShiftRight"), Some(KeyAction::MoveDown));
        assert_eq!(bindings.keys(KeyAction::MoveDown).len(), 2);
    }

    #[test]
    fn bind_steals_key_from_other_action() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "KeyS");
        assert_eq!(bindings.lookup("KeyS"), Some(KeyAction::MoveForward));
        assert_eq!(bindings.lookup("KeyW"), None);
        assert!(bindings.keys(KeyAction::MoveBackward).is_empty());
    }

    #[test]
    fn every_action_has_a_default_key() {
        let bindings = KeybindingOptions::default();
        for action in KeyAction::ALL {
            assert!(!bindings.keys(action).is_empty(), "{action:?} unbound");
        }
    }
}
