use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Which physical key (winit `KeyCode` name) fires each globe toggle.
///
/// A `[keybindings.bindings]` table in an options file replaces the
/// defaults as a whole; actions it leaves out are unbound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Action to key code, e.g. `toggle_heatmap = "KeyH"`.
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }
}

fn default_bindings() -> HashMap<KeyAction, String> {
    [
        (KeyAction::ToggleConnections, "KeyC"),
        (KeyAction::ToggleRegions, "KeyG"),
        (KeyAction::ToggleHeatmap, "KeyH"),
        (KeyAction::ToggleParticles, "KeyP"),
        (KeyAction::ToggleTheme, "KeyT"),
        (KeyAction::ToggleAutoRotate, "KeyR"),
        (KeyAction::ResetView, "KeyQ"),
    ]
    .into_iter()
    .map(|(action, key)| (action, key.to_owned()))
    .collect()
}

impl KeybindingOptions {
    /// Action bound to `key`. When a key is bound twice the action listed
    /// first in [`KeyAction::ALL`] wins.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        KeyAction::ALL
            .into_iter()
            .find(|action| self.bindings.get(action).is_some_and(|k| k == key))
    }

    /// Keys bound to more than one action, sorted.
    #[must_use]
    pub fn conflicts(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for key in self.bindings.values() {
            *seen.entry(key.as_str()).or_default() += 1;
        }
        let mut keys: Vec<&str> = seen
            .into_iter()
            .filter_map(|(key, n)| (n > 1).then_some(key))
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Log every key that [`conflicts`](Self::conflicts) reports.
    pub fn warn_conflicts(&self) {
        for key in self.conflicts() {
            log::warn!("key {key} is bound to more than one action");
        }
    }
}
