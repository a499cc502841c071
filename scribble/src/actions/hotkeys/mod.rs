//! Keyboard hotkeys for [`Action`]s.
//!
//! Actions can have potentially many hotkeys bound to them, and hotkeys can be bound to at most one action.
//! Mapping in both directions is useful, but for disk storage the one-to-many relation of Actions to keys is
//! easier to edit for the end user. Thus, the reverse many-to-one mapping of keys to actions is built dynamically.

mod defaults;

use super::Action;

pub trait HotkeyShadow {
    type Other;
    /// Returns true if this hotkey is "more specific" than the other, i.e. uses the same key but has
    /// stricter modifiers. Not asymmetric, identical hotkeys shadow each other.
    fn shadows(&self, other: &Self::Other) -> bool;
}

#[derive(Hash, PartialEq, Eq, Clone, Debug, Copy)]
pub struct KeyboardHotkey {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: egui::Key,
}
impl serde::Serialize for KeyboardHotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Human-readable string rather than a struct, it's what users edit.
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> serde::Deserialize<'de> for KeyboardHotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let str =
            <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        str.parse().map_err(serde::de::Error::custom)
    }
}
impl KeyboardHotkey {
    /// Get an arbitrary score of how specific this key is -
    /// Hotkeys with higher specificity shadow those with lower.
    #[must_use]
    pub fn specificity(&self) -> u8 {
        u8::from(self.ctrl) + u8::from(self.alt) + u8::from(self.shift)
    }
}
/// Formatted as `[ctrl+][alt+][shift+]<egui key name>`, the same syntax [`std::str::FromStr`] accepts.
impl std::fmt::Display for KeyboardHotkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut components = smallvec::SmallVec::<[&'static str; 4]>::new();
        if self.ctrl {
            components.push("ctrl");
        }
        if self.alt {
            components.push("alt");
        }
        if self.shift {
            components.push("shift");
        }
        components.push(self.key.name());
        f.write_str(&components.join("+"))
    }
}
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyboardHotkeyFromStrError {
    #[error("unrecognized key name")]
    InvalidKeyName,
}
/// Parse from syntax `[ctrl+][alt+][shift+]<egui key name>`, case-sensitive.
impl std::str::FromStr for KeyboardHotkey {
    type Err = KeyboardHotkeyFromStrError;
    fn from_str(mut str: &str) -> Result<Self, Self::Err> {
        let mut take_if_has = |prefix: &str| -> bool {
            if let Some(new_str) = str.strip_prefix(prefix) {
                str = new_str;
                true
            } else {
                false
            }
        };
        let ctrl = take_if_has("ctrl+");
        let alt = take_if_has("alt+");
        let shift = take_if_has("shift+");
        // str now contains only the key name.
        let key = egui::Key::from_name(str).ok_or(KeyboardHotkeyFromStrError::InvalidKeyName)?;

        Ok(Self {
            ctrl,
            alt,
            shift,
            key,
        })
    }
}
impl HotkeyShadow for KeyboardHotkey {
    type Other = Self;
    fn shadows(&self, other: &Self::Other) -> bool {
        other.key == self.key && (other.specificity() <= self.specificity())
    }
}

/// All the hotkeys bound to one action.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HotkeyCollection {
    #[serde(default)]
    pub keyboard: Vec<KeyboardHotkey>,
}

/// Maps each action onto potentially many hotkeys.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ActionsToKeys(pub hashbrown::HashMap<Action, HotkeyCollection>);
impl Default for ActionsToKeys {
    fn default() -> Self {
        let mut keys_map = hashbrown::HashMap::with_capacity(defaults::KEYBOARD.len());
        // Collect the keys from the defaults array
        for (action, keys) in defaults::KEYBOARD {
            keys_map.insert(
                *action,
                HotkeyCollection {
                    keyboard: keys.to_vec(),
                },
            );
        }

        let new = Self(keys_map);
        // Make sure we didn't accidentally bind a single key twice
        // Would be nice if this was a static check.
        debug_assert!(TryInto::<KeysToActions>::try_into(&new).is_ok());
        new
    }
}

/// Derived from [`ActionsToKeys`], maps each hotkey onto at most one action.
pub struct KeysToActions(hashbrown::HashMap<KeyboardHotkey, Action>);
#[derive(thiserror::Error, Debug)]
pub enum KeysToActionsError {
    /// A single key was bound to multiple actions.
    /// Only the first two encountered (in arbitrary order) are reported.
    #[error("hotkey {key} used for more than one action: {actions:?}")]
    DuplicateBinding {
        key: KeyboardHotkey,
        actions: [Action; 2],
    },
}
impl TryFrom<&ActionsToKeys> for KeysToActions {
    type Error = KeysToActionsError;
    fn try_from(value: &ActionsToKeys) -> Result<Self, Self::Error> {
        let mut new = KeysToActions(hashbrown::HashMap::default());

        for (action, keys) in &value.0 {
            for key in &keys.keyboard {
                let old = new.0.insert(*key, *action);
                // The slot wasn't empty!
                if let Some(old) = old {
                    return Err(KeysToActionsError::DuplicateBinding {
                        key: *key,
                        actions: [*action, old],
                    });
                }
            }
        }

        Ok(new)
    }
}
impl KeysToActions {
    /// No bindings at all.
    #[must_use]
    pub fn empty() -> Self {
        Self(hashbrown::HashMap::new())
    }
    #[must_use]
    pub fn contains(&self, key: &KeyboardHotkey) -> bool {
        self.0.contains_key(key)
    }
    #[must_use]
    pub fn action_of(&self, key: &KeyboardHotkey) -> Option<Action> {
        self.0.get(key).copied()
    }
    /// Find the action for `key` pressed with the given held modifiers.
    ///
    /// Every binding of `key` whose modifiers are a subset of the held ones is a candidate, and the most
    /// specific candidate shadows the rest. With only ctrl+Z bound, ctrl+shift+Z still resolves to it.
    #[must_use]
    pub fn resolve(&self, key: egui::Key, ctrl: bool, alt: bool, shift: bool) -> Option<Action> {
        let held = u8::from(ctrl) + u8::from(alt) + u8::from(shift);
        // Generates all unique combos of each flag where the modifier is held.
        (0u8..(1 << held))
            .map(|mut bits| {
                let mut consume = |condition: bool| {
                    if condition {
                        let bit = bits & 1 == 1;
                        bits >>= 1;
                        bit
                    } else {
                        false
                    }
                };
                KeyboardHotkey {
                    key,
                    ctrl: consume(ctrl),
                    alt: consume(alt),
                    shift: consume(shift),
                }
            })
            .filter(|hotkey| self.contains(hotkey))
            .reduce(|best, candidate| {
                if candidate.shadows(&best) {
                    candidate
                } else {
                    best
                }
            })
            .and_then(|hotkey| self.action_of(&hotkey))
    }
}

#[cfg(test)]
mod test {
    use super::{
        ActionsToKeys, HotkeyCollection, HotkeyShadow, KeyboardHotkey, KeyboardHotkeyFromStrError,
        KeysToActions, KeysToActionsError,
    };
    use crate::actions::Action;

    const CTRL_Z: KeyboardHotkey = KeyboardHotkey {
        ctrl: true,
        alt: false,
        shift: false,
        key: egui::Key::Z,
    };

    #[test]
    fn string_round_trip() {
        assert_eq!(CTRL_Z.to_string(), "ctrl+Z");
        assert_eq!("ctrl+Z".parse::<KeyboardHotkey>(), Ok(CTRL_Z));

        let all = KeyboardHotkey {
            ctrl: true,
            alt: true,
            shift: true,
            key: egui::Key::S,
        };
        assert_eq!(all.to_string(), "ctrl+alt+shift+S");
        assert_eq!(all.to_string().parse::<KeyboardHotkey>(), Ok(all));
    }
    #[test]
    fn bad_names_rejected() {
        assert_eq!(
            "ctrl+NotAKey".parse::<KeyboardHotkey>(),
            Err(KeyboardHotkeyFromStrError::InvalidKeyName)
        );
        // Modifiers are order-sensitive.
        assert!("shift+ctrl+Z".parse::<KeyboardHotkey>().is_err());
    }
    #[test]
    fn specificity_shadows() {
        let ctrl_shift_z = KeyboardHotkey {
            shift: true,
            ..CTRL_Z
        };
        assert!(ctrl_shift_z.shadows(&CTRL_Z));
        assert!(!CTRL_Z.shadows(&ctrl_shift_z));
        assert!(CTRL_Z.shadows(&CTRL_Z));
    }
    #[test]
    fn defaults_are_unique() {
        let keys: KeysToActions = (&ActionsToKeys::default()).try_into().unwrap();
        assert_eq!(keys.action_of(&CTRL_Z), Some(Action::Undo));
    }
    #[test]
    fn duplicate_binding_rejected() {
        let mut map = ActionsToKeys::default();
        map.0.insert(
            Action::Save,
            HotkeyCollection {
                keyboard: vec![CTRL_Z],
            },
        );
        let result: Result<KeysToActions, _> = (&map).try_into();
        assert!(matches!(
            result,
            Err(KeysToActionsError::DuplicateBinding { key, .. }) if key == CTRL_Z
        ));
    }
    #[test]
    fn resolve_prefers_most_specific() {
        let mut map = ActionsToKeys::default();
        map.0.insert(
            Action::Reset,
            HotkeyCollection {
                keyboard: vec![KeyboardHotkey {
                    shift: true,
                    ..CTRL_Z
                }],
            },
        );
        let keys: KeysToActions = (&map).try_into().unwrap();

        assert_eq!(keys.resolve(egui::Key::Z, true, false, false), Some(Action::Undo));
        assert_eq!(keys.resolve(egui::Key::Z, true, false, true), Some(Action::Reset));
        // Extra modifiers fall back to the closest binding.
        assert_eq!(keys.resolve(egui::Key::Z, true, true, false), Some(Action::Undo));
        assert_eq!(keys.resolve(egui::Key::Z, false, false, false), None);
    }
}
