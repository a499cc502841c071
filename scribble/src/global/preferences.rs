use crate::actions::hotkeys::{ActionsToKeys, KeysToActions};
use scribble_core::{BrushSettings, Color};

const DOCUMENTATION: &str = r##"# Scribble preferences. You may edit this file, but be aware that formatting and comments will not
# be preserved, and all keys and values are case sensitive.

# [brush] sets the pen used when the application starts. Colors are written "#rrggbb" or "#rrggbbaa",
# sizes are whole pixels, at least 1.
# [canvas] background is the color the drawing is rendered onto. It is not part of exported files.

# [hotkeys] lists the keys bound to each action (see `actions::Action`), specified here as [hotkeys.<action>].
# Keyboard hotkeys are case-sensitive and written `[ctrl+][alt+][shift+]<egui key name>`.
# Each action may have many hotkeys associated with it, but each hotkey should only be used at most once.

# Examples:
# [hotkeys.Undo]
# keyboard = ["ctrl+Z"]
# [hotkeys.Save]
# keyboard = ["ctrl+S", "ctrl+shift+S"]

"##;

#[must_use]
pub fn preferences_dir() -> Option<std::path::PathBuf> {
    let mut base_dir = dirs::preference_dir()?;
    base_dir.push(env!("CARGO_PKG_NAME"));
    Some(base_dir)
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CanvasPreferences {
    pub background: Color,
}
impl Default for CanvasPreferences {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
        }
    }
}

/// The on-disk preferences file.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PreferencesFile {
    pub brush: BrushSettings,
    pub canvas: CanvasPreferences,
    pub hotkeys: ActionsToKeys,
}

/// Where the active preferences came from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Source {
    Loaded,
    /// No file exists yet.
    Missing,
    /// A file exists but could not be used. It will not be overwritten.
    Invalid,
    /// There is no preferences directory on this platform.
    NoPath,
}

pub struct Preferences {
    source: Source,
    pub file: PreferencesFile,
    pub keys_to_actions: KeysToActions,
}
impl Preferences {
    const FILENAME: &'static str = "preferences.toml";
    /// Shared global preferences, loaded from the user's preference directory.
    /// (Or defaulted, if unavailable for some reason)
    #[must_use]
    pub fn get() -> &'static Self {
        static GLOBAL_PREFERENCES: std::sync::OnceLock<Preferences> = std::sync::OnceLock::new();

        GLOBAL_PREFERENCES.get_or_init(|| match preferences_dir() {
            None => Self::defaulted(Source::NoPath),
            Some(mut dir) => {
                dir.push(Self::FILENAME);
                Self::load_or_default(&dir)
            }
        })
    }
    #[must_use]
    fn defaulted(source: Source) -> Self {
        log::warn!("Preferences weren't available ({source:?}), defaulting.");
        let file = PreferencesFile::default();
        // Default action map is reversable - this is assured by the default impl when debugging.
        let keys_to_actions = (&file.hotkeys)
            .try_into()
            .unwrap_or_else(|_| KeysToActions::empty());

        Self {
            source,
            file,
            keys_to_actions,
        }
    }
    #[must_use]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        let string = match std::fs::read_to_string(path) {
            Ok(string) => string,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Self::defaulted(Source::Missing)
            }
            Err(e) => {
                log::warn!("Failed to read {path:?}: {e}");
                return Self::defaulted(Source::Invalid);
            }
        };
        let parsed: anyhow::Result<(PreferencesFile, KeysToActions)> = try_block::try_block! {
            let file : PreferencesFile = toml::from_str(&string)?;
            let keys_to_actions : KeysToActions = (&file.hotkeys).try_into()?;

            Ok((file, keys_to_actions))
        };

        match parsed {
            Ok((file, keys_to_actions)) => Self {
                source: Source::Loaded,
                file,
                keys_to_actions,
            },
            Err(e) => {
                log::warn!("Failed to parse {path:?}:\n{e:#}");
                Self::defaulted(Source::Invalid)
            }
        }
    }
    #[must_use]
    pub fn source(&self) -> Source {
        self.source
    }
    /// Write the preferences to the user's preference dir, unless a file is already there.
    pub fn save_if_missing(&self) -> anyhow::Result<()> {
        if self.source != Source::Missing {
            return Ok(());
        }
        let mut preferences =
            preferences_dir().ok_or_else(|| anyhow::anyhow!("No preferences dir found"))?;
        // Explicity do *not* create recursively. If not found, the user probably has a good reason.
        // Ignore errors (could already exist). Any real errors will be emitted by file access below.
        let _ = std::fs::DirBuilder::new().create(&preferences);

        preferences.push(Self::FILENAME);
        self.save_to(&preferences)
    }
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let mut string = toml::ser::to_string_pretty(&self.file)?;
        // Prefix some documentation.
        string = DOCUMENTATION.to_owned() + &string;
        std::fs::write(path, string)?;
        log::info!("Wrote default preferences to {path:?}");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Preferences, PreferencesFile, Source};
    use crate::actions::Action;
    use scribble_core::{BrushSize, Color};

    #[test]
    fn missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_or_default(&dir.path().join("preferences.toml"));
        assert_eq!(prefs.source(), Source::Missing);
        assert_eq!(prefs.file, PreferencesFile::default());
        assert_eq!(prefs.file.brush.color, Color::BLACK);
        assert_eq!(prefs.file.brush.size, BrushSize::ONE);
    }
    #[test]
    fn saved_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let mut prefs = Preferences::load_or_default(&path);
        prefs.file.brush.color = Color::rgb(12, 34, 56);
        prefs.file.brush.size = BrushSize::new(7).unwrap();
        prefs.save_to(&path).unwrap();

        let loaded = Preferences::load_or_default(&path);
        assert_eq!(loaded.source(), Source::Loaded);
        assert_eq!(loaded.file, prefs.file);
    }
    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(
            &path,
            "[brush]\ncolor = \"#ff0000\"\nsize = 3\n\n[hotkeys.Undo]\nkeyboard = [\"ctrl+U\"]\n",
        )
        .unwrap();

        let prefs = Preferences::load_or_default(&path);
        assert_eq!(prefs.source(), Source::Loaded);
        assert_eq!(prefs.file.brush.color, Color::rgb(255, 0, 0));
        assert_eq!(prefs.file.canvas.background, Color::WHITE);
        assert_eq!(
            prefs.keys_to_actions.resolve(egui::Key::U, true, false, false),
            Some(Action::Undo)
        );
        // Only the listed actions are bound once a hotkey table is given.
        assert_eq!(
            prefs.keys_to_actions.resolve(egui::Key::S, true, false, false),
            None
        );
    }
    #[test]
    fn invalid_files_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "[brush]\nsize = 0\n").unwrap();

        let prefs = Preferences::load_or_default(&path);
        assert_eq!(prefs.source(), Source::Invalid);
        assert_eq!(prefs.file, PreferencesFile::default());
        // Nothing is written back over a file the user made.
        prefs.save_if_missing().unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[brush]\nsize = 0\n"
        );
    }
    #[test]
    fn duplicate_hotkeys_are_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(
            &path,
            "[hotkeys.Undo]\nkeyboard = [\"ctrl+Z\"]\n[hotkeys.Save]\nkeyboard = [\"ctrl+Z\"]\n",
        )
        .unwrap();

        assert_eq!(
            Preferences::load_or_default(&path).source(),
            Source::Invalid
        );
    }
}
