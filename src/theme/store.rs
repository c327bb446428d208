use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::color::HexColor;
use crate::storage::{ThemeStorage, THEME_STORAGE_KEY};
use crate::sync::PresentationSync;

use super::derive::{derive_dark, derive_dark_mapping, random_theme};
use super::hex_field::{HexCommit, HexField};
use super::presets::{default_dark_mapping, Preset, DEFAULT_DARK_BACKGROUND};
use super::tokens::{ColorToken, ThemeMapping, TokenKey};
use super::{ThemeError, ThemeResult, ThemeScope};

/// Single source of truth for the light and dark color mappings.
///
/// Every mutation is mirrored into the injected [`PresentationSync`]; whole-theme
/// replacements and committed edits are written to the injected [`ThemeStorage`].
#[derive(Debug)]
pub struct ThemeStore<S, P> {
    light: ThemeMapping,
    dark: ThemeMapping,
    dark_background: HexColor,
    storage: S,
    sync: P,
}

impl<S: ThemeStorage, P: PresentationSync> ThemeStore<S, P> {
    /// Default preset on the light side, the hand-tuned dark scheme on the dark side.
    pub fn new(storage: S, sync: P) -> Self {
        Self::with_preset(storage, sync, Preset::Default)
    }

    pub fn with_preset(storage: S, sync: P, preset: Preset) -> Self {
        let light = preset.mapping();
        let dark = match preset {
            Preset::Default => default_dark_mapping(),
            _ => derive_dark_mapping(&light),
        };

        let mut store = Self {
            light,
            dark,
            dark_background: DEFAULT_DARK_BACKGROUND,
            storage,
            sync,
        };
        store.publish_all();
        store
    }

    pub fn light(&self) -> &ThemeMapping {
        &self.light
    }

    pub fn dark(&self) -> &ThemeMapping {
        &self.dark
    }

    pub fn dark_background(&self) -> HexColor {
        self.dark_background
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn sync(&self) -> &P {
        &self.sync
    }

    /// Validates `color` and applies it. Returns `false`, leaving every mapping
    /// untouched, when `color` is not `#RRGGBB`.
    pub fn set_token(&mut self, token: impl Into<TokenKey>, color: &str, scope: ThemeScope) -> bool {
        self.try_set_token(token, color, scope).is_ok()
    }

    pub fn try_set_token(
        &mut self,
        token: impl Into<TokenKey>,
        color: &str,
        scope: ThemeScope,
    ) -> ThemeResult<()> {
        let token = token.into();
        let color = HexColor::parse(color).inspect_err(|err| {
            tracing::warn!(%token, %err, "rejected color update");
        })?;
        self.set_color(token, color, scope);
        Ok(())
    }

    pub fn set_color(&mut self, token: TokenKey, color: HexColor, scope: ThemeScope) {
        let light = if scope.includes_light() {
            self.light.set(token.clone(), color);
            Some(color)
        } else {
            None
        };

        // A light-only write of a brand new token still needs a dark counterpart.
        let dark = if scope.includes_dark() || self.dark.get(&token).is_none() {
            let dark = derive_dark(&token, color);
            self.dark.set(token.clone(), dark);
            Some(dark)
        } else {
            None
        };

        tracing::debug!(%token, ?light, ?dark, "updated color token");
        self.sync.on_token_changed(&token, light, dark);
    }

    /// Applies `color` to both modes and persists the theme.
    pub fn commit_token(&mut self, token: impl Into<TokenKey>, color: &str) -> bool {
        let applied = self.set_token(token, color, ThemeScope::Both);
        if applied {
            self.persist();
        }
        applied
    }

    /// Keystroke in a hex field: complete colors update live, nothing is persisted.
    pub fn input_hex_field(&mut self, field: &mut HexField, raw: &str) -> Option<HexColor> {
        let color = field.input(raw)?;
        self.set_color(field.token().clone(), color, ThemeScope::Both);
        Some(color)
    }

    /// Blur/Enter in a hex field. Accepted colors are applied and persisted.
    pub fn commit_hex_field(&mut self, field: &mut HexField, raw: &str) -> HexCommit {
        let current = self.light.get(field.token()).unwrap_or(HexColor::BLACK);
        let outcome = field.commit(raw, current);
        if let HexCommit::Accepted(color) = outcome {
            self.set_color(field.token().clone(), color, ThemeScope::Both);
            self.persist();
        }
        outcome
    }

    /// Explicit override of the dark background/surface pair.
    pub fn set_dark_background(&mut self, color: &str) -> bool {
        let Ok(color) = HexColor::parse(color) else {
            tracing::warn!(value = color, "rejected dark background update");
            return false;
        };

        for token in [ColorToken::Background, ColorToken::Surface] {
            let key = TokenKey::from(token);
            self.dark.set(key.clone(), color);
            self.sync.on_token_changed(&key, None, Some(color));
        }
        self.dark_background = color;
        self.sync.on_dark_background_changed(color);
        tracing::debug!(%color, "overrode dark background");
        true
    }

    /// Unknown names are ignored.
    pub fn apply_preset(&mut self, name: &str) {
        match name.parse::<Preset>() {
            Ok(preset) => self.apply(preset),
            Err(err) => tracing::debug!(%err, "ignoring preset request"),
        }
    }

    pub fn apply(&mut self, preset: Preset) {
        tracing::info!(%preset, "applying preset");
        self.replace_light(preset.mapping());
    }

    pub fn reset_to_default(&mut self) {
        self.apply(Preset::Default);
    }

    /// Restores the hand-tuned dark scheme, independent of the light mapping.
    /// Custom tokens keep their current dark values.
    pub fn reset_dark_to_default(&mut self) {
        for (token, color) in default_dark_mapping().iter() {
            self.dark.set(token.clone(), color);
            self.sync.on_token_changed(token, None, Some(color));
        }
        self.dark_background = DEFAULT_DARK_BACKGROUND;
        self.sync.on_dark_background_changed(DEFAULT_DARK_BACKGROUND);
        tracing::info!("reset dark mode to defaults");
    }

    pub fn generate_random(&mut self) {
        self.generate_random_with(&mut rand::rng());
    }

    pub fn generate_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mapping = random_theme(rng);
        tracing::info!(
            primary = ?mapping.token(ColorToken::Primary),
            secondary = ?mapping.token(ColorToken::Secondary),
            tertiary = ?mapping.token(ColorToken::Tertiary),
            "generated random theme"
        );
        self.replace_light(mapping);
    }

    /// Pretty-printed light mapping.
    pub fn export_theme(&self) -> ThemeResult<String> {
        serde_json::to_string_pretty(&self.light).map_err(ThemeError::Serialize)
    }

    /// Returns `false`, with no state change, when `json` is not a JSON object.
    pub fn import_theme(&mut self, json: &str) -> bool {
        match self.try_import_theme(json) {
            Ok(applied) => {
                tracing::info!(applied, "imported theme");
                true
            }
            Err(err) => {
                tracing::error!(%err, "failed to import theme");
                false
            }
        }
    }

    /// Returns how many entries were applied.
    pub fn try_import_theme(&mut self, json: &str) -> ThemeResult<usize> {
        let entries = parse_theme_entries(json)?;
        let applied = entries.len();
        for (token, color) in entries {
            self.set_color(token, color, ThemeScope::Both);
        }
        self.persist();
        Ok(applied)
    }

    pub fn export_to_dir(&self, dir: &Path, file_name: &str) -> ThemeResult<PathBuf> {
        let json = self.export_theme()?;
        let path = dir.join(file_name);
        fs::create_dir_all(dir).map_err(|source| ThemeError::WriteFile {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| ThemeError::WriteFile {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "exported theme");
        Ok(path)
    }

    pub fn import_from_path(&mut self, path: &Path) -> ThemeResult<bool> {
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.import_theme(&contents))
    }

    pub fn save_theme(&mut self) -> ThemeResult<()> {
        let serialized = serde_json::to_string(&self.light).map_err(ThemeError::Serialize)?;
        self.storage.write(THEME_STORAGE_KEY, &serialized)?;
        Ok(())
    }

    /// Best effort: missing or corrupt saved state is logged and leaves the
    /// current theme in place. Returns whether a saved theme was applied.
    pub fn load_saved_theme(&mut self) -> bool {
        let saved = match self.storage.read(THEME_STORAGE_KEY) {
            Ok(Some(saved)) => saved,
            Ok(None) => return false,
            Err(err) => {
                tracing::warn!(%err, "failed to read saved theme");
                return false;
            }
        };

        match parse_theme_entries(&saved) {
            Ok(entries) => {
                tracing::info!(entries = entries.len(), "loaded saved theme");
                for (token, color) in entries {
                    self.set_color(token, color, ThemeScope::Both);
                }
                true
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load saved theme");
                false
            }
        }
    }

    fn replace_light(&mut self, mapping: ThemeMapping) {
        for (token, color) in mapping.iter() {
            self.set_color(token.clone(), color, ThemeScope::Both);
        }
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(err) = self.save_theme() {
            tracing::warn!(%err, "failed to persist theme");
        }
    }

    fn publish_all(&mut self) {
        for (token, light) in self.light.iter() {
            self.sync
                .on_token_changed(token, Some(light), self.dark.get(token));
        }
        self.sync.on_dark_background_changed(self.dark_background);
    }
}

/// Parses a theme object without touching any state. Entries whose value is
/// not a valid color string are skipped.
fn parse_theme_entries(json: &str) -> ThemeResult<Vec<(TokenKey, HexColor)>> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(ThemeError::MalformedJson)?;
    let serde_json::Value::Object(object) = value else {
        return Err(ThemeError::NotAnObject);
    };

    let entries = object
        .iter()
        .filter_map(|(name, value)| {
            let color = value.as_str().and_then(|raw| HexColor::parse(raw).ok());
            if color.is_none() {
                tracing::warn!(token = name.as_str(), %value, "skipping invalid theme entry");
            }
            color.map(|color| (TokenKey::from_name(name), color))
        })
        .collect();
    Ok(entries)
}
