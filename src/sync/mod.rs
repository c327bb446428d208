//! Presentation mirrors of the theme: CSS custom properties per scope plus
//! the picker and hex-field controls bound to each token.

use std::collections::BTreeMap;

use crate::color::HexColor;
use crate::theme::TokenKey;

pub const LIGHT_SCOPE: &str = ":root";
pub const DARK_VIEW_SCOPE: &str = ".dark-view";
pub const DARK_THEME_SCOPE: &str = "[data-theme=\"dark\"]";

/// Receives every color update the theme store performs.
pub trait PresentationSync {
    /// `None` means that side was not touched by the update.
    fn on_token_changed(&mut self, token: &TokenKey, light: Option<HexColor>, dark: Option<HexColor>);

    fn on_dark_background_changed(&mut self, _color: HexColor) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSync;

impl PresentationSync for NullSync {
    fn on_token_changed(&mut self, _token: &TokenKey, _light: Option<HexColor>, _dark: Option<HexColor>) {}
}

/// Values shown by the picker and hex field bound to one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlMirror {
    pub picker: HexColor,
    pub hex_text: String,
}

impl ControlMirror {
    fn showing(color: HexColor) -> Self {
        Self {
            picker: color,
            hex_text: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct ScopeVariables {
    selector: String,
    variables: BTreeMap<String, HexColor>,
}

/// Keeps an explicit selector → variable map for each display mode,
/// configured once at construction.
#[derive(Debug, Clone)]
pub struct CssVariableSync {
    light_scopes: Vec<ScopeVariables>,
    dark_scopes: Vec<ScopeVariables>,
    controls: BTreeMap<TokenKey, ControlMirror>,
    dark_background_control: Option<HexColor>,
}

impl CssVariableSync {
    pub fn new<L, D>(light_selectors: L, dark_selectors: D) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let scopes = |selectors: Vec<String>| -> Vec<ScopeVariables> {
            selectors
                .into_iter()
                .map(|selector| ScopeVariables {
                    selector,
                    variables: BTreeMap::new(),
                })
                .collect()
        };

        Self {
            light_scopes: scopes(light_selectors.into_iter().map(Into::into).collect()),
            dark_scopes: scopes(dark_selectors.into_iter().map(Into::into).collect()),
            controls: BTreeMap::new(),
            dark_background_control: None,
        }
    }

    pub fn variable(&self, selector: &str, token: &TokenKey) -> Option<HexColor> {
        self.light_scopes
            .iter()
            .chain(&self.dark_scopes)
            .find(|scope| scope.selector == selector)
            .and_then(|scope| scope.variables.get(&token.css_variable()).copied())
    }

    pub fn control(&self, token: &TokenKey) -> Option<&ControlMirror> {
        self.controls.get(token)
    }

    pub fn dark_background_control(&self) -> Option<HexColor> {
        self.dark_background_control
    }

    pub fn render_stylesheet(&self) -> String {
        let mut css = String::new();
        for scope in self.light_scopes.iter().chain(&self.dark_scopes) {
            if scope.variables.is_empty() {
                continue;
            }
            let declarations: String = scope
                .variables
                .iter()
                .map(|(name, color)| format!("  {name}: {color};\n"))
                .collect();
            css.push_str(&format!("{} {{\n{declarations}}}\n", scope.selector));
        }
        css
    }

    fn set_scoped(scopes: &mut [ScopeVariables], token: &TokenKey, color: HexColor) {
        let name = token.css_variable();
        for scope in scopes {
            scope.variables.insert(name.clone(), color);
        }
    }
}

impl Default for CssVariableSync {
    fn default() -> Self {
        Self::new([LIGHT_SCOPE], [DARK_VIEW_SCOPE, DARK_THEME_SCOPE])
    }
}

impl PresentationSync for CssVariableSync {
    fn on_token_changed(&mut self, token: &TokenKey, light: Option<HexColor>, dark: Option<HexColor>) {
        if let Some(color) = light {
            Self::set_scoped(&mut self.light_scopes, token, color);
            self.controls
                .insert(token.clone(), ControlMirror::showing(color));
        }
        if let Some(color) = dark {
            Self::set_scoped(&mut self.dark_scopes, token, color);
        }
    }

    fn on_dark_background_changed(&mut self, color: HexColor) {
        self.dark_background_control = Some(color);
    }
}
