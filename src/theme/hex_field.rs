use std::time::Duration;

use crate::color::{normalize_hex_input, HexColor};

use super::tokens::TokenKey;

/// Result of committing a hex field (blur or Enter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexCommit {
    /// The text normalized to a valid color; the caller applies and persists it.
    Accepted(HexColor),
    /// The field was empty and now shows the current color again.
    Restored(HexColor),
    /// The field is flagged invalid; the caller schedules [`HexField::revert`]
    /// with `revert_to` once `revert_after` has elapsed.
    Invalid {
        revert_to: HexColor,
        revert_after: Duration,
    },
}

/// Text-entry state of the hex input bound to one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexField {
    token: TokenKey,
    text: String,
    invalid: bool,
    revert_after: Duration,
}

impl HexField {
    pub const DEFAULT_REVERT_DELAY: Duration = Duration::from_millis(2_000);

    pub fn new(token: impl Into<TokenKey>, initial: HexColor) -> Self {
        Self {
            token: token.into(),
            text: initial.to_string(),
            invalid: false,
            revert_after: Self::DEFAULT_REVERT_DELAY,
        }
    }

    pub fn with_revert_delay(mut self, revert_after: Duration) -> Self {
        self.revert_after = revert_after;
        self
    }

    pub fn token(&self) -> &TokenKey {
        &self.token
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Keystroke handler. Returns the color when the text is already a complete `#RRGGBB`.
    pub fn input(&mut self, raw: &str) -> Option<HexColor> {
        self.text = raw.to_uppercase();
        self.invalid = false;
        HexColor::parse(&self.text).ok()
    }

    pub fn commit(&mut self, raw: &str, current: HexColor) -> HexCommit {
        let value = raw.trim();
        if value.is_empty() {
            self.show(current);
            return HexCommit::Restored(current);
        }

        match normalize_hex_input(value) {
            Some(color) => {
                self.show(color);
                HexCommit::Accepted(color)
            }
            None => {
                tracing::debug!(token = %self.token, value, "hex field holds an invalid color");
                self.text = value.to_string();
                self.invalid = true;
                HexCommit::Invalid {
                    revert_to: current,
                    revert_after: self.revert_after,
                }
            }
        }
    }

    /// Deferred half of an invalid commit: show the last known-good color again.
    pub fn revert(&mut self, current: HexColor) {
        self.show(current);
    }

    fn show(&mut self, color: HexColor) {
        self.text = color.to_string();
        self.invalid = false;
    }
}
