//! Color schemes.
//!
//! Two palettes, dark and light. The mode comes from settings; `System`
//! follows the window appearance reported by the platform.

use gpui::{rgb, Hsla};
use serde::{Deserialize, Serialize};

/// Which palette the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    #[default]
    System,
}

/// Resolved colors used by every view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_elevated: Hsla,
    pub border: Hsla,
    pub text_primary: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub accent: Hsla,
    pub accent_text: Hsla,
    pub error: Hsla,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            background: rgb(0x121212).into(),
            surface: rgb(0x1e1e1e).into(),
            surface_elevated: rgb(0x2a2a2a).into(),
            border: rgb(0x333333).into(),
            text_primary: rgb(0xf5f5f5).into(),
            text_secondary: rgb(0xbdbdbd).into(),
            text_muted: rgb(0x8a8a8a).into(),
            accent: rgb(0xbb86fc).into(),
            accent_text: rgb(0x121212).into(),
            error: rgb(0xcf6679).into(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: rgb(0xffffff).into(),
            surface: rgb(0xf5f5f5).into(),
            surface_elevated: rgb(0xebebeb).into(),
            border: rgb(0xdddddd).into(),
            text_primary: rgb(0x1a1a1a).into(),
            text_secondary: rgb(0x4a4a4a).into(),
            text_muted: rgb(0x7a7a7a).into(),
            accent: rgb(0x6200ee).into(),
            accent_text: rgb(0xffffff).into(),
            error: rgb(0xb00020).into(),
        }
    }
}

/// The active theme: requested mode plus the palette it resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub is_dark: bool,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            is_dark: true,
            colors: ThemeColors::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            is_dark: false,
            colors: ThemeColors::light(),
        }
    }

    /// Resolve a mode, using `system_is_dark` when the mode is `System`.
    pub fn resolve(mode: ThemeMode, system_is_dark: bool) -> Self {
        let is_dark = match mode {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::System => system_is_dark,
        };

        Self {
            mode,
            is_dark,
            colors: if is_dark {
                ThemeColors::dark()
            } else {
                ThemeColors::light()
            },
        }
    }

    /// Switch to the opposite palette. The result is an explicit mode.
    pub fn toggled(&self) -> Self {
        if self.is_dark {
            Self::light()
        } else {
            Self::dark()
        }
    }
}
