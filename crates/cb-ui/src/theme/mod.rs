//! Theme system

use cb_core::board::AlertKind;
use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color for focused elements
    pub focus_border: Color,
    /// Border color for unfocused elements
    pub unfocus_border: Color,
    /// Selected comment background
    pub selection: Color,
    /// Marker for edited comments
    pub muted: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub success: Color,
}

impl Theme {
    /// Colour for an alert kind
    pub fn alert(&self, kind: AlertKind) -> Color {
        match kind {
            AlertKind::Error => self.error,
            AlertKind::Warning => self.warning,
            AlertKind::Info => self.info,
            AlertKind::Success => self.success,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            unfocus_border: Color::DarkGray,
            selection: Color::DarkGray,
            muted: Color::Gray,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Blue,
            success: Color::Green,
        }
    }
}
