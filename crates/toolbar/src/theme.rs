//! Theme snapshot applied to the toolbar chrome.

use common::Color;

/// Fallback background when the theme leaves it unset.
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0x26, 0x26, 0x26);

/// Fallback text color when the theme leaves it unset.
pub const DEFAULT_TEXT: Color = Color::WHITE;

/// Alpha applied to the effective text color to derive the query
/// field's hint color.
pub const HINT_ALPHA: u8 = 0x88;

/// Optional color bundle supplied on every theme-switch event.
///
/// Each field is independently unset; consumers fall back per field to
/// the hardcoded defaults above. A fully absent theme is expressed by
/// passing `None` for the whole snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeData {
    pub background_color: Option<Color>,
    pub text_color: Option<Color>,
    pub icon_tint_color: Option<Color>,
}

impl ThemeData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_text(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_icon_tint(mut self, color: Color) -> Self {
        self.icon_tint_color = Some(color);
        self
    }
}

/// Resolved colors for the find overlay's sub-elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FindOverlayStyle {
    pub background: Color,
    pub text: Color,
    pub hint: Color,
    /// Tint for the previous/next/close buttons; `None` leaves the
    /// platform default.
    pub button_tint: Option<Color>,
}

impl FindOverlayStyle {
    /// Resolve against an optional theme snapshot, each field falling
    /// back independently to its default.
    pub fn resolve(theme: Option<&ThemeData>) -> Self {
        let background = theme
            .and_then(|t| t.background_color)
            .unwrap_or(DEFAULT_BACKGROUND);
        let text = theme.and_then(|t| t.text_color).unwrap_or(DEFAULT_TEXT);
        Self {
            background,
            text,
            hint: text.with_alpha(HINT_ALPHA),
            button_tint: theme.and_then(|t| t.icon_tint_color),
        }
    }
}

impl Default for FindOverlayStyle {
    fn default() -> Self {
        Self::resolve(None)
    }
}
