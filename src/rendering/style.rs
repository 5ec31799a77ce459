//! Palette presets resolving `ColorRole`s to concrete colors.

use log::warn;
use serde::Serialize;

use super::paint::ColorRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Immutable palette handed to the replay step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleConfig {
    pub name: &'static str,
    pub background: Rgb,
    pub header_start: Rgb,
    pub header_end: Rgb,
    pub panel: Rgb,
    pub accent: Rgb,
    pub highlight: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub text_muted: Rgb,
    pub ahead: Rgb,
    pub behind: Rgb,
    pub even: Rgb,
    pub gold: Rgb,
    pub silver: Rgb,
    pub bronze: Rgb,
}

const GOLD: Rgb = Rgb(0xD4, 0xA5, 0x4A);
const SILVER: Rgb = Rgb(0xBF, 0xBF, 0xBF);
const BRONZE: Rgb = Rgb(0xCC, 0x80, 0x33);

impl StyleConfig {
    /// Copper-on-dark data dashboard.
    pub fn evolved() -> Self {
        Self {
            name: "evolved",
            background: Rgb(0x08, 0x08, 0x0A),
            header_start: Rgb(0xB8, 0x73, 0x33),
            header_end: Rgb(0x14, 0x14, 0x1A),
            panel: Rgb(0x0D, 0x0D, 0x0F),
            accent: Rgb(0xB8, 0x73, 0x33),
            highlight: Rgb(0xD4, 0xA5, 0x4A),
            text_primary: Rgb(0xFF, 0xFF, 0xFF),
            text_secondary: Rgb(0x9F, 0xA0, 0xAD),
            text_muted: Rgb(0x5A, 0x5B, 0x6A),
            ahead: Rgb(0x4D, 0xB3, 0xA6),
            behind: Rgb(0xC9, 0x7B, 0x7B),
            even: Rgb(0x5A, 0x5B, 0x6A),
            gold: GOLD,
            silver: SILVER,
            bronze: BRONZE,
        }
    }

    /// Gold and rose editorial palette.
    pub fn editorial() -> Self {
        Self {
            name: "editorial",
            background: Rgb(0x08, 0x08, 0x0A),
            header_start: Rgb(0x14, 0x0F, 0x14),
            header_end: Rgb(0x1F, 0x14, 0x0F),
            panel: Rgb(0x12, 0x0F, 0x12),
            accent: Rgb(0xD4, 0xA5, 0x4A),
            highlight: Rgb(0xC9, 0x7B, 0x7B),
            text_primary: Rgb(0xFF, 0xFF, 0xFF),
            text_secondary: Rgb(0x9F, 0xA0, 0xAD),
            text_muted: Rgb(0x5A, 0x5B, 0x6A),
            ahead: Rgb(0x4D, 0xB3, 0xA6),
            behind: Rgb(0xC9, 0x7B, 0x7B),
            even: Rgb(0x5A, 0x5B, 0x6A),
            gold: GOLD,
            silver: SILVER,
            bronze: BRONZE,
        }
    }

    /// Dark warm wash for regatta results and team rankings.
    pub fn podium() -> Self {
        Self {
            name: "podium",
            header_start: Rgb(0x08, 0x08, 0x0A),
            header_end: Rgb(0x1F, 0x14, 0x0F),
            panel: Rgb(0x40, 0x45, 0x4D),
            accent: Rgb(0xB8, 0x73, 0x33),
            highlight: GOLD,
            ..Self::evolved()
        }
    }

    /// Year-in-review palette: gold headline numbers, rose callouts.
    pub fn celebration() -> Self {
        Self {
            name: "celebration",
            header_start: Rgb(0x0D, 0x0A, 0x0F),
            header_end: Rgb(0x1F, 0x1A, 0x14),
            panel: Rgb(0x2B, 0x22, 0x12),
            accent: Rgb(0xB8, 0x73, 0x33),
            highlight: Rgb(0xC9, 0x7B, 0x7B),
            ..Self::evolved()
        }
    }

    /// Replace the accent with a team color. Unparsable values are ignored.
    pub fn with_team_color(mut self, team_color: Option<&str>) -> Self {
        if let Some(raw) = team_color {
            match Rgb::from_hex(raw) {
                Some(rgb) => self.accent = rgb,
                None => warn!("ignoring unparsable team color {raw:?}"),
            }
        }
        self
    }

    pub fn resolve(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::Background => self.background,
            ColorRole::HeaderStart => self.header_start,
            ColorRole::HeaderEnd => self.header_end,
            ColorRole::Panel => self.panel,
            ColorRole::Accent => self.accent,
            ColorRole::Highlight => self.highlight,
            ColorRole::TextPrimary => self.text_primary,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::TextMuted => self.text_muted,
            ColorRole::Ahead => self.ahead,
            ColorRole::Behind => self.behind,
            ColorRole::Even => self.even,
            ColorRole::Gold => self.gold,
            ColorRole::Silver => self.silver,
            ColorRole::Bronze => self.bronze,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::evolved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgb::from_hex("#B87333"), Some(Rgb(0xB8, 0x73, 0x33)));
        assert_eq!(Rgb::from_hex("1a2b3c"), Some(Rgb(0x1A, 0x2B, 0x3C)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
        assert_eq!(Rgb::from_hex("+1+2+3"), None);
        assert_eq!(Rgb::from_hex("#+1+2+3"), None);
        assert_eq!(Rgb(0xB8, 0x73, 0x33).to_hex(), "#B87333");
    }

    #[test]
    fn team_color_overrides_accent_only() {
        let style = StyleConfig::evolved().with_team_color(Some("#003366"));
        assert_eq!(style.resolve(ColorRole::Accent), Rgb(0x00, 0x33, 0x66));
        assert_eq!(style.resolve(ColorRole::Highlight), StyleConfig::evolved().highlight);

        let untouched = StyleConfig::editorial().with_team_color(Some("navy"));
        assert_eq!(untouched, StyleConfig::editorial());
    }

    #[test]
    fn medal_colors_are_shared_by_every_preset() {
        for style in [
            StyleConfig::evolved(),
            StyleConfig::editorial(),
            StyleConfig::podium(),
            StyleConfig::celebration(),
        ] {
            assert_eq!(style.resolve(ColorRole::Gold), Rgb(0xD4, 0xA5, 0x4A), "{}", style.name);
            assert_eq!(style.resolve(ColorRole::Silver), Rgb(0xBF, 0xBF, 0xBF));
            assert_eq!(style.resolve(ColorRole::Bronze), Rgb(0xCC, 0x80, 0x33));
        }
        assert_eq!(StyleConfig::podium().resolve(ColorRole::Highlight), StyleConfig::podium().gold);
    }
}
