//! Theme management for the two halves of the switcher.

use eframe::egui::{self, Color32, Vec2};

use crate::switcher::Side;

/// Background pattern painted over a half.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern {
    /// Dot grid, `radius` in points.
    Dots { radius: f32 },
    /// Square line grid, `width` in points.
    Grid { width: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub visuals: egui::Visuals,
    pub fill: Color32,
    pub pattern: Pattern,
    pub pattern_color: Color32,
    pub pattern_spacing: f32,
    pub pattern_offset: Vec2,
    /// Heading and tooltip ink over this half.
    pub ink: Color32,
}

pub fn dark_theme() -> Theme {
    Theme {
        name: "Dark",
        visuals: egui::Visuals::dark(),
        fill: Color32::BLACK,
        pattern: Pattern::Grid { width: 1.0 },
        pattern_color: Color32::from_rgb(0x24, 0x24, 0x24),
        pattern_spacing: 70.0,
        pattern_offset: Vec2::splat(35.0),
        ink: Color32::WHITE,
    }
}

pub fn light_theme() -> Theme {
    Theme {
        name: "Light",
        visuals: egui::Visuals::light(),
        fill: Color32::WHITE,
        pattern: Pattern::Dots { radius: 1.0 },
        pattern_color: Color32::from_rgb(0x3c, 0x3c, 0x3c),
        pattern_spacing: 70.0,
        pattern_offset: Vec2::splat(0.5),
        ink: Color32::BLACK,
    }
}

pub fn theme_for(side: Side) -> Theme {
    match side {
        Side::Light => light_theme(),
        Side::Dark => dark_theme(),
    }
}

/// Both halves, with an optional pattern spacing override.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitTheme {
    pub light: Theme,
    pub dark: Theme,
}

impl SplitTheme {
    pub fn new(pattern_spacing: Option<f32>) -> Self {
        let mut light = theme_for(Side::Light);
        let mut dark = theme_for(Side::Dark);
        if let Some(spacing) = pattern_spacing {
            light.pattern_spacing = spacing;
            dark.pattern_spacing = spacing;
            dark.pattern_offset = Vec2::splat(spacing / 2.0);
        }
        Self { light, dark }
    }

    pub fn get(&self, side: Side) -> &Theme {
        match side {
            Side::Light => &self.light,
            Side::Dark => &self.dark,
        }
    }
}

impl Default for SplitTheme {
    fn default() -> Self {
        Self::new(None)
    }
}

pub fn initial_theme() -> Theme {
    dark_theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_contrast() {
        let theme = SplitTheme::default();
        assert_eq!(theme.get(Side::Light).fill, Color32::WHITE);
        assert_eq!(theme.get(Side::Dark).fill, Color32::BLACK);
        assert_eq!(theme.get(Side::Light).ink, theme.get(Side::Dark).fill);
        assert_eq!(theme.get(Side::Dark).ink, theme.get(Side::Light).fill);
    }

    #[test]
    fn spacing_override_recentres_grid() {
        let theme = SplitTheme::new(Some(40.0));
        assert_eq!(theme.light.pattern_spacing, 40.0);
        assert_eq!(theme.dark.pattern_offset, Vec2::splat(20.0));
    }
}
