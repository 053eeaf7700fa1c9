use eframe::egui::{self, Color32};
use palette::{Darken, Hsl, IntoColor, Lighten, Srgb};

// ---------------------------------------------------------------------------
// Dashboard palette: one navy base, everything else derived from it
// ---------------------------------------------------------------------------

/// `#253275`, the league's navy.
pub const BACKGROUND_BLUE: [u8; 3] = [0x25, 0x32, 0x75];

/// Colours used across panels, tables and plots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color32,
    /// Slightly lighter navy for table stripes and card backgrounds.
    pub raised: Color32,
    /// Darker navy for widget backgrounds and separators.
    pub sunken: Color32,
    pub text: Color32,
    /// Marker, line and bar colour in the charts.
    pub series: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_base(BACKGROUND_BLUE)
    }
}

impl Theme {
    pub fn from_base([r, g, b]: [u8; 3]) -> Self {
        let base: Hsl = Srgb::new(r, g, b).into_format::<f32>().into_color();
        Self {
            background: Color32::from_rgb(r, g, b),
            raised: to_color32(base.lighten(0.12)),
            sunken: to_color32(base.darken(0.25)),
            text: Color32::WHITE,
            series: Color32::WHITE,
        }
    }

    /// Install the navy look on an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(self.text);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.sunken;
        visuals.faint_bg_color = self.raised;
        visuals.widgets.inactive.bg_fill = self.raised;
        visuals.widgets.inactive.weak_bg_fill = self.raised;
        ctx.set_visuals(visuals);
    }
}

fn to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(c: Color32) -> u32 {
        c.r() as u32 + c.g() as u32 + c.b() as u32
    }

    #[test]
    fn shades_bracket_the_base() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color32::from_rgb(0x25, 0x32, 0x75));
        assert!(luminance(theme.raised) > luminance(theme.background));
        assert!(luminance(theme.sunken) < luminance(theme.background));
    }

    #[test]
    fn shades_keep_the_blue_hue() {
        let theme = Theme::default();
        for c in [theme.raised, theme.sunken] {
            assert!(c.b() >= c.r() && c.b() >= c.g(), "{c:?} is not blue");
        }
    }
}
