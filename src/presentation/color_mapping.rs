//! Theme palettes and semantic color mapping.
//!
//! Two fixed palettes, one per theme preference. All panels draw their
//! colors from here so every surface agrees with the active theme without
//! consulting the preference store directly.

use egui::Color32;
use logai::{AnomalyStatus, LogLevel, Severity, SystemStatus, ThemePreference};

/// Color palette for one theme, covering the dashboard's UI elements.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Surfaces
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub hover: Color32,
    pub selection: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,

    // Semantic
    pub accent: Color32,
    pub success: Color32,
    pub info: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub muted: Color32,
}

static DARK: ThemeColors = ThemeColors {
    panel_background: Color32::from_rgb(30, 32, 38),
    extreme_background: Color32::from_rgb(18, 19, 23),
    hover: Color32::from_rgb(52, 56, 66),
    selection: Color32::from_rgb(50, 80, 120),

    text: Color32::from_rgb(228, 230, 235),
    text_dim: Color32::from_rgb(140, 146, 158),

    accent: Color32::from_rgb(97, 175, 239),
    success: Color32::from_rgb(46, 204, 113),
    info: Color32::from_rgb(86, 182, 194),
    warning: Color32::from_rgb(243, 156, 18),
    error: Color32::from_rgb(231, 76, 60),
    muted: Color32::from_rgb(110, 118, 129),
};

static LIGHT: ThemeColors = ThemeColors {
    panel_background: Color32::from_rgb(248, 248, 248),
    extreme_background: Color32::from_rgb(255, 255, 255),
    hover: Color32::from_rgb(222, 224, 228),
    selection: Color32::from_rgb(180, 200, 255),

    text: Color32::from_rgb(28, 30, 34),
    text_dim: Color32::from_rgb(110, 116, 126),

    accent: Color32::from_rgb(40, 100, 200),
    success: Color32::from_rgb(36, 140, 60),
    info: Color32::from_rgb(0, 140, 160),
    warning: Color32::from_rgb(200, 110, 20),
    error: Color32::from_rgb(190, 40, 40),
    muted: Color32::from_rgb(130, 134, 140),
};

/// Palette for the given theme preference.
pub fn theme_colors(preference: ThemePreference) -> &'static ThemeColors {
    match preference {
        ThemePreference::Dark => &DARK,
        ThemePreference::Light => &LIGHT,
    }
}

/// Color for a log level label.
pub fn level_color(level: LogLevel, colors: &ThemeColors) -> Color32 {
    match level {
        LogLevel::Debug => colors.muted,
        LogLevel::Info => colors.info,
        LogLevel::Warning => colors.warning,
        LogLevel::Error => colors.error,
        LogLevel::Critical => colors.error,
    }
}

/// Color for an anomaly severity badge.
pub fn severity_color(severity: Severity, colors: &ThemeColors) -> Color32 {
    match severity {
        Severity::Critical => colors.error,
        Severity::Warning => colors.warning,
        Severity::Info => colors.info,
    }
}

/// Color for an incident triage status.
pub fn status_color(status: AnomalyStatus, colors: &ThemeColors) -> Color32 {
    match status {
        AnomalyStatus::Open => colors.error,
        AnomalyStatus::Investigating => colors.warning,
        AnomalyStatus::Resolved => colors.success,
    }
}

/// Color for the backend health indicator.
pub fn system_status_color(status: SystemStatus, colors: &ThemeColors) -> Color32 {
    match status {
        SystemStatus::Healthy => colors.success,
        SystemStatus::Degraded => colors.warning,
        SystemStatus::Down => colors.error,
    }
}

/// Projects the palette onto egui visuals so built-in widgets agree with
/// the custom-painted elements.
pub fn apply_to_visuals(colors: &ThemeColors, visuals: &mut egui::Visuals) {
    visuals.panel_fill = colors.panel_background;
    visuals.extreme_bg_color = colors.extreme_background;
    visuals.faint_bg_color = colors.hover;

    visuals.override_text_color = Some(colors.text);

    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke.color = colors.accent;

    visuals.widgets.noninteractive.bg_fill = colors.panel_background;
    visuals.widgets.inactive.bg_fill = colors.hover;
    visuals.widgets.hovered.bg_fill = colors.hover;
    visuals.widgets.active.bg_fill = colors.selection;

    visuals.hyperlink_color = colors.accent;

    visuals.error_fg_color = colors.error;
    visuals.warn_fg_color = colors.warning;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_per_preference() {
        let dark = theme_colors(ThemePreference::Dark);
        let light = theme_colors(ThemePreference::Light);
        assert_ne!(dark.panel_background, light.panel_background);
        assert_ne!(dark.text, light.text);
    }

    #[test]
    fn test_error_levels_share_error_color() {
        let colors = theme_colors(ThemePreference::Dark);
        assert_eq!(
            level_color(LogLevel::Error, colors),
            level_color(LogLevel::Critical, colors)
        );
    }

    #[test]
    fn test_apply_to_visuals_overrides_fills() {
        let colors = theme_colors(ThemePreference::Light);
        let mut visuals = egui::Visuals::light();
        apply_to_visuals(colors, &mut visuals);
        assert_eq!(visuals.panel_fill, colors.panel_background);
        assert_eq!(visuals.override_text_color, Some(colors.text));
    }
}
