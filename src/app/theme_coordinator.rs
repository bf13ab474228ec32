//! Presentation hook for the theme preference.
//!
//! The preference store owns the theme value; this coordinator is the one
//! place that value becomes visible, by projecting it onto the shared egui
//! visuals every frame. Panels style themselves from those visuals (and the
//! matching palette) implicitly, which is how every surface reflects the
//! same theme without subscribing to the store.

use logai::ThemePreference;

use crate::app::AppState;
use crate::presentation::color_mapping;

pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the store's resolved preference to the egui context.
    ///
    /// Called every frame; re-applying the same resolved value is the
    /// intended steady state.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        // The first frame runs after hydration; reaching this un-hydrated
        // means the app wiring skipped hydrate(), which is an integration
        // bug rather than a runtime condition.
        debug_assert!(
            state.prefs.is_hydrated(),
            "theme applied before preference hydration"
        );

        let preference = state.prefs.value();
        let mut visuals = match preference {
            ThemePreference::Dark => egui::Visuals::dark(),
            ThemePreference::Light => egui::Visuals::light(),
        };

        let colors = color_mapping::theme_colors(preference);
        color_mapping::apply_to_visuals(colors, &mut visuals);
        ctx.set_visuals(visuals);
    }

    /// Flips the theme through the store's mutation path.
    pub fn toggle(state: &mut AppState) {
        state.prefs.toggle_preference();
    }

    /// Selects a specific theme through the store's mutation path.
    pub fn select(state: &mut AppState, preference: ThemePreference) {
        state.prefs.set_preference(preference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logai::preferences::MemoryStorage;
    use logai::PreferenceStore;

    fn state_with(value: ThemePreference) -> AppState {
        let mut prefs = PreferenceStore::new(Box::new(MemoryStorage::new()), || false);
        prefs.hydrate();
        prefs.set_preference(value);
        AppState::new(prefs)
    }

    #[test]
    fn test_dark_preference_sets_dark_visuals() {
        let ctx = egui::Context::default();
        let state = state_with(ThemePreference::Dark);

        ThemeCoordinator::apply_current_theme(&ctx, &state);
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_light_preference_sets_light_visuals() {
        let ctx = egui::Context::default();
        let state = state_with(ThemePreference::Light);

        ThemeCoordinator::apply_current_theme(&ctx, &state);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_toggle_round_trip_through_visuals() {
        let ctx = egui::Context::default();
        let mut state = state_with(ThemePreference::Dark);

        ThemeCoordinator::toggle(&mut state);
        ThemeCoordinator::apply_current_theme(&ctx, &state);
        assert!(!ctx.style().visuals.dark_mode);

        ThemeCoordinator::toggle(&mut state);
        ThemeCoordinator::apply_current_theme(&ctx, &state);
        assert!(ctx.style().visuals.dark_mode);
    }
}
