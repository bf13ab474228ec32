//! Settings form state.
//!
//! Numeric settings are edited through text buffers that are parsed on
//! commit and re-synced when parsing fails, so a half-typed number never
//! corrupts the stored value.

use logai::DashboardSettings;

pub struct SettingsState {
    values: DashboardSettings,
    /// Text buffer for the anomaly threshold field
    threshold_text: String,
    /// Text buffer for the refresh interval field
    interval_text: String,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::with_values(DashboardSettings::default())
    }
}

impl SettingsState {
    pub fn with_values(values: DashboardSettings) -> Self {
        let threshold_text = format!("{:.2}", values.anomaly_threshold);
        let interval_text = values.refresh_interval.to_string();
        Self {
            values,
            threshold_text,
            interval_text,
        }
    }

    pub fn values(&self) -> &DashboardSettings {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut DashboardSettings {
        &mut self.values
    }

    pub fn threshold_text_mut(&mut self) -> &mut String {
        &mut self.threshold_text
    }

    pub fn interval_text_mut(&mut self) -> &mut String {
        &mut self.interval_text
    }

    /// Parses the text buffers into the settings values.
    ///
    /// Invalid or out-of-range input resets the buffer to the current value
    /// instead of applying it. Thresholds are clamped to the detector's
    /// score range, intervals to at least one second.
    pub fn commit_text_fields(&mut self) {
        match self.threshold_text.trim().parse::<f64>() {
            Ok(value) if (0.0..=1.0).contains(&value) => {
                self.values.anomaly_threshold = value;
            }
            _ => {}
        }
        if let Ok(value) = self.interval_text.trim().parse::<u32>() {
            if value >= 1 {
                self.values.refresh_interval = value;
            }
        }
        self.sync_text_fields();
    }

    /// Re-syncs the text buffers from the current values.
    pub fn sync_text_fields(&mut self) {
        self.threshold_text = format!("{:.2}", self.values.anomaly_threshold);
        self.interval_text = self.values.refresh_interval.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_applies_valid_input() {
        let mut settings = SettingsState::default();
        settings.threshold_text_mut().clear();
        settings.threshold_text_mut().push_str("0.85");
        settings.interval_text_mut().clear();
        settings.interval_text_mut().push_str("60");

        settings.commit_text_fields();
        assert_eq!(settings.values().anomaly_threshold, 0.85);
        assert_eq!(settings.values().refresh_interval, 60);
    }

    #[test]
    fn test_commit_rejects_invalid_input() {
        let mut settings = SettingsState::default();
        let original = settings.values().clone();

        settings.threshold_text_mut().clear();
        settings.threshold_text_mut().push_str("five");
        settings.interval_text_mut().clear();
        settings.interval_text_mut().push_str("0");

        settings.commit_text_fields();
        assert_eq!(settings.values(), &original);
        // Buffers are reset to the surviving values
        assert_eq!(settings.threshold_text_mut().as_str(), "0.70");
        assert_eq!(settings.interval_text_mut().as_str(), "30");
    }

    #[test]
    fn test_commit_rejects_out_of_range_threshold() {
        let mut settings = SettingsState::default();
        settings.threshold_text_mut().clear();
        settings.threshold_text_mut().push_str("1.5");
        settings.commit_text_fields();
        assert_eq!(settings.values().anomaly_threshold, 0.7);
    }
}
