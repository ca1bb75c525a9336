//! Settings panel for the Tuners GUI

use eframe::egui::{self, Color32, RichText, Ui};
use tuners_app::config::Config;

pub struct SettingsPanel {
    prediction_key: String,
    endpoint_url: String,
    endpoint_file: String,
    timeout_input: String,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl SettingsPanel {
    pub fn new(config: &Config) -> Self {
        Self {
            prediction_key: config.prediction_key.clone().unwrap_or_default(),
            endpoint_url: config.endpoint_url.clone().unwrap_or_default(),
            endpoint_file: config.endpoint_file.clone().unwrap_or_default(),
            timeout_input: config
                .request_timeout_secs
                .map(|s| s.to_string())
                .unwrap_or_default(),
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, config: &mut Config) {
        ui.heading("Settings");
        ui.add_space(10.0);

        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Prediction key:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.prediction_key)
                        .password(true)
                        .desired_width(420.0),
                );
                ui.end_row();

                ui.label("Endpoint (URL):");
                ui.add(egui::TextEdit::singleline(&mut self.endpoint_url).desired_width(420.0));
                ui.end_row();

                ui.label("Endpoint (file):");
                ui.add(egui::TextEdit::singleline(&mut self.endpoint_file).desired_width(420.0));
                ui.end_row();

                ui.label("Timeout (s):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.timeout_input)
                        .hint_text("none")
                        .desired_width(60.0),
                );
                ui.end_row();
            });

        ui.add_space(6.0);
        ui.label(
            RichText::new("AZURE_PREDICTION_KEY / AZURE_ENDPOINT_URL / AZURE_ENDPOINT_FILE override these values.")
                .small()
                .color(Color32::GRAY),
        );

        ui.add_space(10.0);
        if ui.button("Save").clicked() {
            self.status_message = Some(match parse_timeout(&self.timeout_input) {
                Err(message) => (message, true),
                Ok(timeout) => match self.save(config, timeout) {
                    Ok(()) => ("Settings saved".to_string(), false),
                    Err(e) => (format!("Failed to save settings: {}", e), true),
                },
            });
        }

        if let Some((message, is_error)) = &self.status_message {
            ui.add_space(6.0);
            let color = if *is_error { Color32::RED } else { Color32::GREEN };
            ui.colored_label(color, message);
        }
    }

    fn save(&self, config: &mut Config, timeout: Option<u64>) -> tuners_types::Result<()> {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        // Persist file values only; environment overrides are re-applied after
        let mut file_config = Config::load_file()?;
        file_config.prediction_key = non_empty(&self.prediction_key);
        file_config.endpoint_url = non_empty(&self.endpoint_url);
        file_config.endpoint_file = non_empty(&self.endpoint_file);
        file_config.request_timeout_secs = timeout;
        file_config.save()?;

        let mut effective = file_config;
        effective.apply_env(|key| std::env::var(key).ok());
        *config = effective;
        Ok(())
    }
}

/// Parse the timeout field. Blank or 0 means no timeout.
fn parse_timeout(input: &str) -> Result<Option<u64>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse::<u64>()
        .map(|secs| (secs > 0).then_some(secs))
        .map_err(|_| format!("Invalid timeout `{}`: enter whole seconds", input))
}
