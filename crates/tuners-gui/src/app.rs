//! Main application structure with tab navigation

use eframe::egui;
use tuners_app::config::Config;

use crate::cost_panel::CostPanel;
use crate::predict_panel::PredictPanel;
use crate::settings_panel::SettingsPanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Predict,
    Costs,
    Settings,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Predict => "Predict",
            Tab::Costs => "Costs",
            Tab::Settings => "Settings",
        }
    }
}

/// Main application state
pub struct TunersApp {
    current_tab: Tab,
    predict_panel: PredictPanel,
    cost_panel: CostPanel,
    settings_panel: SettingsPanel,
    /// Effective configuration (file plus environment)
    config: Config,
}

impl TunersApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Needed for the file:// and http(s):// image previews
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load configuration, using defaults");
            Config::default()
        });
        // Settings edit the file values, not the environment overrides
        let settings_panel = SettingsPanel::new(&Config::load_file().unwrap_or_default());

        Self {
            current_tab: Tab::default(),
            predict_panel: PredictPanel::new(),
            cost_panel: CostPanel::new(),
            settings_panel,
            config,
        }
    }

    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for tab in [Tab::Predict, Tab::Costs, Tab::Settings] {
                let selected = self.current_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.current_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
    }
}

impl eframe::App for TunersApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_tab_bar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Predict => self.predict_panel.ui(ui, &self.config),
            Tab::Costs => self.cost_panel.ui(ui),
            Tab::Settings => self.settings_panel.ui(ui, &mut self.config),
        });

        // Keep draining worker results while another tab is shown
        if self.current_tab != Tab::Predict {
            self.predict_panel.poll(ctx);
        }
    }
}
