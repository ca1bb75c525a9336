//! Predict panel for the Tuners GUI
//!
//! Provides image selection (file or URL), submission, preview and result
//! display.

use eframe::egui::{self, Color32, RichText, Ui};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;
use tuners_app::config::Config;
use tuners_app::input::IMAGE_EXTENSIONS;
use tuners_app::submission::{Preview, SubmissionForm};
use tuners_app::PredictionService;
use tuners_types::{Error, ImageSource, ReportEntry, Result};

/// Worker result for one submission
type WorkerResult = Result<Vec<ReportEntry>>;

/// Submission waiting for its worker thread
struct Pending {
    seq: u64,
    receiver: Receiver<WorkerResult>,
    started: Instant,
}

pub struct PredictPanel {
    form: SubmissionForm,
    /// Text buffer for the URL field
    url_input: String,
    pending: Option<Pending>,
}

impl PredictPanel {
    pub fn new() -> Self {
        Self {
            form: SubmissionForm::new(),
            url_input: String::new(),
            pending: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, config: &Config) {
        self.poll(ui.ctx());

        ui.heading("Tuners Vehicle Cost Predictor");
        ui.add_space(10.0);

        if !config.is_usable() {
            ui.label(
                RichText::new("Prediction endpoint or key is not configured (see Settings).")
                    .color(Color32::YELLOW),
            );
            ui.add_space(6.0);
        }

        ui.label(RichText::new("Upload Image or Enter URL").strong());
        ui.add_space(5.0);

        self.render_inputs(ui);

        ui.add_space(8.0);
        self.render_buttons(ui, config);

        ui.add_space(10.0);
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            self.render_preview(ui);
            self.render_error(ui);
            self.render_results(ui);
        });
    }

    /// Drain the worker channel and settle the form
    pub fn poll(&mut self, ctx: &egui::Context) {
        let Some(pending) = &self.pending else {
            return;
        };

        match pending.receiver.try_recv() {
            Ok(result) => {
                let seq = pending.seq;
                self.pending = None;
                self.form.settle(seq, result);
            }
            Err(TryRecvError::Empty) => {
                ctx.request_repaint();
            }
            Err(TryRecvError::Disconnected) => {
                let seq = pending.seq;
                self.pending = None;
                self.form.settle(
                    seq,
                    Err(Error::Io(std::io::Error::other("prediction worker stopped"))),
                );
            }
        }
    }

    fn render_inputs(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("Choose image...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_file()
                {
                    self.form.set_file(Some(path));
                }
            }

            ui.add_space(10.0);

            match self.form.file() {
                Some(path) => {
                    ui.label(
                        RichText::new(path.display().to_string())
                            .monospace()
                            .color(Color32::LIGHT_BLUE),
                    );
                }
                None => {
                    ui.label(RichText::new("No file selected").italics().color(Color32::GRAY));
                }
            }
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Image URL:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.url_input)
                    .hint_text("Enter image URL")
                    .desired_width(420.0),
            );
            if response.changed() {
                self.form.set_image_url(self.url_input.clone());
            }
        });
    }

    fn render_buttons(&mut self, ui: &mut Ui, config: &Config) {
        ui.horizontal(|ui| {
            let in_flight = self.form.is_in_flight();
            let label = if in_flight { "Submitting..." } else { "Submit" };

            if ui
                .add_enabled(!in_flight, egui::Button::new(RichText::new(label).size(16.0)))
                .clicked()
            {
                self.start_submission(config);
            }

            if ui.button(RichText::new("Clear").size(16.0)).clicked() {
                self.form.clear();
                self.url_input.clear();
                self.pending = None;
            }

            if let Some(pending) = &self.pending {
                ui.spinner();
                ui.label(format!("{:.1} s", pending.started.elapsed().as_secs_f32()));
            }
        });
    }

    fn render_preview(&self, ui: &mut Ui) {
        let uri = match self.form.preview() {
            Some(Preview::File(path)) => format!("file://{}", path.display()),
            Some(Preview::Url(url)) => url.clone(),
            None => return,
        };

        ui.add_space(8.0);
        ui.label(RichText::new("Image Preview").strong());
        ui.add(egui::Image::from_uri(uri).max_height(300.0).max_width(ui.available_width()));
    }

    fn render_error(&self, ui: &mut Ui) {
        if let Some(message) = self.form.error() {
            ui.add_space(8.0);
            ui.colored_label(Color32::RED, message);
        }
    }

    fn render_results(&self, ui: &mut Ui) {
        let results = self.form.results();
        if results.is_empty() {
            return;
        }

        ui.add_space(10.0);
        ui.label(RichText::new("Prediction Results").strong().size(16.0));
        ui.add_space(5.0);

        for entry in results {
            egui::Frame::new()
                .fill(Color32::from_gray(30))
                .inner_margin(10.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&entry.category).strong());
                        ui.label(entry.probability_label());
                    });
                    ui.label(format!("Insurance Cost: {}", entry.cost.insurance_cost));
                    ui.label(format!("Finance Option: {}", entry.cost.finance_option));
                });
            ui.add_space(6.0);
        }
    }

    /// Issue a submission on a background thread
    fn start_submission(&mut self, config: &Config) {
        let Ok(ticket) = self.form.begin() else {
            // The form now shows the validation message
            return;
        };

        let (sender, receiver) = channel();
        self.pending = Some(Pending {
            seq: ticket.seq,
            receiver,
            started: Instant::now(),
        });

        let config = config.clone();
        thread::spawn(move || {
            let _ = sender.send(run_prediction(&config, &ticket.source));
        });
    }
}

/// Run one prediction on a private single-threaded runtime
fn run_prediction(config: &Config, source: &ImageSource) -> WorkerResult {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let service = PredictionService::from_config(config)?;
        service.predict(source).await
    })
}
