pub mod deck;
pub mod diagram;

use eframe::egui;

use sketchdeck::application::WorkflowProgress;

use crate::ui::typography;

/// Spinner, bar and status line for an in-flight or finished run.
pub(crate) fn progress_strip(ui: &mut egui::Ui, busy: bool, progress: Option<&WorkflowProgress>) {
    let Some(progress) = progress else {
        return;
    };
    ui.horizontal(|ui| {
        if busy {
            ui.spinner();
        }
        ui.add(
            egui::ProgressBar::new(progress.fraction())
                .desired_width(220.0)
                .show_percentage(),
        );
        ui.label(typography::weak(progress.status.as_str()));
    });
}
