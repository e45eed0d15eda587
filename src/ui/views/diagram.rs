//! Description box, generate button and the rendered preview.

use eframe::egui;

use sketchdeck::infra::image::fit_within;

use crate::ui::app::{Action, DiagramAction, SketchdeckApp};
use crate::ui::{spacing, typography};

impl SketchdeckApp {
    pub fn ui_diagram(&mut self, ui: &mut egui::Ui) {
        let busy = self.state.diagram.is_busy();

        ui.label(typography::h1("Describe a diagram"));
        ui.add_space(spacing::SPACING_SM);

        let mut description = self.state.diagram.description.clone();
        let response = ui.add(
            egui::TextEdit::multiline(&mut description)
                .hint_text("e.g. the login flow: user submits the form, the server checks the password")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.dispatch(Action::Diagram(DiagramAction::UpdateDescription(description)));
        }

        ui.add_space(spacing::SPACING_SM);
        let mut run = false;
        ui.horizontal(|ui| {
            let label = if busy { "Generating..." } else { "Generate diagram" };
            run = ui.add_enabled(!busy, egui::Button::new(label)).clicked();

            if self.state.diagram.last_markup.is_some() {
                ui.add_space(spacing::SPACING_MD);
                let toggle = if self.state.diagram.show_markup {
                    "Hide markup"
                } else {
                    "Show markup"
                };
                if ui.button(toggle).clicked() {
                    self.dispatch(Action::Diagram(DiagramAction::ToggleMarkup));
                }
                if ui.button("Copy markup").clicked() {
                    self.dispatch(Action::Diagram(DiagramAction::CopyMarkup));
                }
            }
        });

        super::progress_strip(ui, busy, self.state.diagram.progress.as_ref());

        if self.state.diagram.show_markup
            && let Some(markup) = &self.state.diagram.last_markup
        {
            ui.add_space(spacing::SPACING_SM);
            egui::ScrollArea::vertical()
                .id_salt("diagram_markup")
                .max_height(160.0)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut markup.as_str())
                            .font(typography::mono_font(12.0))
                            .desired_width(f32::INFINITY),
                    );
                });
        }

        ui.add_space(spacing::SPACING_MD);
        ui.separator();

        let available = ui.available_size();
        let ppp = ui.ctx().pixels_per_point();
        let frame = (
            (available.x * ppp).max(0.0) as u32,
            (available.y * ppp).max(0.0) as u32,
        );

        if run {
            self.dispatch(Action::Diagram(DiagramAction::RunRequested { frame }));
        }

        self.show_preview(ui, frame, ppp);
    }

    fn show_preview(&mut self, ui: &mut egui::Ui, frame: (u32, u32), ppp: f32) {
        let Some(image) = self.state.diagram.preview.clone() else {
            ui.centered_and_justified(|ui| {
                ui.label(typography::weak("The generated diagram appears here."));
            });
            return;
        };

        let revision = self.state.diagram.preview_revision;
        let stale = self
            .preview_texture
            .as_ref()
            .is_none_or(|(uploaded, _)| *uploaded != revision);
        if stale {
            let [w, h] = image.size;
            let pixels =
                egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &image.rgba);
            let texture =
                ui.ctx()
                    .load_texture("diagram_preview", pixels, egui::TextureOptions::LINEAR);
            self.preview_texture = Some((revision, texture));
        }

        let Some((_, texture)) = &self.preview_texture else {
            return;
        };
        // Re-fit every frame so shrinking the window shrinks the image.
        let size = preview_size(image.size, frame, ppp);
        egui::ScrollArea::both()
            .id_salt("diagram_preview")
            .show(ui, |ui| {
                ui.add(egui::Image::new(egui::load::SizedTexture::new(
                    texture.id(),
                    size,
                )));
            });
    }
}

/// On-screen size in points for an image of `native` pixels shown in a panel
/// of `frame` physical pixels. Never larger than one image pixel per screen pixel.
fn preview_size(native: [u32; 2], frame: (u32, u32), ppp: f32) -> egui::Vec2 {
    let (w, h) = fit_within((native[0], native[1]), (frame.0.max(1), frame.1.max(1)));
    let ppp = if ppp > 0.0 { ppp } else { 1.0 };
    egui::vec2(w as f32 / ppp, h as f32 / ppp)
}
