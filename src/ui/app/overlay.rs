use eframe::egui;

use sketchdeck::application::NoticeLevel;

use super::{Action, NoticeAction, SketchdeckApp};
use crate::ui::{spacing, typography};

impl SketchdeckApp {
    pub(super) fn render_notice_overlay(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.state.ui.notices.front().cloned() else {
            return;
        };

        let mut action = None;
        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice_overlay"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_max_width(420.0);
                let body = typography::body(notice.body.as_str());
                let body = match notice.level {
                    NoticeLevel::Error => body.color(ui.visuals().error_fg_color),
                    NoticeLevel::Info => body,
                };
                ui.add(egui::Label::new(body).wrap());
                ui.add_space(spacing::SPACING_MD);

                ui.horizontal(|ui| {
                    if notice.offer_open.is_some() {
                        ui.label(typography::label("Open file?"));
                        if ui.button("Yes").clicked() {
                            action = Some(NoticeAction::OpenConfirmed);
                        }
                        if ui.button("No").clicked() {
                            action = Some(NoticeAction::Dismiss);
                        }
                    } else if ui.button("OK").clicked() {
                        action = Some(NoticeAction::Dismiss);
                    }
                });
            });

        if let Some(action) = action {
            self.dispatch(Action::Notice(action));
        }
    }
}
