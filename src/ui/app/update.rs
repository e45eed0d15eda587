use eframe::egui;

use super::SketchdeckApp;
use super::state::AppView;
use crate::ui::app::{Action, NavigationAction};
use crate::ui::{spacing, typography};

impl eframe::App for SketchdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut visuals = egui::Visuals::dark();
        visuals.window_corner_radius = egui::CornerRadius::same(spacing::RADIUS_LG);
        visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);
        visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);
        visuals.widgets.active.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);
        ctx.set_visuals(visuals);

        let diagram_updated = self.poll_diagram_messages();
        let deck_updated = self.poll_deck_messages();

        // Workers wake us on every message; this keeps spinners moving in between.
        if diagram_updated || deck_updated || self.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.render_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.state.ui.current_view {
            AppView::Diagram => self.ui_diagram(ui),
            AppView::Deck => self.ui_deck(ui),
        });

        self.render_notice_overlay(ctx);
    }
}

impl SketchdeckApp {
    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(spacing::SPACING_XS);
            ui.horizontal(|ui| {
                ui.label(typography::h2("Sketchdeck"));
                ui.add_space(spacing::SPACING_LG);
                for view in [AppView::Diagram, AppView::Deck] {
                    let selected = self.state.ui.current_view == view;
                    if ui.selectable_label(selected, view.title()).clicked() && !selected {
                        self.dispatch(Action::Navigation(NavigationAction::SwitchTo(view)));
                    }
                }
            });
            ui.add_space(spacing::SPACING_XS);
        });
    }
}
