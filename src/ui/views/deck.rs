//! Markdown source, conversion options and the convert button.

use eframe::egui;

use sketchdeck::domain::{DeckInputMode, DeckTheme, SlideLevel};

use crate::ui::app::{Action, DeckAction, SketchdeckApp};
use crate::ui::{spacing, typography};

impl SketchdeckApp {
    pub fn ui_deck(&mut self, ui: &mut egui::Ui) {
        let busy = self.state.deck.is_busy();
        let form = self.state.deck.form.clone();
        let mut actions = Vec::new();

        ui.label(typography::h1("Markdown to slides"));
        ui.add_space(spacing::SPACING_SM);

        ui.horizontal(|ui| {
            ui.label(typography::label("Source"));
            let mut mode = form.mode;
            ui.radio_value(&mut mode, DeckInputMode::File, "Markdown file");
            ui.radio_value(&mut mode, DeckInputMode::Editor, "Editor");
            if mode != form.mode {
                actions.push(DeckAction::SetMode(mode));
            }
        });

        ui.add_space(spacing::SPACING_XS);
        ui.horizontal(|ui| {
            ui.label(typography::label("Input"));
            let mut input = form.input_path.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut input)
                    .hint_text("notes.md")
                    .desired_width(360.0),
            );
            if response.changed() {
                actions.push(DeckAction::UpdateInputPath(input));
            }
            if ui.button("Browse...").clicked() {
                actions.push(DeckAction::BrowseInput);
            }
            if ui.button("Load into editor").clicked() {
                actions.push(DeckAction::LoadInputIntoEditor);
            }
        });

        ui.add_space(spacing::SPACING_XS);
        ui.horizontal(|ui| {
            ui.label(typography::label("Output"));
            let mut output = form.output_path.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut output)
                    .hint_text("slides.pptx")
                    .desired_width(360.0),
            );
            if response.changed() {
                actions.push(DeckAction::UpdateOutputPath(output));
            }
            if ui.button("Browse...").clicked() {
                actions.push(DeckAction::BrowseOutput);
            }
        });

        ui.add_space(spacing::SPACING_SM);
        ui.horizontal(|ui| {
            ui.label(typography::label("Theme"));
            let mut theme = form.theme;
            egui::ComboBox::from_id_salt("deck_theme")
                .selected_text(theme.as_str())
                .show_ui(ui, |ui| {
                    for option in DeckTheme::ALL {
                        ui.selectable_value(&mut theme, option, option.as_str());
                    }
                });
            if theme != form.theme {
                actions.push(DeckAction::SetTheme(theme));
            }

            ui.add_space(spacing::SPACING_LG);
            ui.label(typography::label("Slide level"));
            let mut level = form.slide_level;
            ui.add(egui::Slider::new(&mut level, SlideLevel::MIN..=SlideLevel::MAX));
            if level != form.slide_level {
                actions.push(DeckAction::SetSlideLevel(level));
            }

            ui.add_space(spacing::SPACING_LG);
            let mut incremental = form.incremental;
            if ui.checkbox(&mut incremental, "Incremental bullets").changed() {
                actions.push(DeckAction::SetIncremental(incremental));
            }
        });

        ui.add_space(spacing::SPACING_SM);
        ui.horizontal(|ui| {
            let label = if busy { "Converting..." } else { "Convert" };
            if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                actions.push(DeckAction::RunRequested);
            }
            if form.mode == DeckInputMode::Editor && ui.button("Insert sample").clicked() {
                actions.push(DeckAction::InsertSample);
            }
        });

        super::progress_strip(ui, busy, self.state.deck.progress.as_ref());

        if form.mode == DeckInputMode::Editor {
            ui.add_space(spacing::SPACING_SM);
            let mut markdown = form.markdown.clone();
            let changed = egui::ScrollArea::vertical()
                .id_salt("deck_editor")
                .show(ui, |ui| {
                    ui.add_sized(
                        ui.available_size(),
                        egui::TextEdit::multiline(&mut markdown)
                            .font(typography::mono_font(13.0))
                            .hint_text("# Title\n\n## First slide\n\n- point"),
                    )
                    .changed()
                })
                .inner;
            if changed {
                actions.push(DeckAction::UpdateMarkdown(markdown));
            }
        }

        for action in actions {
            self.dispatch(Action::Deck(action));
        }
    }
}
