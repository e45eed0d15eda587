use std::path::PathBuf;

use sketchdeck::application::Notice;
use sketchdeck::domain::DeckTheme;
use sketchdeck::infra::app_config::save_config;
use sketchdeck::infra::opener;

use super::super::super::SketchdeckApp;

pub fn open_path(app: &mut SketchdeckApp, path: PathBuf) {
    if let Err(err) = opener::open_path(&path) {
        log::warn!("failed to open {}: {err}", path.display());
        app.state.ui.notices.push_back(Notice::open_failed(&path, &err));
    }
}

pub fn copy_to_clipboard(app: &mut SketchdeckApp, text: String) {
    let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    if let Err(err) = copied {
        log::warn!("clipboard unavailable: {err}");
        app.state
            .ui
            .notices
            .push_back(Notice::error("Error", format!("Could not copy to clipboard: {err}")));
    }
}

pub fn remember_deck_settings(app: &mut SketchdeckApp, theme: DeckTheme, slide_level: u8) {
    app.config.last_deck_theme = theme;
    app.config.last_slide_level = slide_level;
    if app.skip_persist {
        return;
    }
    if let Err(err) = save_config(&app.config) {
        log::warn!("failed to save settings: {err}");
    }
}
