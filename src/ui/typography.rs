use eframe::egui;

pub fn bold(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).strong()
}

pub fn body(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text)
}

/// Large bold heading
pub fn h1(text: impl Into<String>) -> egui::RichText {
    bold(text).size(20.0)
}

/// Medium bold heading
pub fn h2(text: impl Into<String>) -> egui::RichText {
    bold(text).size(16.0)
}

/// Standard UI label size
pub fn label(text: impl Into<String>) -> egui::RichText {
    body(text).size(13.0)
}

/// Muted body text
pub fn weak(text: impl Into<String>) -> egui::RichText {
    body(text).weak()
}

pub fn mono_font(size: f32) -> egui::FontId {
    egui::FontId::monospace(size)
}
