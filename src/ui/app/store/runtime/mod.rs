pub mod deck;
pub mod diagram;
pub mod system;

#[cfg(test)]
mod tests;

use super::super::SketchdeckApp;
use super::command::Command;

pub fn run(app: &mut SketchdeckApp, command: Command) {
    match command {
        Command::GenerateDiagram { request, target } => {
            diagram::start_generation(app, request, target)
        }
        Command::ConvertDeck { request } => deck::start_conversion(app, request),
        Command::PickInputFile => deck::pick_input_file(app),
        Command::PickOutputFile { suggested } => deck::pick_output_file(app, suggested),
        Command::OpenPath(path) => system::open_path(app, path),
        Command::CopyToClipboard(text) => system::copy_to_clipboard(app, text),
        Command::RememberDeckSettings { theme, slide_level } => {
            system::remember_deck_settings(app, theme, slide_level)
        }
    }
}
