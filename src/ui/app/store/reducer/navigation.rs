use super::super::action::NavigationAction;
use super::super::command::Command;
use crate::ui::app::state::UiState;

pub fn reduce(ui: &mut UiState, action: NavigationAction) -> Vec<Command> {
    match action {
        NavigationAction::SwitchTo(view) => {
            ui.current_view = view;
            Vec::new()
        }
    }
}
