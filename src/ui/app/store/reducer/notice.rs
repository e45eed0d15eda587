use super::super::action::NoticeAction;
use super::super::command::Command;
use crate::ui::app::state::UiState;

pub fn reduce(ui: &mut UiState, action: NoticeAction) -> Vec<Command> {
    let Some(notice) = ui.notices.pop_front() else {
        return Vec::new();
    };
    match action {
        NoticeAction::Dismiss => Vec::new(),
        NoticeAction::OpenConfirmed => notice.offer_open.map(Command::OpenPath).into_iter().collect(),
    }
}
