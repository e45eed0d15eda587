use super::SketchdeckApp;
use crate::ui::app::{Action, AsyncAction};

impl SketchdeckApp {
    pub(super) fn poll_diagram_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(msg) = self.diagram_rx.try_recv() {
            self.dispatch(Action::Async(AsyncAction::Diagram(msg)));
            any = true;
        }
        any
    }

    pub(super) fn poll_deck_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(msg) = self.deck_rx.try_recv() {
            self.dispatch(Action::Async(AsyncAction::Deck(msg)));
            any = true;
        }
        any
    }
}
