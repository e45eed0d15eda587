//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, AsyncAction, DeckAction, DiagramAction, NavigationAction, NoticeAction};

use super::SketchdeckApp;

impl SketchdeckApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
