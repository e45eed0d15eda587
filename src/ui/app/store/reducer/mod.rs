pub mod async_handler;
pub mod deck;
pub mod diagram;
pub mod navigation;
pub mod notice;

#[cfg(test)]
mod tests;

use super::super::state::AppState;
use super::action::Action;
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Navigation(action) => navigation::reduce(&mut state.ui, action),
        Action::Diagram(action) => diagram::reduce(&mut state.ui, &mut state.diagram, action),
        Action::Deck(action) => deck::reduce(&mut state.ui, &mut state.deck, action),
        Action::Notice(action) => notice::reduce(&mut state.ui, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}
