//! Result directives produced by controller actions.

use crate::domain::Joke;

/// Named views a controller action can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    ShowSearchForm,
    Details,
    Create,
    Edit,
    Delete,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Index => "index",
            View::ShowSearchForm => "show_search_form",
            View::Details => "details",
            View::Create => "create",
            View::Edit => "edit",
            View::Delete => "delete",
        }
    }
}

/// Redirect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Index,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    None,
    Joke(Joke),
    Jokes(Vec<Joke>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    View { view: View, model: ViewModel },
    Redirect(Action),
    NotFound,
}

impl ActionResult {
    pub fn view(view: View, model: ViewModel) -> Self {
        ActionResult::View { view, model }
    }

    pub fn blank(view: View) -> Self {
        ActionResult::View {
            view,
            model: ViewModel::None,
        }
    }

    pub fn redirect_to_index() -> Self {
        ActionResult::Redirect(Action::Index)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ActionResult::NotFound)
    }
}
