pub mod action_result;
pub mod jokes_controller;
pub mod seed;

pub use action_result::{Action, ActionResult, View, ViewModel};
pub use jokes_controller::JokesController;
