mod selection_action;

pub use selection_action::SelectionAction;
