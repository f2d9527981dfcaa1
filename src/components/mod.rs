//! UI Components
//!
//! Reusable Leptos components.

mod about_page;
mod nav_bar;
mod new_todo_form;
mod saving_indicator;
mod todo_row;
mod todos_page;

pub use about_page::AboutPage;
pub use nav_bar::NavBar;
pub use new_todo_form::NewTodoForm;
pub use saving_indicator::SavingIndicator;
pub use todo_row::TodoRow;
pub use todos_page::TodosPage;
