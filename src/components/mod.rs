//! UI Components
//!
//! Leptos views bound to the stores in context.

mod filter_bar;
mod settings_panel;
mod toast_host;
mod todo_footer;
mod todo_input;
mod todo_list;

pub use filter_bar::FilterBar;
pub use settings_panel::SettingsPanel;
pub use toast_host::ToastHost;
pub use todo_footer::TodoFooter;
pub use todo_input::TodoInput;
pub use todo_list::TodoList;
