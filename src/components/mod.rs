//! UI Components
//!
//! Leptos components making up the widget.

mod new_item_form;
mod filter_bar;
mod todo_row;
mod todo_list_view;
mod todo_footer;
mod delete_confirm_button;

pub use new_item_form::NewItemForm;
pub use filter_bar::FilterBar;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use todo_footer::TodoFooter;
pub use delete_confirm_button::DeleteConfirmButton;
