//! Custom list services

mod create;
mod delete;
mod items;

pub use create::CreateCustomListService;
pub use delete::DeleteCustomListService;
pub use items::{AddListItemService, RemoveListItemService};
