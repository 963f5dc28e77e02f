//! Contact services

mod create;
mod delete;
mod update;

pub use create::CreateContactService;
pub use delete::DeleteContactService;
pub use update::UpdateContactService;
