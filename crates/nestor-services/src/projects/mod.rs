//! Project services

mod create;
mod delete;
mod stage_transition;
mod update;

pub use create::CreateProjectService;
pub use delete::DeleteProjectService;
pub use stage_transition::{StageTransition, StageTransitionService};
pub use update::UpdateProjectService;
