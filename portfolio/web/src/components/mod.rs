mod access_toast;
mod header;
mod new_project_modal;
mod project_card;
mod project_details;

pub use access_toast::{AccessToast, ToastState};
pub use header::Header;
pub use new_project_modal::NewProjectModal;
pub use project_card::ProjectCard;
pub use project_details::ProjectDetails;
