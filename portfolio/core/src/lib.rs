//! Domain model and view rules for the project portfolio dashboard.
pub mod access;
pub mod draft;
pub mod model;
pub mod overview;
pub mod portfolio;
pub mod progress;

pub use access::{can_create_projects, is_locked};
pub use draft::{NewProject, ProjectDraft};
pub use model::{
    DEPARTMENTS, Department, Employee, Project, ProjectStatus, Role, Step, Task, TaskStatus,
};
pub use overview::ProjectOverview;
pub use portfolio::{Portfolio, PortfolioError};
pub use progress::progress_percent;
