//! Role and department rules deciding what a user may see or do.
//!
//! The dashboard uses these as hints to grey out cards and hide actions.
//! [`crate::Portfolio`] applies the same rules as hard checks.

use crate::model::{Employee, Project};

/// True when `user` is outside the project's department and not an admin.
pub fn is_locked(user: &Employee, project: &Project) -> bool {
    !user.is_admin() && project.department_id != user.department_id
}

/// Only admins may launch new projects.
pub fn can_create_projects(user: &Employee) -> bool {
    user.is_admin()
}
