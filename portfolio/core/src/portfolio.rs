use crate::access::{can_create_projects, is_locked};
use crate::draft::NewProject;
use crate::model::{Employee, EmployeeId, Project, ProjectId, Task};
use crate::overview::{self, ProjectOverview};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The owner of the dashboard's collections.
///
/// Unlike the dashboard's lock badges, the checks here are enforced: a
/// caller that fails them gets an error and the collections stay untouched.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Portfolio {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    employees: Vec<Employee>,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PortfolioError {
    #[error("Employee {0} is not allowed to create projects")]
    CreateForbidden(EmployeeId),
    #[error("Employee {employee} has no access to project {project}")]
    ViewForbidden {
        employee: EmployeeId,
        project: ProjectId,
    },
    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),
}

impl Portfolio {
    pub fn new(projects: Vec<Project>, tasks: Vec<Task>, employees: Vec<Employee>) -> Self {
        Portfolio {
            projects,
            tasks,
            employees,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Places a new project and its step tasks at the front of the collections.
    ///
    /// Returns an error if `actor` may not create projects.
    pub fn add_project(
        &mut self,
        actor: &Employee,
        new_project: NewProject,
    ) -> Result<&Project, PortfolioError> {
        if !can_create_projects(actor) {
            return Err(PortfolioError::CreateForbidden(actor.id.clone()));
        }

        self.tasks = overview::prepend_all(new_project.step_tasks(), &self.tasks);
        self.projects = overview::prepend(new_project.project, &self.projects);
        Ok(&self.projects[0])
    }

    /// Loads the details of one project for `actor`.
    pub fn view_project(
        &self,
        actor: &Employee,
        project_id: &str,
    ) -> Result<ProjectOverview, PortfolioError> {
        let project = self
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| PortfolioError::ProjectNotFound(project_id.to_string()))?;

        if is_locked(actor, project) {
            return Err(PortfolioError::ViewForbidden {
                employee: actor.id.clone(),
                project: project.id.clone(),
            });
        }

        let tasks = overview::project_tasks(&self.tasks, &project.id);
        let employees = overview::project_employees(&self.employees, &tasks, project);
        Ok(ProjectOverview {
            project: project.clone(),
            tasks,
            employees,
            locked: false,
        })
    }

    /// Card data for every project as `user` would see it.
    pub fn overviews_for(&self, user: &Employee) -> Vec<ProjectOverview> {
        overview::overviews(&self.projects, &self.tasks, &self.employees, user)
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::model::{ProjectStatus, Role};

    fn portfolio() -> Portfolio {
        let employee = Employee {
            id: "e1".to_string(),
            name: "Layla".to_string(),
            avatar: String::new(),
            role: Role::Admin,
            department_id: "arch".to_string(),
        };
        let project = Project {
            id: "p1".to_string(),
            name: "Tower".to_string(),
            client: "Client".to_string(),
            budget: 1_000_000.0,
            deadline: "2027-01-01".to_string(),
            manager_id: "e1".to_string(),
            department_id: "arch".to_string(),
            status: ProjectStatus::OnHold,
            progress: 0.0,
            drive_folder_url: None,
        };
        Portfolio::new(vec![project], Vec::new(), vec![employee])
    }

    #[test]
    fn can_restore_portfolio_from_json() {
        let original = portfolio();

        let json = serde_json::to_string(&original).unwrap();
        let restored: Portfolio = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn statuses_serialize_by_variant_name() {
        let json = serde_json::to_value(portfolio()).unwrap();
        assert_eq!(json["projects"][0]["status"], "OnHold");
    }
}
