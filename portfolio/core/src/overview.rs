//! Per-project views derived from the dashboard's collections.

use crate::access::is_locked;
use crate::model::{Employee, Project, Task};

/// Everything a project card needs, derived for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectOverview {
    pub project: Project,
    pub tasks: Vec<Task>,
    pub employees: Vec<Employee>,
    pub locked: bool,
}

/// Tasks belonging to `project_id`, in collection order.
pub fn project_tasks(tasks: &[Task], project_id: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.project_id == project_id)
        .cloned()
        .collect()
}

/// Employees assigned to any of `project_tasks`, plus the project's manager.
///
/// Keeps the order of `employees`; each employee appears once.
pub fn project_employees(
    employees: &[Employee],
    project_tasks: &[Task],
    project: &Project,
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| {
            e.id == project.manager_id || project_tasks.iter().any(|t| t.assigned_to == e.id)
        })
        .cloned()
        .collect()
}

/// Builds the overview of every project in display order.
pub fn overviews(
    projects: &[Project],
    tasks: &[Task],
    employees: &[Employee],
    user: &Employee,
) -> Vec<ProjectOverview> {
    projects
        .iter()
        .map(|project| {
            let tasks = project_tasks(tasks, &project.id);
            let employees = project_employees(employees, &tasks, project);
            ProjectOverview {
                locked: is_locked(user, project),
                project: project.clone(),
                tasks,
                employees,
            }
        })
        .collect()
}

/// Returns a new collection with `item` in front of `items`.
pub fn prepend<T: Clone>(item: T, items: &[T]) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item);
    next.extend_from_slice(items);
    next
}

/// Returns a new collection with `front` followed by `items`.
pub fn prepend_all<T: Clone>(front: Vec<T>, items: &[T]) -> Vec<T> {
    let mut next = front;
    next.extend_from_slice(items);
    next
}
