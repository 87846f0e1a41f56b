//! Application-level state owning the dashboard's collections.
//!
//! Views receive the portfolio signal as a prop and change it only through
//! `Portfolio` methods, which check the acting user; nothing here is persisted.

use dioxus::prelude::*;
use portfolio_core::{Employee, Portfolio, Project, ProjectStatus, Role, Task, TaskStatus};

/// The portfolio the dashboard reads, plus the signed-in user.
#[derive(Clone, Copy)]
pub struct DashboardStore {
    pub portfolio: Signal<Portfolio>,
    pub current_user: Signal<Employee>,
}

impl DashboardStore {
    /// Signs in as the employee with `id`. Unknown ids are ignored.
    pub fn switch_user(&mut self, id: &str) {
        let next = self.portfolio.read().employee(id).cloned();
        match next {
            Some(employee) => {
                tracing::info!(employee_id = %employee.id, role = ?employee.role, "Switched user");
                self.current_user.set(employee);
            }
            None => tracing::warn!(employee_id = %id, "Unknown employee, keeping current user"),
        }
    }
}

/// Creates the store seeded with the demo portfolio.
pub fn use_dashboard_store() -> DashboardStore {
    let employees = demo_employees();
    let first = employees.first().cloned().unwrap_or_else(guest);

    DashboardStore {
        portfolio: use_signal(move || Portfolio::new(demo_projects(), demo_tasks(), employees)),
        current_user: use_signal(move || first),
    }
}

fn guest() -> Employee {
    Employee {
        id: "guest".to_string(),
        name: "Guest".to_string(),
        avatar: String::new(),
        role: Role::Employee,
        department_id: String::new(),
    }
}

fn employee(id: &str, name: &str, role: Role, department: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        avatar: format!("https://i.pravatar.cc/150?u={id}"),
        role,
        department_id: department.to_string(),
    }
}

fn demo_employees() -> Vec<Employee> {
    vec![
        employee("e1", "Layla Haddad", Role::Admin, "arch"),
        employee("e2", "Omar Saleh", Role::Manager, "struct"),
        employee("e3", "Rana Khalil", Role::Employee, "arch"),
        employee("e4", "Yousef Nasser", Role::Employee, "mep"),
        employee("e5", "Mona Farouk", Role::Manager, "civil"),
    ]
}

fn project(
    id: &str,
    name: &str,
    client: &str,
    budget: f64,
    deadline: &str,
    manager: &str,
    department: &str,
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        budget,
        deadline: deadline.to_string(),
        manager_id: manager.to_string(),
        department_id: department.to_string(),
        status: ProjectStatus::Active,
        progress: 0.0,
        drive_folder_url: None,
    }
}

fn demo_projects() -> Vec<Project> {
    let mut tower = project(
        "proj-tower",
        "Riverside Residential Tower",
        "Al Noor Developments",
        4_800_000.0,
        "2027-05-30",
        "e3",
        "arch",
    );
    tower.drive_folder_url = Some("https://drive.google.com/drive/folders/riverside".to_string());

    let mut hospital = project(
        "proj-hospital",
        "Central Hospital HVAC Retrofit",
        "Ministry of Health",
        960_000.0,
        "2026-12-20",
        "e4",
        "mep",
    );
    hospital.status = ProjectStatus::OnHold;

    vec![
        tower,
        project(
            "proj-bridge",
            "Wadi Pedestrian Bridge",
            "Municipality",
            2_150_000.0,
            "2027-01-15",
            "e2",
            "struct",
        ),
        hospital,
    ]
}

fn task(
    id: &str,
    project: &str,
    title: &str,
    assignee: &str,
    status: TaskStatus,
    weight: Option<f64>,
) -> Task {
    Task {
        id: id.to_string(),
        project_id: project.to_string(),
        title: title.to_string(),
        assigned_to: assignee.to_string(),
        status,
        weight,
    }
}

fn demo_tasks() -> Vec<Task> {
    vec![
        task("t1", "proj-tower", "Concept massing", "e3", TaskStatus::Completed, Some(10.0)),
        task("t2", "proj-tower", "Facade detailing", "e1", TaskStatus::InProgress, Some(30.0)),
        task("t3", "proj-tower", "Permit drawings", "e3", TaskStatus::Pending, Some(20.0)),
        task("t4", "proj-bridge", "Load analysis", "e2", TaskStatus::Completed, Some(40.0)),
        task("t5", "proj-bridge", "Foundation design", "e5", TaskStatus::Pending, Some(40.0)),
        task("t6", "proj-hospital", "Duct survey", "e4", TaskStatus::Pending, None),
    ]
}
