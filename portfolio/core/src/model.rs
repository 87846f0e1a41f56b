#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type ProjectId = String;
pub type EmployeeId = String;
pub type DepartmentId = String;

/// A tracked engineering engagement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub client: String,
    /// Currency units. May be NaN when the creation form could not parse the input.
    pub budget: f64,
    /// ISO date, `YYYY-MM-DD`.
    pub deadline: String,
    pub manager_id: EmployeeId,
    pub department_id: DepartmentId,
    pub status: ProjectStatus,
    /// Stored value only. Cards recompute progress from tasks.
    pub progress: f64,
    pub drive_folder_url: Option<String>,
}

impl Project {
    pub fn is_active(&self) -> bool {
        matches!(self.status, ProjectStatus::Active)
    }

    /// Returns the linked cloud folder, ignoring blank values.
    pub fn drive_folder(&self) -> Option<&str> {
        self.drive_folder_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProjectStatus {
    #[default]
    Active,
    OnHold,
}

/// A unit of work belonging to a project.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    pub id: String,
    pub project_id: ProjectId,
    pub title: String,
    pub assigned_to: EmployeeId,
    pub status: TaskStatus,
    /// Relative share of the project's completion. Absent counts as 0.
    pub weight: Option<f64>,
}

impl Task {
    pub fn weight_or_zero(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, TaskStatus::Completed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub avatar: String,
    pub role: Role,
    pub department_id: DepartmentId,
}

impl Employee {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Employee,
}

/// A milestone captured alongside a new project.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    pub title: String,
    pub weight: f64,
}

impl Step {
    pub fn new(title: impl Into<String>, weight: f64) -> Self {
        Step {
            title: title.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    pub id: &'static str,
    pub name: &'static str,
}

pub const DEPARTMENTS: &[Department] = &[
    Department {
        id: "arch",
        name: "Architecture",
    },
    Department {
        id: "struct",
        name: "Structural",
    },
    Department {
        id: "mep",
        name: "MEP",
    },
    Department {
        id: "civil",
        name: "Civil",
    },
    Department {
        id: "interior",
        name: "Interior Design",
    },
];

/// Department assigned when no employee is available to seed one.
pub const DEFAULT_DEPARTMENT_ID: &str = "arch";

pub fn find_department(id: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_find_known_department() {
        assert_eq!(find_department("mep").map(|d| d.name), Some("MEP"));
    }

    #[test]
    fn cannot_find_unknown_department() {
        assert_eq!(find_department("marketing"), None);
    }

    #[test]
    fn blank_drive_folder_is_ignored() {
        let mut project = Project {
            id: "p1".to_string(),
            name: "Tower".to_string(),
            client: "Acme".to_string(),
            budget: 1_000.0,
            deadline: "2026-01-01".to_string(),
            manager_id: "e1".to_string(),
            department_id: "arch".to_string(),
            status: ProjectStatus::Active,
            progress: 0.0,
            drive_folder_url: Some("   ".to_string()),
        };
        assert_eq!(project.drive_folder(), None);

        project.drive_folder_url = Some("https://drive.example/folder".to_string());
        assert_eq!(project.drive_folder(), Some("https://drive.example/folder"));
    }

    #[test]
    fn missing_weight_counts_as_zero() {
        let task = Task {
            id: "t1".to_string(),
            project_id: "p1".to_string(),
            title: "Survey".to_string(),
            assigned_to: "e1".to_string(),
            status: TaskStatus::Pending,
            weight: None,
        };
        assert_eq!(task.weight_or_zero(), 0.0);
    }
}
