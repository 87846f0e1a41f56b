//! The editable state behind the "new project" form.

use crate::model::{
    DEFAULT_DEPARTMENT_ID, Employee, Project, ProjectStatus, Step, Task, TaskStatus,
};
use chrono::NaiveDate;
use uuid::Uuid;

pub const DEFAULT_BUDGET: f64 = 1_000_000.0;
pub const DEFAULT_STEP_TITLE: &str = "Project kickoff and drawing preparation";
pub const DEFAULT_STEP_WEIGHT: f64 = 10.0;

/// Form values for a project that has not been created yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub client: String,
    pub budget: f64,
    pub deadline: String,
    pub manager_id: String,
    pub department_id: String,
    pub drive_folder_url: String,
    pub steps: Vec<Step>,
}

impl ProjectDraft {
    /// Default values shown whenever the form opens.
    ///
    /// The first employee becomes the manager and lends the draft their
    /// department. With no employees the manager is blank and the department
    /// falls back to [`DEFAULT_DEPARTMENT_ID`].
    pub fn seeded(employees: &[Employee], today: NaiveDate) -> Self {
        let first = employees.first();
        ProjectDraft {
            name: String::new(),
            client: String::new(),
            budget: DEFAULT_BUDGET,
            deadline: today.format("%Y-%m-%d").to_string(),
            manager_id: first.map(|e| e.id.clone()).unwrap_or_default(),
            department_id: first
                .map(|e| e.department_id.clone())
                .unwrap_or_else(|| DEFAULT_DEPARTMENT_ID.to_string()),
            drive_folder_url: String::new(),
            steps: vec![Step::new(DEFAULT_STEP_TITLE, DEFAULT_STEP_WEIGHT)],
        }
    }

    pub fn set_budget_input(&mut self, raw: &str) {
        self.budget = parse_budget(raw);
    }

    pub fn add_step(&mut self) {
        self.steps.push(Step::new("", 0.0));
    }

    /// Out-of-range indexes are ignored.
    pub fn remove_step(&mut self, index: usize) {
        if index < self.steps.len() {
            self.steps.remove(index);
        }
    }

    pub fn set_step_title(&mut self, index: usize, title: String) {
        if let Some(step) = self.steps.get_mut(index) {
            step.title = title;
        }
    }

    /// Unparseable weights become 0.
    pub fn set_step_weight(&mut self, index: usize, raw: &str) {
        if let Some(step) = self.steps.get_mut(index) {
            step.weight = raw.trim().parse().unwrap_or(0.0);
        }
    }

    /// Turns the draft into a new active project with zero progress.
    pub fn submit(&self) -> NewProject {
        let drive_folder_url = Some(self.drive_folder_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        NewProject {
            project: Project {
                id: new_project_id(),
                name: self.name.clone(),
                client: self.client.clone(),
                budget: self.budget,
                deadline: self.deadline.clone(),
                manager_id: self.manager_id.clone(),
                department_id: self.department_id.clone(),
                status: ProjectStatus::Active,
                progress: 0.0,
                drive_folder_url,
            },
            steps: self.steps.clone(),
        }
    }
}

/// A freshly submitted project together with its milestone steps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub project: Project,
    pub steps: Vec<Step>,
}

impl NewProject {
    /// Pending tasks for each step, assigned to the project's manager.
    pub fn step_tasks(&self) -> Vec<Task> {
        self.steps
            .iter()
            .map(|step| Task {
                id: format!("task-{}", Uuid::new_v4()),
                project_id: self.project.id.clone(),
                title: step.title.clone(),
                assigned_to: self.project.manager_id.clone(),
                status: TaskStatus::Pending,
                weight: Some(step.weight),
            })
            .collect()
    }
}

pub fn new_project_id() -> String {
    format!("proj-{}", Uuid::new_v4())
}

/// Reads the leading integer of `raw`, the way a browser's `parseInt` would.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is dropped. Input without leading digits yields NaN.
pub fn parse_budget(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    match rest[..digits_end].parse::<f64>() {
        Ok(value) if digits_end > 0 => sign * value,
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn employee(id: &str, department: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            avatar: String::new(),
            role: Role::Manager,
            department_id: department.to_string(),
        }
    }

    #[test]
    fn can_seed_from_first_employee() {
        let employees = vec![employee("e7", "mep"), employee("e8", "arch")];

        let draft = ProjectDraft::seeded(&employees, today());

        assert_eq!(draft.manager_id, "e7");
        assert_eq!(draft.department_id, "mep");
        assert_eq!(draft.deadline, "2026-10-16");
        assert_eq!(draft.budget, DEFAULT_BUDGET);
        assert_eq!(
            draft.steps,
            vec![Step::new(DEFAULT_STEP_TITLE, DEFAULT_STEP_WEIGHT)]
        );
    }

    #[test]
    fn can_seed_without_employees() {
        let draft = ProjectDraft::seeded(&[], today());

        assert_eq!(draft.manager_id, "");
        assert_eq!(draft.department_id, DEFAULT_DEPARTMENT_ID);
    }

    #[test]
    fn submit_creates_active_project_with_zero_progress() {
        let mut draft = ProjectDraft::seeded(&[employee("e1", "arch")], today());
        draft.name = "Museum Annex".to_string();
        draft.client = "Heritage Trust".to_string();
        draft.set_budget_input("750000");

        let created = draft.submit();

        assert!(created.project.id.starts_with("proj-"));
        assert_eq!(created.project.status, ProjectStatus::Active);
        assert_eq!(created.project.progress, 0.0);
        assert_eq!(created.project.budget, 750_000.0);
        assert_eq!(created.project.name, "Museum Annex");
        assert_eq!(created.project.drive_folder_url, None);
        assert_eq!(created.steps, draft.steps);
    }

    #[test]
    fn submitting_twice_yields_distinct_ids() {
        let draft = ProjectDraft::seeded(&[], today());

        assert_ne!(draft.submit().project.id, draft.submit().project.id);
    }

    #[test]
    fn submit_keeps_drive_folder_when_present() {
        let mut draft = ProjectDraft::seeded(&[], today());
        draft.drive_folder_url = " https://drive.example/x ".to_string();

        let created = draft.submit();

        assert_eq!(
            created.project.drive_folder_url.as_deref(),
            Some("https://drive.example/x")
        );
    }

    #[test]
    fn can_edit_steps() {
        let mut draft = ProjectDraft::seeded(&[], today());

        draft.add_step();
        draft.set_step_title(1, "Structural review".to_string());
        draft.set_step_weight(1, "25");
        draft.set_step_weight(0, "abc");
        draft.remove_step(7);

        assert_eq!(
            draft.steps,
            vec![
                Step::new(DEFAULT_STEP_TITLE, 0.0),
                Step::new("Structural review", 25.0),
            ]
        );

        draft.remove_step(0);
        assert_eq!(draft.steps, vec![Step::new("Structural review", 25.0)]);
    }

    #[test]
    fn step_tasks_are_pending_and_assigned_to_manager() {
        let draft = ProjectDraft::seeded(&[employee("e3", "civil")], today());
        let created = draft.submit();

        let tasks = created.step_tasks();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].project_id, created.project.id);
        assert_eq!(tasks[0].assigned_to, "e3");
        assert_eq!(tasks[0].status, TaskStatus::Pending);
        assert_eq!(tasks[0].weight, Some(DEFAULT_STEP_WEIGHT));
    }

    #[test]
    fn parse_budget_reads_leading_integer() {
        assert_eq!(parse_budget("1500000"), 1_500_000.0);
        assert_eq!(parse_budget("  42abc"), 42.0);
        assert_eq!(parse_budget("12.9"), 12.0);
        assert_eq!(parse_budget("-300"), -300.0);
        assert_eq!(parse_budget("+7"), 7.0);
    }

    #[test]
    fn parse_budget_without_digits_is_nan() {
        assert!(parse_budget("").is_nan());
        assert!(parse_budget("abc").is_nan());
        assert!(parse_budget("-").is_nan());
    }
}
