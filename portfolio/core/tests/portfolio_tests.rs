use chrono::NaiveDate;
use portfolio_core::{
    Employee, Portfolio, PortfolioError, Project, ProjectDraft, ProjectStatus, Role, Task,
    TaskStatus, progress_percent,
};

fn employee(id: &str, role: Role, department: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {id}"),
        avatar: format!("https://avatars.example/{id}.png"),
        role,
        department_id: department.to_string(),
    }
}

fn project(id: &str, manager: &str, department: &str) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {id}"),
        client: "Northwind".to_string(),
        budget: 1_200_000.0,
        deadline: "2027-06-30".to_string(),
        manager_id: manager.to_string(),
        department_id: department.to_string(),
        status: ProjectStatus::Active,
        progress: 0.0,
        drive_folder_url: None,
    }
}

fn task(id: &str, project: &str, assignee: &str, weight: f64, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        project_id: project.to_string(),
        title: id.to_string(),
        assigned_to: assignee.to_string(),
        status,
        weight: Some(weight),
    }
}

fn setup() -> Portfolio {
    Portfolio::new(
        vec![project("p1", "e2", "arch"), project("p2", "e3", "mep")],
        vec![
            task("t1", "p1", "e1", 10.0, TaskStatus::Completed),
            task("t2", "p1", "e1", 30.0, TaskStatus::Pending),
            task("t3", "p2", "e3", 5.0, TaskStatus::Completed),
        ],
        vec![
            employee("admin", Role::Admin, "arch"),
            employee("e1", Role::Employee, "arch"),
            employee("e2", Role::Manager, "arch"),
            employee("e3", Role::Employee, "mep"),
        ],
    )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn admin_can_add_project_to_front() {
    let mut portfolio = setup();
    let admin = portfolio.employee("admin").unwrap().clone();
    let mut draft = ProjectDraft::seeded(portfolio.employees(), today());
    draft.name = "Library".to_string();
    draft.client = "University".to_string();

    let created_id = portfolio
        .add_project(&admin, draft.submit())
        .unwrap()
        .id
        .clone();

    assert_eq!(portfolio.projects().len(), 3);
    assert_eq!(portfolio.projects()[0].id, created_id);
    assert_eq!(portfolio.projects()[0].status, ProjectStatus::Active);
    assert_eq!(portfolio.projects()[0].progress, 0.0);
    assert_eq!(portfolio.projects()[1].id, "p1");
    assert_eq!(portfolio.tasks()[0].project_id, created_id);
    assert_eq!(portfolio.tasks().len(), 4);
}

#[test]
fn cannot_add_project_as_non_admin() {
    let mut portfolio = setup();
    let user = portfolio.employee("e2").unwrap().clone();
    let draft = ProjectDraft::seeded(portfolio.employees(), today());

    let result = portfolio.add_project(&user, draft.submit());

    assert_eq!(
        result.map(|p| p.id.clone()),
        Err(PortfolioError::CreateForbidden("e2".to_string()))
    );
    assert_eq!(portfolio.projects().len(), 2);
    assert_eq!(portfolio.tasks().len(), 3);
}

#[test]
fn can_view_project_in_own_department() {
    let portfolio = setup();
    let user = portfolio.employee("e1").unwrap().clone();

    let overview = portfolio.view_project(&user, "p1").unwrap();

    assert_eq!(overview.tasks.len(), 2);
    assert_eq!(progress_percent(&overview.tasks), 25);
    let team: Vec<_> = overview.employees.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(team, vec!["e1", "e2"]);
}

#[test]
fn cannot_view_project_of_other_department() {
    let portfolio = setup();
    let user = portfolio.employee("e1").unwrap().clone();

    let result = portfolio.view_project(&user, "p2");

    assert_eq!(
        result,
        Err(PortfolioError::ViewForbidden {
            employee: "e1".to_string(),
            project: "p2".to_string(),
        })
    );
}

#[test]
fn admin_can_view_every_project() {
    let portfolio = setup();
    let admin = portfolio.employee("admin").unwrap().clone();

    assert!(portfolio.view_project(&admin, "p1").is_ok());
    assert!(portfolio.view_project(&admin, "p2").is_ok());
    assert!(portfolio.overviews_for(&admin).iter().all(|o| !o.locked));
}

#[test]
fn cannot_view_missing_project() {
    let portfolio = setup();
    let admin = portfolio.employee("admin").unwrap().clone();

    let result = portfolio.view_project(&admin, "nope");

    assert_eq!(
        result,
        Err(PortfolioError::ProjectNotFound("nope".to_string()))
    );
}

#[test]
fn overviews_follow_project_order_and_lock_rules() {
    let portfolio = setup();
    let user = portfolio.employee("e3").unwrap().clone();

    let overviews = portfolio.overviews_for(&user);

    let summary: Vec<_> = overviews
        .iter()
        .map(|o| (o.project.id.as_str(), o.locked))
        .collect();
    assert_eq!(summary, vec![("p1", true), ("p2", false)]);
}
