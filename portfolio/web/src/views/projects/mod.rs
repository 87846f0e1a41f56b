use crate::components::{NewProjectModal, ProjectCard, ProjectDetails};
use dioxus::prelude::*;
use portfolio_core::model::ProjectId;
use portfolio_core::{can_create_projects, Employee, NewProject, Portfolio, Project, ProjectOverview};

mod components;

/// Project grid for the signed-in employee, with the launch modal and the
/// detail panel of the selected project.
///
/// The portfolio belongs to the caller; this view changes it only through
/// `Portfolio::add_project`, so its checks apply to every launch.
#[component]
pub fn ProjectsList(
    portfolio: Signal<Portfolio>,
    current_user: ReadOnlySignal<Employee>,
    on_access_deny: EventHandler<()>,
) -> Element {
    let mut portfolio = portfolio;
    let mut selected_project = use_signal(|| None::<ProjectId>);
    let mut modal_open = use_signal(|| false);

    let handle_add = move |created: NewProject| {
        let actor = current_user.read().clone();
        launch_project(&mut portfolio.write(), &actor, created);
    };

    let handle_view_details = move |project: Project| {
        let actor = current_user.read().clone();
        let access = portfolio.read().view_project(&actor, &project.id).map(|_| ());
        match access {
            Ok(()) => {
                tracing::info!(project_id = %project.id, "Opened project details");
                selected_project.set(Some(project.id));
            }
            Err(e) => {
                tracing::warn!(employee_id = %actor.id, "Cannot open project: {e}");
                on_access_deny.call(());
            }
        }
    };

    let user = current_user.read().clone();
    let can_create = can_create_projects(&user);
    let cards = portfolio.read().overviews_for(&user);
    let selected = details_for(&portfolio.read(), &user, selected_project.read().as_deref());
    let employees = portfolio.read().employees().to_vec();

    rsx! {
        div { class: "space-y-10",
            if let Some(overview) = selected {
                ProjectDetails { overview, on_back: move |_| selected_project.set(None) }
            } else {
                components::ProjectsHeader {
                    can_create,
                    on_create_project: move |_| {
                        tracing::debug!("Opening new project modal");
                        modal_open.set(true);
                    },
                }

                if cards.is_empty() {
                    components::EmptyProjectsState {}
                } else {
                    components::ProjectsGrid {
                        overviews: cards,
                        on_view_details: handle_view_details,
                        on_access_deny,
                    }
                }
            }

            NewProjectModal {
                is_open: modal_open(),
                on_close: move |_| modal_open.set(false),
                on_add: handle_add,
                employees,
            }
        }
    }
}

/// Adds `created` on behalf of `actor`. Returns the new project's id, or
/// `None` when the portfolio refused it.
fn launch_project(
    portfolio: &mut Portfolio,
    actor: &Employee,
    created: NewProject,
) -> Option<ProjectId> {
    let steps = created.steps.len();
    match portfolio.add_project(actor, created) {
        Ok(project) => {
            tracing::info!(
                project_id = %project.id,
                name = %project.name,
                steps,
                "Launched new project"
            );
            Some(project.id.clone())
        }
        Err(e) => {
            tracing::warn!(employee_id = %actor.id, "Project launch rejected: {e}");
            None
        }
    }
}

/// The selected project's details, if `user` may still see them.
fn details_for(
    portfolio: &Portfolio,
    user: &Employee,
    selected: Option<&str>,
) -> Option<ProjectOverview> {
    portfolio.view_project(user, selected?).ok()
}
