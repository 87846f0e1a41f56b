use super::*;

/// Title row of the projects page with the admin-only launch button
#[component]
pub fn ProjectsHeader(can_create: bool, on_create_project: EventHandler<()>) -> Element {
    rsx! {
        div { class: "flex flex-col md:flex-row md:items-end justify-between gap-6",
            div {
                h2 { class: "text-3xl font-black text-slate-800", "Engineering project portfolio" }
                p { class: "text-slate-500 font-medium",
                    "Central management linking structural designs with their cloud folders"
                }
            }
            if can_create {
                button {
                    class: "bg-blue-600 text-white px-8 py-3.5 rounded-2xl font-black text-sm shadow-xl hover:bg-blue-700 transition-all active:scale-95",
                    onclick: move |_| on_create_project.call(()),
                    "Launch new project +"
                }
            }
        }
    }
}

/// Component displayed when the portfolio has no projects
#[component]
pub fn EmptyProjectsState() -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-6xl mb-4", "📁" }
            h2 { class: "text-2xl font-semibold text-slate-900 mb-2", "No projects yet" }
            p { class: "text-slate-600", "Projects launched by an administrator will show up here." }
        }
    }
}

/// Grid of project cards
#[component]
pub fn ProjectsGrid(
    overviews: Vec<ProjectOverview>,
    on_view_details: EventHandler<Project>,
    on_access_deny: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
            {overviews.into_iter().map(|overview| {
                let id = overview.project.id.clone();
                rsx! {
                    ProjectCard {
                        key: "{id}",
                        project: overview.project,
                        project_tasks: overview.tasks,
                        project_employees: overview.employees,
                        is_locked: overview.locked,
                        on_view_details,
                        on_access_deny,
                    }
                }
            })}
        }
    }
}
