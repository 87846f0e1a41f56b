use dioxus::prelude::*;
use portfolio_core::model::find_department;
use portfolio_core::{progress_percent, Employee, Project, ProjectStatus, Task};

/// Avatars shown at the bottom of a card.
const MAX_AVATARS: usize = 3;

/// Summary card for one project. Clicks open the project unless it is locked.
#[component]
pub fn ProjectCard(
    project: Project,
    project_tasks: ReadOnlySignal<Vec<Task>>,
    project_employees: Vec<Employee>,
    is_locked: bool,
    on_view_details: EventHandler<Project>,
    on_access_deny: EventHandler<()>,
) -> Element {
    let progress = use_memo(move || progress_percent(project_tasks.read().iter()));
    let percent = progress();

    let (status_color, status_text) = status_badge(project.status);
    let department = find_department(&project.department_id)
        .map(|d| d.name)
        .unwrap_or("Unassigned");
    let budget = budget_label(project.budget);
    let card_state = if is_locked {
        "grayscale opacity-60"
    } else {
        "hover:shadow-2xl hover:border-blue-200"
    };

    let clicked = project.clone();
    let handle_click = move |_| match click_intent(is_locked) {
        CardIntent::ViewDetails => on_view_details.call(clicked.clone()),
        CardIntent::AccessDenied => on_access_deny.call(()),
    };

    rsx! {
        div {
            class: "bg-white p-6 rounded-3xl border border-slate-100 shadow-sm transition-all group flex flex-col h-full relative overflow-hidden cursor-pointer {card_state}",
            onclick: handle_click,

            div { class: "flex items-start justify-between mb-6",
                div { class: "p-3 bg-blue-50 text-blue-600 rounded-2xl text-2xl", "💼" }
                div { class: "flex gap-2 items-center",
                    if is_locked {
                        span { class: "p-1.5 bg-slate-100 text-slate-500 rounded-lg", title: "Restricted", "🔒" }
                    }
                    if project.drive_folder().is_some() {
                        span { class: "p-1.5 bg-indigo-50 text-indigo-600 rounded-lg", title: "Linked cloud folder", "☁️" }
                    }
                    span { class: "text-xs font-bold px-3 py-1.5 rounded-xl uppercase tracking-widest {status_color}",
                        "{status_text}"
                    }
                }
            }

            h3 { class: "text-xl font-black mb-1 text-slate-800 group-hover:text-blue-600 transition-colors",
                "{project.name}"
            }
            p { class: "text-xs text-slate-400 font-bold mb-1", "🏢 {project.client}" }
            p { class: "text-xs text-slate-400 mb-4", "{department}" }

            div { class: "space-y-2 mb-8",
                div { class: "flex items-center justify-between text-xs font-black uppercase",
                    span { class: "text-slate-400", "Technical progress" }
                    span { class: "text-blue-600", "{percent}%" }
                }
                div { class: "w-full h-3 bg-slate-100 rounded-full overflow-hidden",
                    div {
                        class: "h-full bg-gradient-to-r from-blue-600 to-indigo-600 transition-all duration-1000",
                        style: "width: {percent}%",
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-4 mb-8",
                div { class: "flex flex-col gap-1 p-3 bg-slate-50 rounded-2xl",
                    span { class: "text-xs font-bold text-slate-400 uppercase", "Deadline" }
                    span { class: "text-xs font-black tabular-nums text-slate-700", "📅 {project.deadline}" }
                }
                div { class: "flex flex-col gap-1 p-3 bg-slate-50 rounded-2xl",
                    span { class: "text-xs font-bold text-slate-400 uppercase", "Budget" }
                    span { class: "text-xs font-black tabular-nums text-slate-700", "💲 {budget}" }
                }
            }

            div { class: "mt-auto flex items-center justify-between pt-6 border-t border-slate-50",
                div { class: "flex -space-x-2",
                    {project_employees.iter().take(MAX_AVATARS).map(|emp| rsx! {
                        img {
                            key: "{emp.id}",
                            src: "{emp.avatar}",
                            title: "{emp.name}",
                            alt: "",
                            class: "w-8 h-8 rounded-full border-2 border-white object-cover shadow-sm",
                        }
                    })}
                }
                div { class: "flex items-center gap-2 px-5 py-2.5 bg-slate-900 text-white rounded-xl text-xs font-black group-hover:bg-blue-600 transition-all",
                    "Manage project →"
                }
            }
        }
    }
}

/// What a click on a card asks the container to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardIntent {
    ViewDetails,
    AccessDenied,
}

pub(crate) fn click_intent(is_locked: bool) -> CardIntent {
    if is_locked {
        CardIntent::AccessDenied
    } else {
        CardIntent::ViewDetails
    }
}

/// Badge colour classes and label for a project status.
pub(crate) fn status_badge(status: ProjectStatus) -> (&'static str, &'static str) {
    match status {
        ProjectStatus::Active => ("bg-emerald-50 text-emerald-600", "Active"),
        ProjectStatus::OnHold => ("bg-amber-50 text-amber-600", "On hold"),
    }
}

/// Budget in whole thousands, e.g. `1500K`.
pub(crate) fn budget_label(budget: f64) -> String {
    format!("{:.0}K", budget / 1000.0)
}
