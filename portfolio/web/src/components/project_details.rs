use crate::components::project_card::{budget_label, status_badge};
use dioxus::prelude::*;
use portfolio_core::model::find_department;
use portfolio_core::{progress_percent, ProjectOverview, TaskStatus};

/// Detail panel for the project picked from the grid.
#[component]
pub fn ProjectDetails(overview: ProjectOverview, on_back: EventHandler<()>) -> Element {
    let ProjectOverview {
        project,
        tasks,
        employees,
        ..
    } = overview;
    let percent = progress_percent(&tasks);
    let (status_color, status_text) = status_badge(project.status);
    let department = find_department(&project.department_id)
        .map(|d| d.name)
        .unwrap_or("Unassigned");
    let manager = employees
        .iter()
        .find(|e| e.id == project.manager_id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| "Unassigned".to_string());
    let budget = budget_label(project.budget);

    rsx! {
        div { class: "bg-white p-8 rounded-3xl border border-slate-100 shadow-sm space-y-8",
            button {
                class: "text-sm font-bold text-slate-500 hover:text-blue-600",
                onclick: move |_| on_back.call(()),
                "← Back to projects"
            }

            div { class: "flex justify-between items-start",
                div {
                    h2 { class: "text-3xl font-black text-slate-800", "{project.name}" }
                    p { class: "text-slate-500", "{project.client} · {department}" }
                }
                span { class: "text-xs font-bold px-3 py-1.5 rounded-xl uppercase {status_color}", "{status_text}" }
            }

            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                Stat { caption: "Progress", value: format!("{percent}%") }
                Stat { caption: "Deadline", value: project.deadline.clone() }
                Stat { caption: "Budget", value: budget }
                Stat { caption: "Manager", value: manager }
            }

            if let Some(url) = project.drive_folder() {
                a {
                    class: "inline-block text-sm font-bold text-indigo-600 hover:underline",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "☁️ Open project folder"
                }
            }

            div { class: "space-y-3",
                h3 { class: "text-lg font-semibold text-slate-800", "Tasks ({tasks.len()})" }
                if tasks.is_empty() {
                    p { class: "text-slate-500", "No tasks yet" }
                } else {
                    ul { class: "divide-y divide-slate-100",
                        {tasks.iter().map(|task| {
                            let assignee = employees
                                .iter()
                                .find(|e| e.id == task.assigned_to)
                                .map(|e| e.name.as_str())
                                .unwrap_or("Unassigned");
                            let (color, label) = task_badge(task.status);
                            let weight = task.weight_or_zero();
                            rsx! {
                                li { key: "{task.id}", class: "py-3 flex justify-between items-center",
                                    div {
                                        p { class: "font-medium text-slate-800", "{task.title}" }
                                        p { class: "text-xs text-slate-500", "{assignee} · weight {weight}" }
                                    }
                                    span { class: "px-2 py-1 rounded-full text-xs font-medium {color}", "{label}" }
                                }
                            }
                        })}
                    }
                }
            }

            div { class: "space-y-3",
                h3 { class: "text-lg font-semibold text-slate-800", "Team" }
                div { class: "flex flex-wrap gap-3",
                    {employees.iter().map(|emp| rsx! {
                        div { key: "{emp.id}", class: "flex items-center gap-2 px-3 py-2 bg-slate-50 rounded-xl",
                            img { src: "{emp.avatar}", alt: "", class: "w-6 h-6 rounded-full object-cover" }
                            span { class: "text-sm text-slate-700", "{emp.name}" }
                        }
                    })}
                }
            }
        }
    }
}

#[component]
fn Stat(caption: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex flex-col gap-1 p-3 bg-slate-50 rounded-2xl",
            span { class: "text-xs font-bold text-slate-400 uppercase", "{caption}" }
            span { class: "text-sm font-black tabular-nums text-slate-700", "{value}" }
        }
    }
}

fn task_badge(status: TaskStatus) -> (&'static str, &'static str) {
    match status {
        TaskStatus::Pending => ("bg-yellow-100 text-yellow-800", "Pending"),
        TaskStatus::InProgress => ("bg-blue-100 text-blue-800", "In progress"),
        TaskStatus::Completed => ("bg-green-100 text-green-800", "Completed"),
    }
}
