use dioxus::prelude::*;
use portfolio_core::model::DEPARTMENTS;
use portfolio_core::{Employee, NewProject, ProjectDraft};

/// Modal for launching a new project.
///
/// The form is mounted only while the modal is open, so every opening starts
/// from freshly seeded defaults.
#[component]
pub fn NewProjectModal(
    is_open: bool,
    on_close: EventHandler<()>,
    on_add: EventHandler<NewProject>,
    employees: ReadOnlySignal<Vec<Employee>>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center p-4 bg-slate-900/60 backdrop-blur-md",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-white w-full max-w-2xl rounded-3xl shadow-2xl overflow-hidden p-10 flex flex-col max-h-[90vh]",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "flex items-center justify-between mb-8",
                    h3 { class: "text-2xl font-black text-slate-800", "Launch a new engineering project" }
                    button {
                        r#type: "button",
                        class: "p-2 hover:bg-slate-100 rounded-full transition-all text-slate-400",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                ProjectForm { employees, on_add, on_close }
            }
        }
    }
}

#[component]
fn ProjectForm(
    employees: ReadOnlySignal<Vec<Employee>>,
    on_add: EventHandler<NewProject>,
    on_close: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| ProjectDraft::seeded(&employees.peek(), today()));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let created = draft.read().submit();
        tracing::debug!(project_id = %created.project.id, "Submitting new project form");
        on_add.call(created);
        on_close.call(());
    };

    let current = draft.read().clone();
    let budget = budget_input_value(current.budget);

    rsx! {
        form { class: "space-y-6 overflow-y-auto px-1", onsubmit: handle_submit,
            div { class: "grid grid-cols-2 gap-4",
                Field { caption: "Project name",
                    input {
                        r#type: "text",
                        required: true,
                        class: INPUT_CLASS,
                        value: "{current.name}",
                        oninput: move |evt| draft.write().name = evt.value(),
                    }
                }
                Field { caption: "Cloud folder link",
                    input {
                        r#type: "url",
                        placeholder: "https://drive.google.com/...",
                        class: INPUT_CLASS,
                        value: "{current.drive_folder_url}",
                        oninput: move |evt| draft.write().drive_folder_url = evt.value(),
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-4",
                Field { caption: "Client",
                    input {
                        r#type: "text",
                        required: true,
                        class: INPUT_CLASS,
                        value: "{current.client}",
                        oninput: move |evt| draft.write().client = evt.value(),
                    }
                }
                Field { caption: "Project manager",
                    select {
                        class: INPUT_CLASS,
                        value: "{current.manager_id}",
                        onchange: move |evt| draft.write().manager_id = evt.value(),
                        {employees.read().iter().map(|emp| rsx! {
                            option {
                                key: "{emp.id}",
                                value: "{emp.id}",
                                selected: emp.id == current.manager_id,
                                "{emp.name}"
                            }
                        })}
                    }
                }
            }

            div { class: "grid grid-cols-3 gap-4",
                Field { caption: "Estimated budget",
                    input {
                        r#type: "number",
                        required: true,
                        class: INPUT_CLASS,
                        value: "{budget}",
                        oninput: move |evt| draft.write().set_budget_input(&evt.value()),
                    }
                }
                Field { caption: "Deadline",
                    input {
                        r#type: "date",
                        required: true,
                        class: INPUT_CLASS,
                        value: "{current.deadline}",
                        oninput: move |evt| draft.write().deadline = evt.value(),
                    }
                }
                Field { caption: "Department",
                    select {
                        class: INPUT_CLASS,
                        value: "{current.department_id}",
                        onchange: move |evt| draft.write().department_id = evt.value(),
                        {DEPARTMENTS.iter().map(|dept| rsx! {
                            option {
                                key: "{dept.id}",
                                value: "{dept.id}",
                                selected: dept.id == current.department_id,
                                "{dept.name}"
                            }
                        })}
                    }
                }
            }

            div { class: "space-y-3",
                div { class: "flex items-center justify-between",
                    label { class: LABEL_CLASS, "Milestones" }
                    button {
                        r#type: "button",
                        class: "text-xs font-bold text-blue-600 hover:text-blue-800",
                        onclick: move |_| draft.write().add_step(),
                        "+ Add milestone"
                    }
                }
                {current.steps.iter().enumerate().map(|(index, step)| rsx! {
                    div { key: "{index}", class: "flex gap-3 items-center",
                        input {
                            r#type: "text",
                            placeholder: "Milestone title",
                            class: "flex-1 {INPUT_CLASS}",
                            value: "{step.title}",
                            oninput: move |evt| draft.write().set_step_title(index, evt.value()),
                        }
                        input {
                            r#type: "number",
                            min: "0",
                            class: "w-24 {INPUT_CLASS}",
                            value: "{step.weight}",
                            oninput: move |evt| draft.write().set_step_weight(index, &evt.value()),
                        }
                        button {
                            r#type: "button",
                            class: "p-2 text-slate-400 hover:text-red-600",
                            title: "Remove milestone",
                            onclick: move |_| draft.write().remove_step(index),
                            "🗑"
                        }
                    }
                })}
            }

            button {
                r#type: "submit",
                class: "w-full bg-blue-600 text-white py-5 rounded-3xl font-black shadow-xl hover:bg-blue-700 transition-all mt-4",
                "✔ Launch project"
            }
        }
    }
}

#[component]
fn Field(caption: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "space-y-2",
            label { class: LABEL_CLASS, "{caption}" }
            {children}
        }
    }
}

const LABEL_CLASS: &str = "text-xs font-bold text-slate-400 uppercase tracking-widest";
const INPUT_CLASS: &str =
    "w-full px-5 py-4 bg-slate-50 border border-slate-100 rounded-2xl text-sm font-bold outline-none focus:ring-2 focus:ring-blue-500";

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Text for the budget input. An unparsed budget shows as an empty field.
fn budget_input_value(budget: f64) -> String {
    if budget.is_nan() {
        String::new()
    } else {
        budget.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_input_shows_whole_numbers_plainly() {
        assert_eq!(budget_input_value(1_000_000.0), "1000000");
    }

    #[test]
    fn nan_budget_input_is_empty() {
        assert_eq!(budget_input_value(f64::NAN), "");
    }
}
