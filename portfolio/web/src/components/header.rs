use dioxus::prelude::*;
use portfolio_core::{Employee, Role};

/// Top bar with the signed-in employee and a switcher for demo accounts.
#[component]
pub fn Header(
    current_user: ReadOnlySignal<Employee>,
    employees: ReadOnlySignal<Vec<Employee>>,
    on_switch_user: EventHandler<String>,
) -> Element {
    let user = current_user.read().clone();
    let role = role_label(user.role);

    rsx! {
        header { class: "bg-white border-b border-slate-100",
            div { class: "max-w-7xl mx-auto px-6 py-4 flex items-center justify-between",
                h1 { class: "text-xl font-black text-slate-800", "Engineering Portfolio" }
                div { class: "flex items-center gap-3",
                    img { src: "{user.avatar}", alt: "", class: "w-8 h-8 rounded-full object-cover" }
                    span { class: "text-xs font-bold text-slate-400 uppercase", "{role}" }
                    select {
                        class: "px-3 py-2 bg-slate-50 border border-slate-100 rounded-xl text-sm font-bold",
                        value: "{user.id}",
                        onchange: move |evt| on_switch_user.call(evt.value()),
                        {employees.read().iter().map(|emp| rsx! {
                            option {
                                key: "{emp.id}",
                                value: "{emp.id}",
                                selected: emp.id == user.id,
                                "{emp.name}"
                            }
                        })}
                    }
                }
            }
        }
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin",
        Role::Manager => "Manager",
        Role::Employee => "Employee",
    }
}
