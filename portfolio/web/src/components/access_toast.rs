use dioxus::prelude::*;

/// The toast currently on screen, tagged with the showing that produced it.
///
/// Every `show` bumps the generation, so a timer started for an older toast
/// cannot hide a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    message: Option<String>,
    generation: u64,
}

impl ToastState {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Shows `message` and returns the generation its timer must pass to `expire`.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.generation
    }

    /// Hides the toast only if it is still the one shown at `generation`.
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.message = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

/// Toast shown after a click on a restricted project
#[component]
pub fn AccessToast(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "fixed bottom-6 right-6 z-50 flex items-center gap-4 bg-red-50 border border-red-200 rounded-2xl shadow-lg px-6 py-4",
            span { class: "text-xl", "🔒" }
            p { class: "text-red-600 font-medium", "{message}" }
            button {
                class: "text-red-400 hover:text-red-700",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}
