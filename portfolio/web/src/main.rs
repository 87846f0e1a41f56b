use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

mod components;
#[cfg(feature = "server")]
mod server;
mod state;
mod views;

use components::{AccessToast, Header, ToastState};
use state::use_dashboard_store;
use views::ProjectsList;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

const ACCESS_DENIED_MESSAGE: &str = "This project belongs to another department.";
const TOAST_TIMEOUT_MS: u32 = 3_000;

fn main() {
    #[cfg(feature = "web")]
    // Hydrate the application on the client
    dioxus::launch(App);

    // Launch axum on the server
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt().init();
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Failed to start tokio runtime: {e}");
                return;
            }
        };
        if let Err(e) = runtime.block_on(server::launch_server()) {
            tracing::error!("Server stopped: {e:#}");
        }
    }
}

/// Root component. Owns the portfolio and the access-denied toast.
#[component]
fn App() -> Element {
    let mut store = use_dashboard_store();
    let mut toast = use_signal(ToastState::default);

    let handle_access_deny = move |_| {
        tracing::warn!(
            employee_id = %store.current_user.read().id,
            "Blocked access to a restricted project"
        );
        let generation = toast.write().show(ACCESS_DENIED_MESSAGE);
        spawn(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            toast.write().expire(generation);
        });
    };

    let employees = store.portfolio.read().employees().to_vec();
    let message = toast.read().message().map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        Header {
            current_user: store.current_user,
            employees,
            on_switch_user: move |id: String| store.switch_user(&id),
        }

        main { class: "min-h-screen bg-slate-50 py-8",
            div { class: "max-w-7xl mx-auto px-6",
                ProjectsList {
                    portfolio: store.portfolio,
                    current_user: store.current_user,
                    on_access_deny: handle_access_deny,
                }
            }
        }

        if let Some(message) = message {
            AccessToast { message, on_dismiss: move |_| toast.write().dismiss() }
        }
    }
}
