use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use dashboard::route::{self, DashboardRoute};
use dashboard::DashboardShell;
use settings_types::PageKey;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    // Resolved once: the URL decides which server and page we open on.
    let initial = use_hook(|| {
        route::current_route().unwrap_or_else(|| DashboardRoute {
            server_id: route::DEFAULT_SERVER_ID.to_string(),
            page: PageKey::all()[0],
        })
    });

    rsx! {
        DashboardShell {
            server_id: initial.server_id.clone(),
            initial_page: initial.page,
        }
    }
}
