use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use riego_app::services::dashboard_service::DashboardService;
use riego_app::settings::DashboardSettings;

pub mod api;
pub mod browser;
pub mod chart;
mod components;
pub mod logging;
mod pages;
mod polling;

use api::HttpBackend;
use components::ToastContainer;
use pages::{Dashboard, NotFound};

/// Shared handles every component reaches through context.
#[derive(Clone)]
pub struct AppContext {
    pub service: DashboardService<HttpBackend>,
    pub settings: DashboardSettings,
}

/// Access the [`AppContext`] provided by [`App`].
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Root application component.
#[component]
pub fn App(settings: DashboardSettings) -> impl IntoView {
    provide_context(AppContext {
        service: DashboardService::new(HttpBackend::new(&settings)),
        settings: settings.clone(),
    });

    view! {
        <ToastContainer dismiss_after_ms=settings.notifications.dismiss_after_ms>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Dashboard/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
