use leptos::prelude::*;
use riego_app::settings::DashboardSettings;
use riego_dashboard::{App, browser, logging};

fn main() {
    let loaded = DashboardSettings::load(
        include_str!("../dashboard.toml"),
        browser::stored_override,
    );
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&settings.logging.filter);
    if let Err(err) = &loaded {
        tracing::warn!(error = %err, "falling back to default dashboard settings");
    }
    tracing::info!(api = %settings.api.base_url, "starting dashboard");

    leptos::mount::mount_to_body(move || view! { <App settings=settings/> });
}
