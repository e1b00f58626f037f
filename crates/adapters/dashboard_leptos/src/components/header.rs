use leptos::prelude::*;
use riego_app::state::DashboardState;

/// Title bar with the connectivity badge and the last update stamp.
#[component]
pub fn Header(state: RwSignal<DashboardState>) -> impl IntoView {
    let connection = Memo::new(move |_| state.with(|s| s.connection));
    let last_update = Memo::new(move |_| state.with(DashboardState::last_update_label));

    view! {
        <header class="dashboard-header">
            <h1>"Irrigation control"</h1>
            <div class="header-status">
                <span class=move || {
                    if connection.get().is_connected() {
                        "badge badge-online"
                    } else {
                        "badge badge-offline"
                    }
                }>{move || connection.get().label()}</span>
                <span class="last-update">
                    "Last update: "
                    {move || last_update.get().unwrap_or_else(|| "--".to_string())}
                </span>
            </div>
        </header>
    }
}
