use leptos::prelude::*;
use riego_app::state::DashboardState;
use riego_domain::schedule::TimeOfDay;

use crate::browser;

/// One line per configured slot, in configured order.
fn slot_lines(first: TimeOfDay, second: TimeOfDay) -> [String; 2] {
    [format!("First: {first}"), format!("Second: {second}")]
}

/// The two daily slots and the one coming up next.
///
/// Recomputed whenever the state changes, so at least on every poll.
#[component]
pub fn ScheduleCard(state: RwSignal<DashboardState>) -> impl IntoView {
    let slots = Memo::new(move |_| {
        state.with(|s| slot_lines(s.config.first_irrigation, s.config.second_irrigation))
    });
    let next = Memo::new(move |_| {
        state
            .with(|s| s.next_irrigation(browser::local_time_of_day()))
            .to_string()
    });

    view! {
        <section class="card schedule">
            <h2>"Schedule"</h2>
            <ul>
                <li>{move || slots.with(|lines| lines[0].clone())}</li>
                <li>{move || slots.with(|lines| lines[1].clone())}</li>
            </ul>
            <p class="next-irrigation">"Next irrigation: " <strong>{move || next.get()}</strong></p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_slots_in_configured_order_without_part_of_day() {
        let lines = slot_lines("21:00".parse().unwrap(), "06:30".parse().unwrap());
        assert_eq!(lines, ["First: 21:00".to_string(), "Second: 06:30".to_string()]);
    }
}
