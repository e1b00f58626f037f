mod alert_banner;
mod chart;
mod config_form;
mod gauge;
mod header;
mod history_actions;
mod loading;
mod pump_control;
mod schedule_card;
mod stat_card;
mod statistics_panel;
mod toast;

pub use alert_banner::AlertBanner;
pub use chart::HistoryCharts;
pub use config_form::ConfigForm;
pub use gauge::Gauges;
pub use header::Header;
pub use history_actions::HistoryActions;
pub use loading::Loading;
pub use pump_control::PumpControl;
pub use schedule_card::ScheduleCard;
pub use stat_card::StatCard;
pub use statistics_panel::StatisticsPanel;
pub use toast::{ToastContainer, use_toasts};
