mod home;
mod not_found;

pub use home::Dashboard;
pub use not_found::NotFound;
