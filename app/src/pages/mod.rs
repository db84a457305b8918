mod dashboard;
mod not_found;

pub use self::dashboard::Dashboard;
pub use not_found::NotFound;
