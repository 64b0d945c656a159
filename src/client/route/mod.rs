pub mod crew;
pub mod dashboard;
pub mod not_found;
pub mod recommendations;

pub use crew::CrewManagement;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use recommendations::Recommendations;
