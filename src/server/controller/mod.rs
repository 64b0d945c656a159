pub mod crew;
pub mod dashboard;
pub mod flight;
pub mod health;
pub mod recommendation;
