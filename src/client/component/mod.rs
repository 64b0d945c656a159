pub mod crew_detail_modal;
pub mod crew_table;
pub mod flight_row;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod parameter_bar;
pub mod recommendation_card;
pub mod stats_card;

pub use crew_detail_modal::CrewDetailModal;
pub use crew_table::CrewTable;
pub use flight_row::FlightRow;
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use parameter_bar::ParameterBar;
pub use recommendation_card::RecommendationCard;
pub use stats_card::StatsCard;
