use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{CrewManagement, Dashboard, NotFound, Recommendations};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Dashboard {},

        #[route("/crew")]
        CrewManagement {},

        #[route("/recommendations?:flight")]
        Recommendations { flight: String },

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
