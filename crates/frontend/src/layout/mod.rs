pub mod center;
pub mod global_context;
pub mod header;
pub mod left;
pub mod modal_service;

pub use modal_service::ModalService;

use crate::domain::a001_program::ui::details::ProgramDetailsModal;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |        Header (title, view switch)        |
/// +------------------------------------------+
/// |  Filters  |  Results (list/calendar/map) |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <left::Left />
                <div class="app-main">
                    <center::Center />
                </div>
            </div>
            <ProgramDetailsModal />
        </div>
    }
}
