use crate::projections::p900_program_filter::ui::filter_bar::FilterBar;
use leptos::prelude::*;

#[component]
pub fn Left() -> impl IntoView {
    view! {
        <aside data-zone="left" class="left">
            <FilterBar />
        </aside>
    }
}
