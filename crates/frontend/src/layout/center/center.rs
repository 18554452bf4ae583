use crate::layout::global_context::AppGlobalContext;
use crate::projections::p901_program_list::ui::list::ProgramList;
use crate::projections::p902_program_calendar::ui::calendar::ProgramCalendar;
use crate::projections::p903_program_map::ui::map::ProgramMap;
use contracts::system::browser::ViewMode;
use leptos::prelude::*;

/// Results area: summary line and the active view.
///
/// List and Calendar are mounted only while active. The map stays mounted
/// and is hidden instead, so its widget survives view switches.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let summary = move || ctx.browser.with(|s| s.results_summary());
    let view_mode = Memo::new(move |_| ctx.view_mode());

    view! {
        <div data-zone="center" class="app-results">
            <div class="app-results__summary" aria-live="polite">{summary}</div>
            {move || match view_mode.get() {
                ViewMode::List => view! { <ProgramList /> }.into_any(),
                ViewMode::Calendar => view! { <ProgramCalendar /> }.into_any(),
                ViewMode::Map => view! { <></> }.into_any(),
            }}
            <ProgramMap />
        </div>
    }
}
