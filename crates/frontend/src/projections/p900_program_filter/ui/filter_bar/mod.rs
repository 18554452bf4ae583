use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::ui::{SearchInput, Select};
use contracts::projections::p900_program_filter::FilterKey;
use contracts::projections::p904_filter_options::SelectOption;
use contracts::shared::config::DateScopeKind;
use leptos::prelude::*;

/// Search box, dropdowns and active-filter chips.
///
/// Every control writes straight into [`AppGlobalContext::set_filter`];
/// the recomputed subset then flows to whichever view is visible.
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let options = ctx.options.get_value();

    let active_count = Signal::derive(move || ctx.browser.with(|s| s.filters().active_count()));
    let tags = move || {
        ctx.browser
            .with(|s| s.filters().tags(s.convention()))
    };

    let value_of = move |key: FilterKey| Signal::derive(move || ctx.filter_value(key));
    let setter = move |key: FilterKey| Callback::new(move |raw: String| ctx.set_filter(key, raw));

    let date_label = match options.date_scope_kind {
        DateScopeKind::Week => "Week",
        DateScopeKind::Month => "Month",
    };

    let select = move |key: FilterKey, label: &'static str, options: Vec<SelectOption>| {
        view! {
            <Select
                id=format!("filter-{:?}", key).to_lowercase()
                label=label
                value=value_of(key)
                on_change=setter(key)
                options=options
            />
        }
    };

    view! {
        <FilterPanel
            is_expanded=ctx.filters_open
            active_filters_count=active_count
            on_reset=Callback::new(move |_| ctx.reset_filters())
            filter_content=move || {
                let options = options.clone();
                view! {
                    <div class="filter-bar">
                        <SearchInput
                            id="filter-search"
                            placeholder="Search programs, organizations, towns..."
                            value=value_of(FilterKey::Search)
                            on_input=setter(FilterKey::Search)
                        />
                        <div class="filter-bar__selects">
                            {select(FilterKey::Type, "Program type", options.types)}
                            {select(FilterKey::Grade, "Grade", options.grades)}
                            {select(FilterKey::City, "Town", options.cities)}
                            {select(FilterKey::Subject, "Subject", options.subjects)}
                            {select(FilterKey::MaxCost, "Max cost", options.max_costs)}
                            {select(FilterKey::Scholarship, "Financial aid", options.scholarship)}
                            {select(FilterKey::DateScope, date_label, options.date_scopes)}
                        </div>
                    </div>
                }
            }
            filter_tags=move || {
                view! {
                    <For
                        each=tags
                        key=|tag| (tag.key, tag.label.clone())
                        children=move |tag| {
                            let key = tag.key;
                            view! {
                                <FilterTag
                                    label=tag.label
                                    on_remove=Callback::new(move |_| ctx.set_filter(key, String::new()))
                                />
                            }
                        }
                    />
                }
            }
        />
    }
}
