use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible panel holding the filter controls and the active-filter chips.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Reset all filters
    on_reset: Callback<()>,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ViewFn,

    /// Active filter chips
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--link"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| on_reset.run(())
                    >
                        "Reset filters"
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                </div>
            </div>
            {filter_tags.map(|tags| view! {
                <div class="filter-panel-tags">{tags.run()}</div>
            })}
        </div>
    }
}

/// Chip of one active filter; the cross clears that filter.
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                class="filter-tag__remove"
                aria-label="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
