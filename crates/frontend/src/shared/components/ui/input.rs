use crate::shared::icons::icon;
use leptos::prelude::*;

/// Free-text search box with a clear button.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--search">
            <span class="form__search-icon">{icon("search")}</span>
            <input
                id=id
                class="form__input"
                type="search"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="button button--icon form__search-clear"
                    aria-label="Clear search"
                    on:click=move |_| on_input.run(String::new())
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
