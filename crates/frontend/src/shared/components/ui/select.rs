use contracts::projections::p904_filter_options::SelectOption;
use leptos::prelude::*;

/// Labelled `<select>` over a fixed option list.
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    /// Current value; "" selects the "any" option
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<SelectOption>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <select
                id=id
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, label)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
