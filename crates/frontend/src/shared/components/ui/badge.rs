use leptos::prelude::*;

/// Small label next to a program name: type, subject, registration state.
#[component]
pub fn Badge(
    /// Modifier class, e.g. "badge-camp", "badge-subject", "badge-closed"
    #[prop(optional, into)]
    variant: String,
    children: Children,
) -> impl IntoView {
    let class = if variant.is_empty() {
        "badge badge-neutral".to_string()
    } else {
        format!("badge {}", variant)
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}
