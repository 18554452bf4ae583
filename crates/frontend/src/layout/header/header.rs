use super::view_switcher::ViewSwitcher;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (title, subtitle) = ctx
        .config
        .with_value(|c| (c.site.title.clone(), c.site.subtitle.clone()));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{title}</span>
                {(!subtitle.is_empty()).then(|| view! {
                    <span class="header__subtitle">{subtitle}</span>
                })}
            </div>
            <div class="header__actions">
                <ViewSwitcher />
            </div>
        </header>
    }
}
