use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::system::browser::ViewMode;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonGroup, ButtonSize};

/// List / Calendar / Map toggle.
#[component]
pub fn ViewSwitcher() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <ButtonGroup>
            {ViewMode::all()
                .into_iter()
                .map(|mode| {
                    let is_active = move || ctx.view_mode() == mode;
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=move || {
                                if is_active() {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            }
                            on_click=move |_| {
                                let transition = ctx.select_view(mode);
                                leptos::logging::log!("🔶 view {:?}: {:?}", mode, transition);
                            }
                        >
                            {icon(mode.code())}
                            <span class="view-switcher__label">{mode.label()}</span>
                        </Button>
                    }
                })
                .collect_view()}
        </ButtonGroup>
    }
}
