use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional footer (links, actions)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape закрывает окно; слушатель снимается вместе с модалкой
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" aria-label="Close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! {
                    <div class="modal-footer">{footer.run()}</div>
                })}
            </div>
        </div>
    }
}
