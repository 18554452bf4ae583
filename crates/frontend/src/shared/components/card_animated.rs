//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `layout.css` (`@keyframes card-appear`).
//! Карточки списка программ передают `delay_ms` для stagger-эффекта.

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками и её потолок.
const STAGGER_STEP_MS: u32 = 40;
const STAGGER_MAX_MS: u32 = 400;

pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS).min(STAGGER_MAX_MS)
}

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS класс карточки
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
