use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::projections::p901_program_list::ProgramCard;
use leptos::prelude::*;

#[component]
pub fn ProgramList() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let cards = Memo::new(move |_| ctx.browser.with(|s| s.list_cards()));

    view! {
        <div class="program-list">
            <Show
                when=move || cards.with(|c| !c.is_empty())
                fallback=move || view! { <NoResults /> }
            >
                <div class="program-list__grid">
                    <For
                        each=move || cards.get().into_iter().enumerate()
                        key=|(_, card)| card.id
                        children=move |(index, card)| view! {
                            <ProgramCardView card=card delay_ms=stagger_delay(index) />
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ProgramCardView(card: ProgramCard, delay_ms: u32) -> impl IntoView {
    let modal = leptos::context::use_context::<ModalService>()
        .expect("ModalService context not found");
    let id = card.id;

    view! {
        <CardAnimated class="program-card" delay_ms=delay_ms>
            <div class="program-card__badges">
                <Badge variant=card.program_type.badge_class()>
                    {card.program_type.display_name()}
                </Badge>
                {card.week_badge.map(|week| view! {
                    <Badge variant="badge-week">{week}</Badge>
                })}
                {card.registration_closed.then(|| view! {
                    <Badge variant="badge-closed">"Registration closed"</Badge>
                })}
            </div>
            <h3 class="program-card__name">{card.name}</h3>
            <div class="program-card__org">{card.organization}</div>
            <p class="program-card__description">{card.description}</p>
            <div class="program-card__facts">
                <span class="program-card__location">{icon("pin")}{card.location}</span>
                <span class="program-card__grades">{card.grade_text.unwrap_or_default()}</span>
                {card.hours.map(|hours| view! {
                    <span class="program-card__hours">{hours}</span>
                })}
            </div>
            <div class="program-card__cost" class:program-card__cost--unpriced=card.unpriced>
                {card.cost_text}
                {card.scholarship.then(|| view! {
                    <span class="program-card__aid">"Financial aid available"</span>
                })}
            </div>
            <div class="program-card__subjects">
                {card
                    .subject_tags
                    .into_iter()
                    .map(|subject| view! { <Badge variant="badge-subject">{subject}</Badge> })
                    .collect_view()}
            </div>
            <div class="program-card__actions">
                <button class="button button--primary" on:click=move |_| modal.open(id)>
                    "View Details"
                </button>
                {card.website.map(|url| view! {
                    <a class="button button--link" href=url target="_blank" rel="noopener noreferrer">
                        "Website" {icon("external")}
                    </a>
                })}
            </div>
        </CardAnimated>
    }
}

#[component]
fn NoResults() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="no-results">
            <h3>"No programs match your filters"</h3>
            <p>"Try widening the search or clearing a filter."</p>
            <button class="button button--secondary" on:click=move |_| ctx.reset_filters()>
                "Reset filters"
            </button>
        </div>
    }
}
