use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::shared::icons::icon;
use contracts::projections::p902_program_calendar::grid::WEEKDAY_LABELS;
use contracts::projections::p902_program_calendar::{CalendarCell, CalendarDay};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonGroup, ButtonSize};

/// Month grid of the filtered programs.
#[component]
pub fn ProgramCalendar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let month = Memo::new(move |_| ctx.browser.with(|s| s.calendar_month()));

    view! {
        <div class="program-calendar">
            <div class="program-calendar__toolbar">
                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.previous_month()
                    >
                        {icon("chevron-left")}
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.next_month()
                    >
                        {icon("chevron-right")}
                    </Button>
                </ButtonGroup>
                <h2 class="program-calendar__title">{move || month.with(|m| m.title.clone())}</h2>
                <span class="program-calendar__count">
                    {move || month.with(|m| format!("{} programs this month", m.programs_in_month))}
                </span>
            </div>

            <div class="program-calendar__grid">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="program-calendar__weekday">{*label}</div> })
                    .collect_view()}
                {move || {
                    month
                        .get()
                        .cells
                        .into_iter()
                        .map(|cell| match cell {
                            CalendarCell::Blank => {
                                view! { <div class="program-calendar__cell program-calendar__cell--blank"></div> }
                                    .into_any()
                            }
                            CalendarCell::Day(day) => view! { <DayCell day=day /> }.into_any(),
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                let undated = month.with(|m| m.undated_count);
                (undated > 0).then(|| view! {
                    <p class="program-calendar__undated">
                        {format!(
                            "{} matching program{} without dates not shown on the calendar.",
                            undated,
                            if undated == 1 { "" } else { "s" },
                        )}
                    </p>
                })
            }}
        </div>
    }
}

#[component]
fn DayCell(day: CalendarDay) -> impl IntoView {
    let modal = leptos::context::use_context::<ModalService>()
        .expect("ModalService context not found");

    let busy = !day.programs.is_empty();

    view! {
        <div
            class="program-calendar__cell"
            class:program-calendar__cell--weekend=day.weekend
            class:program-calendar__cell--busy=busy
            data-date=day.iso
        >
            <span class="program-calendar__day">{day.day}</span>
            {day
                .programs
                .into_iter()
                .map(|p| {
                    let id = p.id;
                    let title = p.name.clone();
                    view! {
                        <button
                            class="program-calendar__event"
                            title=title
                            on:click=move |_| modal.open(id)
                        >
                            {p.name}
                        </button>
                    }
                })
                .collect_view()}
            {(day.overflow > 0).then(|| view! {
                <span class="program-calendar__more">{format!("+{} more", day.overflow)}</span>
            })}
        </div>
    }
}
