use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::projections::p901_program_list::ProgramDetail;
use leptos::prelude::*;

/// Modal with every field of the selected program.
#[component]
pub fn ProgramDetailsModal() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let modal = leptos::context::use_context::<ModalService>()
        .expect("ModalService context not found");

    let detail = move || {
        modal
            .current()
            .and_then(|id| ctx.find_program(id))
            .map(|p| ProgramDetail::from_program(&p))
    };

    view! {
        {move || detail().map(|d| view! { <ProgramDetailsView detail=d /> })}
    }
}

#[component]
fn ProgramDetailsView(detail: ProgramDetail) -> impl IntoView {
    let modal = leptos::context::use_context::<ModalService>()
        .expect("ModalService context not found");
    let on_close = Callback::new(move |_| modal.close());

    let registration = detail.registration_label();
    let registration_variant = if detail.registration_open {
        "badge-open"
    } else {
        "badge-closed"
    };
    let contact_email = detail.email.clone();
    let website = detail.website.clone();

    let row = |label: &'static str, value: String| {
        view! {
            <div class="program-details__row">
                <dt>{label}</dt>
                <dd>{value}</dd>
            </div>
        }
    };

    view! {
        <Modal
            title=detail.name.clone()
            on_close=on_close
            footer=move || {
                let email = contact_email.clone();
                let website = website.clone();
                view! {
                    {email.map(|email| view! {
                        <a class="button button--secondary" href=format!("mailto:{}", email)>
                            "Email"
                        </a>
                    })}
                    {website.map(|url| view! {
                        <a class="button button--primary" href=url target="_blank" rel="noopener noreferrer">
                            "Visit website" {icon("external")}
                        </a>
                    })}
                }
            }
        >
            <div class="program-details">
                <div class="program-details__badges">
                    <Badge variant=detail.program_type.badge_class()>
                        {detail.program_type.display_name()}
                    </Badge>
                    <Badge variant=registration_variant>
                        {format!("Registration {}", registration.to_lowercase())}
                    </Badge>
                </div>
                <div class="program-details__org">{detail.organization.clone()}</div>
                <p class="program-details__description">{detail.description.clone()}</p>

                <dl class="program-details__grid">
                    {row("Grades / ages", detail.grades.clone())}
                    {row("Session", detail.session.clone())}
                    {detail.dates.clone().map(|dates| row("Dates", dates))}
                    {row("Hours", detail.hours.clone())}
                    {(!detail.days.trim().is_empty()).then(|| row("Days", detail.days.clone()))}
                    {row("Cost", detail.cost.clone())}
                    {row("Financial aid", detail.scholarship.clone())}
                    {row("Transportation", detail.transportation.clone())}
                    {row("Meals provided", detail.meals.clone())}
                    {row("Setting", detail.setting.clone())}
                    {row("Location", detail.location.clone())}
                    {row("Phone", detail.phone.clone())}
                    {row("Registration", registration.to_string())}
                </dl>

                <div class="program-details__subjects">
                    <h4>"Subjects"</h4>
                    {if detail.subjects.is_empty() {
                        view! { <p>"See website for program details"</p> }.into_any()
                    } else {
                        detail
                            .subjects
                            .clone()
                            .into_iter()
                            .map(|s| view! { <Badge variant="badge-subject">{s}</Badge> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </Modal>
    }
}
