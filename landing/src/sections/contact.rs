//! Contact section: the lead form plus the response/compliance cards.
//!
//! The form controller lives in an `RwSignal`. Submission is split in two
//! signal updates around the network call so nothing stays borrowed while
//! the insert is in flight.

use chrono::NaiveDate;
use leadform::{FieldId, LeadForm, LeadSink, SubmitError};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ToastQueue;
use crate::backend::RestLeadSink;

type ContactForm = LeadForm<ToastQueue>;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current calendar day in the visitor's timezone.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new(expect_context::<ToastQueue>()));
    let sink = expect_context::<RestLeadSink>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Rejections (including a second click while in flight) are already
        // reported by the controller.
        let Some(Ok(record)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let sink = sink.clone();
        spawn_local(async move {
            let result = sink.insert(&record).await;
            form.update(|f| {
                // Outcomes already reached the visitor as toasts; only phase
                // misuse is left to report.
                if let Err(err @ SubmitError::NotInFlight) = f.finish_submit(result) {
                    tracing::debug!("[contact] {err}");
                }
            });
        });
    };

    view! {
        <section id=super::CONTACT_ANCHOR class="contact">
            <div class="container">
                <div class="section-header section-header-light">
                    <h2 class="section-title">"Ready to Transform Your Practice?"</h2>
                    <p class="section-description">
                        "Get a free consultation and discover how our solutions can help your practice grow "
                        "while maintaining the highest standards of compliance and security."
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="card contact-card">
                        <h3 class="card-title">"Get Your Free Consultation"</h3>
                        <form class="lead-form" on:submit=on_submit novalidate=true>
                            <div class="form-row">
                                <TextField form=form field=FieldId::FirstName placeholder="John" />
                                <TextField form=form field=FieldId::LastName placeholder="Smith" />
                            </div>

                            <TextField
                                form=form
                                field=FieldId::Email
                                placeholder="john@dentalclinic.com"
                                kind="email"
                            />
                            {move || {
                                form.with(|f| f.email_error())
                                    .map(|hint| view! { <p class="field-error">{hint}</p> })
                            }}

                            <TextField form=form field=FieldId::Practice placeholder="Smith Family Dental" />

                            <div class="form-field">
                                <label for=FieldId::Message.dom_id()>{FieldId::Message.label()} " *"</label>
                                <textarea
                                    id=FieldId::Message.dom_id()
                                    rows="4"
                                    placeholder="I'm interested in improving my practice's online presence and need help with..."
                                    prop:value=move || {
                                        form.with(|f| f.state().value(FieldId::Message).to_string())
                                    }
                                    on:input=move |ev| {
                                        form.update(|f| f.update_field(FieldId::Message, event_target_value(&ev)))
                                    }
                                ></textarea>
                            </div>

                            <MeetingDateField form=form />

                            <div class="form-field captcha-field">
                                <label for=FieldId::CaptchaAnswer.dom_id()>
                                    {move || form.with(|f| f.challenge().question())} " *"
                                </label>
                                <input
                                    id=FieldId::CaptchaAnswer.dom_id()
                                    type="text"
                                    inputmode="numeric"
                                    autocomplete="off"
                                    placeholder="Your answer"
                                    prop:value=move || {
                                        form.with(|f| f.state().value(FieldId::CaptchaAnswer).to_string())
                                    }
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.update_field(FieldId::CaptchaAnswer, event_target_value(&ev))
                                        })
                                    }
                                />
                            </div>

                            <button
                                type="submit"
                                class="btn btn-primary btn-block"
                                disabled=move || form.with(|f| f.is_submitting())
                            >
                                {move || {
                                    if form.with(|f| f.is_submitting()) {
                                        "Sending..."
                                    } else {
                                        "Schedule Free Consultation"
                                    }
                                }}
                            </button>
                        </form>
                    </div>

                    <div class="contact-info">
                        <QuickResponseCard />
                        <CertificationsCard />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: FieldId,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    let marker = if field.is_required() { " *" } else { "" };
    view! {
        <div class="form-field">
            <label for=field.dom_id()>{field.label()} {marker}</label>
            <input
                id=field.dom_id()
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(|f| f.state().value(field).to_string())
                on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn MeetingDateField(form: RwSignal<ContactForm>) -> impl IntoView {
    let min = today().format(DATE_FORMAT).to_string();

    let on_change = move |ev: Event| {
        let raw = event_target_value(&ev);
        let date = if raw.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::debug!("[contact] unparsable meeting date {raw:?}: {e}");
                    return;
                }
            }
        };
        form.update(|f| {
            if let Err(e) = f.select_meeting_date(date, today()) {
                tracing::debug!("[contact] {e}");
            }
        });
    };

    view! {
        <div class="form-field">
            <label for="meetingDate">"Preferred Meeting Date"</label>
            <input
                id="meetingDate"
                type="date"
                min=min
                prop:value=move || {
                    form.with(|f| {
                        f.state()
                            .preferred_meeting_date
                            .map(|date| date.format(DATE_FORMAT).to_string())
                            .unwrap_or_default()
                    })
                }
                on:change=on_change
            />
        </div>
    }
}

#[component]
fn QuickResponseCard() -> impl IntoView {
    const GUARANTEES: [&str; 3] = [
        "Response within 2 hours during business hours",
        "24/7 emergency support for critical issues",
        "Free initial consultation and project assessment",
    ];
    view! {
        <div class="card info-card">
            <h3 class="card-title">"Quick Response Guarantee"</h3>
            <p class="card-description">
                "We understand that healthcare practices need reliable support. That's why we guarantee:"
            </p>
            <ul class="bullet-list">
                {GUARANTEES
                    .into_iter()
                    .map(|item| view! { <li><span class="bullet"></span>{item}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn CertificationsCard() -> impl IntoView {
    const CERTIFICATIONS: [(&str, &str); 4] = [
        ("H", "HIPAA Compliant"),
        ("P", "PCI DSS Level 1"),
        ("S", "SOC 2 Type II"),
        ("G", "GDPR Ready"),
    ];
    view! {
        <div class="card info-card">
            <h3 class="card-title">"Compliance Certifications"</h3>
            <div class="cert-grid">
                {CERTIFICATIONS
                    .into_iter()
                    .map(|(badge, name)| {
                        view! {
                            <div class="cert">
                                <div class="cert-badge">{badge}</div>
                                <span class="cert-name">{name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
