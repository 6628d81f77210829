//! Contact form controller: owns the in-progress draft, checks required
//! fields at submit time and drives the transport call.

use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::events::SubmitEvent;
use yew::prelude::*;

use super::transport::{send_inquiry, InquiryPayload, SubmitOutcome};
use crate::i18n::{t, Lang};

/// In-progress, unsubmitted state of the contact form. Cleared only after
/// an accepted submission; kept as-is on every failure path so the visitor
/// can retry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub category: Option<String>,
    pub description: String,
    pub consent: bool,
}

impl ContactDraft {
    /// Checked once at submit time; editing never validates.
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.description.is_empty() && self.consent
    }

    pub fn to_payload(&self) -> InquiryPayload {
        InquiryPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            category: self.category.clone().unwrap_or_default(),
            message: self.description.clone(),
            consent: if self.consent { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Outcome of the last submission attempt, overwritten by the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionStatus {
    pub ok: bool,
    pub message: String,
}

/// Map a transport outcome to the status to display and whether the draft
/// should be cleared. Only an accepted submission clears the draft; a
/// rejection detail from the backend is shown verbatim.
fn status_for(outcome: SubmitOutcome, lang: Lang) -> (SubmissionStatus, bool) {
    match outcome {
        SubmitOutcome::Accepted => (
            SubmissionStatus {
                ok: true,
                message: t("contact.status.sent", lang).to_string(),
            },
            true,
        ),
        SubmitOutcome::Rejected { detail } => (
            SubmissionStatus {
                ok: false,
                message: detail.unwrap_or_else(|| t("contact.status.failed", lang).to_string()),
            },
            false,
        ),
        SubmitOutcome::Unreachable => (
            SubmissionStatus {
                ok: false,
                message: t("contact.status.server-error", lang).to_string(),
            },
            false,
        ),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub lang: Lang,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let lang = props.lang;
    let draft = use_state(ContactDraft::default);
    let sending = use_state(|| false);
    let status = use_state(|| None::<SubmissionStatus>);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.name = input.value();
            draft.set(next);
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.email = input.value();
            draft.set(next);
        })
    };

    let on_company = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.company = input.value();
            draft.set(next);
        })
    };

    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let mut next = (*draft).clone();
            next.category = if value.is_empty() { None } else { Some(value) };
            draft.set(next);
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = input.value();
            draft.set(next);
        })
    };

    let on_consent = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.consent = input.checked();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let sending = sending.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            status.set(None);
            // one inquiry in flight at a time
            if *sending {
                return;
            }
            if !draft.has_required_fields() {
                status.set(Some(SubmissionStatus {
                    ok: false,
                    message: t("contact.status.missing-fields", lang).to_string(),
                }));
                return;
            }
            sending.set(true);
            let payload = draft.to_payload();
            let draft = draft.clone();
            let sending = sending.clone();
            let status = status.clone();
            spawn_local(async move {
                log!("Sending inquiry");
                let (outcome_status, reset_draft) = status_for(send_inquiry(&payload).await, lang);
                if reset_draft {
                    draft.set(ContactDraft::default());
                }
                status.set(Some(outcome_status));
                sending.set(false);
            });
        })
    };

    let d = (*draft).clone();

    html! {
        <div class="contact-form-card">
            <style>
                {r#"
                    .contact-form-card {
                        background: rgba(255, 255, 255, 0.8);
                        border-radius: 16px;
                        box-shadow: 0 20px 40px rgba(120, 53, 15, 0.12);
                        padding: 2rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .form-field {
                        margin-bottom: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #334155;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        border: 1px solid #cbd5e1;
                        border-radius: 8px;
                        padding: 0.6rem 0.75rem;
                        font-size: 1rem;
                        background: #fff;
                        color: #1e293b;
                        box-sizing: border-box;
                    }
                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #ea580c;
                        box-shadow: 0 0 0 1px #ea580c;
                    }
                    .consent-row {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .consent-row input {
                        accent-color: #ea580c;
                    }
                    .consent-row label {
                        font-size: 0.875rem;
                        color: #475569;
                    }
                    .form-status {
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .form-status.success { color: #16a34a; }
                    .form-status.error { color: #dc2626; }
                    .submit-button {
                        width: 100%;
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem;
                        font-size: 1.05rem;
                        font-weight: 600;
                        color: #fff;
                        background: linear-gradient(to right, #ea580c, #d97706);
                        cursor: pointer;
                    }
                    .submit-button:hover {
                        background: linear-gradient(to right, #c2410c, #b45309);
                    }
                    .submit-button:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    @media (max-width: 768px) {
                        .form-row { grid-template-columns: 1fr; gap: 0; }
                    }
                "#}
            </style>
            <form onsubmit={onsubmit}>
                <div class="form-row">
                    <div class="form-field">
                        <label for="name">{ t("contact.name.label", lang) }</label>
                        <input
                            id="name"
                            name="name"
                            placeholder={t("contact.name.placeholder", lang)}
                            value={d.name.clone()}
                            oninput={on_name}
                        />
                    </div>
                    <div class="form-field">
                        <label for="email">{ t("contact.email.label", lang) }</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            placeholder={t("contact.email.placeholder", lang)}
                            value={d.email.clone()}
                            oninput={on_email}
                        />
                    </div>
                </div>
                <div class="form-field">
                    <label for="company">{ t("contact.company.label", lang) }</label>
                    <input
                        id="company"
                        name="company"
                        placeholder={t("contact.company.placeholder", lang)}
                        value={d.company.clone()}
                        oninput={on_company}
                    />
                </div>
                <div class="form-field">
                    <label for="category">{ t("contact.category.label", lang) }</label>
                    <select id="category" name="category" onchange={on_category}>
                        <option value="" selected={d.category.is_none()}>
                            { t("contact.category.placeholder", lang) }
                        </option>
                        <option value="cloud-data" selected={d.category.as_deref() == Some("cloud-data")}>
                            { t("contact.category.cloud-data", lang) }
                        </option>
                        <option value="applications" selected={d.category.as_deref() == Some("applications")}>
                            { t("contact.category.applications", lang) }
                        </option>
                        <option value="ai-ml" selected={d.category.as_deref() == Some("ai-ml")}>
                            { t("contact.category.ai-ml", lang) }
                        </option>
                        <option value="data-analytics" selected={d.category.as_deref() == Some("data-analytics")}>
                            { t("contact.category.data-analytics", lang) }
                        </option>
                        <option value="training" selected={d.category.as_deref() == Some("training")}>
                            { t("contact.category.training", lang) }
                        </option>
                        <option value="general" selected={d.category.as_deref() == Some("general")}>
                            { t("contact.category.general", lang) }
                        </option>
                    </select>
                </div>
                <div class="form-field">
                    <label for="description">{ t("contact.description.label", lang) }</label>
                    <textarea
                        id="description"
                        name="message"
                        rows="6"
                        placeholder={t("contact.description.placeholder", lang)}
                        value={d.description.clone()}
                        oninput={on_description}
                    />
                </div>
                <div class="consent-row">
                    <input
                        id="consent"
                        type="checkbox"
                        checked={d.consent}
                        onchange={on_consent}
                    />
                    <label for="consent">{ t("contact.consent.label", lang) }</label>
                </div>
                {
                    if let Some(s) = (*status).as_ref() {
                        html! {
                            <p class={if s.ok { "form-status success" } else { "form-status error" }}>
                                { s.message.clone() }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
                <button class="submit-button" type="submit" disabled={*sending}>
                    {
                        if *sending {
                            t("contact.submitting", lang)
                        } else {
                            t("contact.submit", lang)
                        }
                    }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Anna".to_string(),
            email: "anna@x.com".to_string(),
            company: String::new(),
            category: None,
            description: "Potrzebuję appki".to_string(),
            consent: true,
        }
    }

    #[test]
    fn empty_draft_has_no_required_fields() {
        assert!(!ContactDraft::default().has_required_fields());
    }

    #[test]
    fn each_required_field_is_enforced() {
        let mut d = valid_draft();
        d.name.clear();
        assert!(!d.has_required_fields());

        let mut d = valid_draft();
        d.email.clear();
        assert!(!d.has_required_fields());

        let mut d = valid_draft();
        d.description.clear();
        assert!(!d.has_required_fields());

        let mut d = valid_draft();
        d.consent = false;
        assert!(!d.has_required_fields());
    }

    #[test]
    fn company_and_category_are_optional() {
        assert!(valid_draft().has_required_fields());
    }

    #[test]
    fn payload_carries_the_draft_values() {
        let payload = valid_draft().to_payload();
        assert_eq!(payload.name, "Anna");
        assert_eq!(payload.email, "anna@x.com");
        assert_eq!(payload.company, "");
        assert_eq!(payload.category, "");
        assert_eq!(payload.message, "Potrzebuję appki");
        assert_eq!(payload.consent, "yes");
    }

    #[test]
    fn unset_category_defaults_to_empty_string() {
        let mut d = valid_draft();
        d.category = Some("training".to_string());
        assert_eq!(d.to_payload().category, "training");
        d.category = None;
        assert_eq!(d.to_payload().category, "");
    }

    #[test]
    fn declined_consent_serializes_as_no() {
        let mut d = valid_draft();
        d.consent = false;
        assert_eq!(d.to_payload().consent, "no");
    }

    #[test]
    fn accepted_outcome_reports_success_and_resets_the_draft() {
        let (status, reset_draft) = status_for(SubmitOutcome::Accepted, Lang::En);
        assert!(status.ok);
        assert_eq!(status.message, "Message sent. Thank you!");
        assert!(reset_draft);
    }

    #[test]
    fn rejection_detail_is_shown_verbatim_and_keeps_the_draft() {
        let outcome = SubmitOutcome::Rejected {
            detail: Some("Invalid email".to_string()),
        };
        let (status, reset_draft) = status_for(outcome, Lang::Pl);
        assert!(!status.ok);
        assert_eq!(status.message, "Invalid email");
        assert!(!reset_draft);
    }

    #[test]
    fn detail_less_rejection_falls_back_to_the_generic_message() {
        let (status, reset_draft) = status_for(SubmitOutcome::Rejected { detail: None }, Lang::Pl);
        assert!(!status.ok);
        assert_eq!(status.message, t("contact.status.failed", Lang::Pl));
        assert!(!reset_draft);
    }

    #[test]
    fn unreachable_backend_reports_the_server_error_and_keeps_the_draft() {
        let (status, reset_draft) = status_for(SubmitOutcome::Unreachable, Lang::En);
        assert!(!status.ok);
        assert_eq!(status.message, "Server error.");
        assert!(!reset_draft);
    }
}
