//! One-shot delivery of a contact inquiry to the hosted form backend.
//!
//! The backend accepts a multipart form body and answers with JSON. A
//! rejection body may carry an `errors` array; the first entry's `message`
//! is surfaced to the visitor when present. No retries and no timeout
//! beyond the platform default — a failed inquiry stays editable and can
//! simply be sent again.

use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config;

/// Multipart payload with the backend's standard field names. The form
/// panel shows the project description under the `message` key; consent is
/// transported as the literal "yes" or "no".
#[derive(Clone, Debug, PartialEq)]
pub struct InquiryPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub category: String,
    pub message: String,
    pub consent: String,
}

impl InquiryPayload {
    fn to_form_data(&self) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        form.append_with_str("name", &self.name)?;
        form.append_with_str("email", &self.email)?;
        form.append_with_str("company", &self.company)?;
        form.append_with_str("category", &self.category)?;
        form.append_with_str("message", &self.message)?;
        form.append_with_str("consent", &self.consent)?;
        Ok(form)
    }
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The backend accepted the inquiry.
    Accepted,
    /// The backend answered with a failure status; `detail` holds the first
    /// structured error message when the body carried one.
    Rejected { detail: Option<String> },
    /// The request itself failed (network down, endpoint unreachable).
    Unreachable,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// First structured error message in a rejection body, if any. Malformed
/// or empty bodies yield `None` and the caller falls back to a generic
/// localized message.
pub fn rejection_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.errors.into_iter().next()?.message
}

/// POST the payload to the fixed endpoint and interpret the response.
pub async fn send_inquiry(payload: &InquiryPayload) -> SubmitOutcome {
    let form = match payload.to_form_data() {
        Ok(form) => form,
        Err(e) => {
            log!("Failed to build form body:", e);
            return SubmitOutcome::Unreachable;
        }
    };

    let request = Request::post(config::get_form_endpoint())
        .header("Accept", "application/json")
        .body(form);

    match request.send().await {
        Ok(response) if response.ok() => {
            log!("Inquiry accepted");
            SubmitOutcome::Accepted
        }
        Ok(response) => {
            log!("Inquiry rejected with status:", response.status());
            let detail = match response.text().await {
                Ok(body) => rejection_detail(&body),
                Err(_) => None,
            };
            SubmitOutcome::Rejected { detail }
        }
        Err(e) => {
            log!("Network error:", e.to_string());
            SubmitOutcome::Unreachable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_detail_takes_the_first_error_message() {
        let body = r#"{"errors":[{"message":"Invalid email"},{"message":"second"}]}"#;
        assert_eq!(rejection_detail(body), Some("Invalid email".to_string()));
    }

    #[test]
    fn rejection_detail_handles_message_less_errors() {
        assert_eq!(rejection_detail(r#"{"errors":[{"code":42}]}"#), None);
    }

    #[test]
    fn rejection_detail_is_none_for_empty_or_foreign_bodies() {
        assert_eq!(rejection_detail("{}"), None);
        assert_eq!(rejection_detail(r#"{"errors":[]}"#), None);
        assert_eq!(rejection_detail(r#"{"ok":true}"#), None);
    }

    #[test]
    fn rejection_detail_is_none_for_malformed_json() {
        assert_eq!(rejection_detail(""), None);
        assert_eq!(rejection_detail("<html>nope</html>"), None);
    }
}
