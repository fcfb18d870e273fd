#![allow(dead_code)]

//! Contact form: validation, relay to the backend, and feedback on the page.
//!
//! Submission is validated locally first; an invalid form never reaches the
//! transport. Whatever happens, the visitor's input is left in place.

use std::collections::BTreeMap;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::contact::{ContactReply, ContactSubmission};
use crate::view::document::Document;

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;
const MESSAGE_MAX_CHARS: usize = 5000;
const MESSAGE_MAX_LINKS: usize = 3;

pub const SENT_MESSAGE: &str = "Merci pour votre message ! Je vous répondrai rapidement.";
pub const FAILED_MESSAGE: &str =
    "Une erreur est survenue lors de l'envoi du message. Veuillez réessayer plus tard.";
const INVALID_MESSAGE: &str = "Veuillez corriger les champs indiqués.";

/// Form fields with an error slot (`#<field>-error`) on the page.
pub const FIELDS: [&str; 5] = ["name", "email", "subject", "message", "phone"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});
static URL_IN_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://|www\.").expect("valid name url regex"));
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://").expect("valid link regex"));
static PHONE_FORMATTING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()+]").expect("valid phone formatting regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10,15}$").expect("valid phone regex"));

/// Field name to a human-readable error, one per field.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("contact endpoint returned status {status}")]
    Rejected { status: u16, message: Option<String> },
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Checks every field and returns the normalized submission: name, message
/// and subject trimmed, email lowercased, blank optionals dropped.
pub fn validate(form: &ContactSubmission) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    if name.chars().count() < NAME_MIN_CHARS {
        errors.insert("name", "Le nom doit contenir au moins 2 caractères.".into());
    } else if URL_IN_NAME_RE.is_match(name) {
        errors.insert("name", "Le nom ne peut pas contenir d'URL.".into());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert("email", "L'adresse email est requise.".into());
    } else if !EMAIL_RE.is_match(email) {
        errors.insert("email", "Adresse email invalide.".into());
    }

    let message = form.message.trim();
    let length = message.chars().count();
    if length < MESSAGE_MIN_CHARS {
        errors.insert("message", "Le message doit contenir au moins 10 caractères.".into());
    } else if length > MESSAGE_MAX_CHARS {
        errors.insert("message", "Le message ne peut pas dépasser 5000 caractères.".into());
    } else if LINK_RE.find_iter(message).count() > MESSAGE_MAX_LINKS {
        errors.insert("message", "Le message contient trop de liens.".into());
    }

    let phone = form.phone.as_deref().map(str::trim).filter(|p| !p.is_empty());
    if let Some(phone) = phone {
        let digits = PHONE_FORMATTING_RE.replace_all(phone, "");
        if !PHONE_RE.is_match(&digits) {
            errors.insert("phone", "Numéro de téléphone invalide.".into());
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_lowercase(),
        message: message.to_string(),
        subject: form
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        phone: phone.map(str::to_string),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Transport
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactReply, ContactError>;
}

/// `POST {base}/contact/` with the submission as JSON.
#[derive(Clone)]
pub struct HttpContactTransport {
    client: Client,
    url: String,
}

impl HttpContactTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}/contact/", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactReply, ContactError> {
        let response = self.client.post(&self.url).json(submission).send().await?;
        let status = response.status();
        let body = response.text().await?;
        // The reply body is informational only; an unreadable one is not an error.
        let reply: ContactReply = serde_json::from_str(&body).unwrap_or_default();
        if !status.is_success() {
            return Err(ContactError::Rejected {
                status: status.as_u16(),
                message: reply.message,
            });
        }
        Ok(reply)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Submit
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Invalid(FieldErrors),
    Sent(String),
    Failed(String),
}

pub async fn submit(form: &ContactSubmission, transport: &dyn ContactTransport) -> SubmitOutcome {
    let submission = match validate(form) {
        Ok(submission) => submission,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    match transport.send(&submission).await {
        Ok(reply) => {
            info!("Contact submission relayed for {}", submission.email);
            SubmitOutcome::Sent(reply.message.unwrap_or_else(|| SENT_MESSAGE.to_string()))
        }
        Err(e) => {
            warn!("Contact submission failed: {e}");
            let message = match e {
                ContactError::Rejected { message: Some(message), .. } => message,
                _ => FAILED_MESSAGE.to_string(),
            };
            SubmitOutcome::Failed(message)
        }
    }
}

/// Writes the outcome into the error slots and `#form-status`. Field values
/// are never touched.
pub fn apply_outcome(doc: &mut Document, outcome: &SubmitOutcome) {
    for field in FIELDS {
        doc.replace_children(&format!("#{field}-error"), Vec::new());
    }

    let (status, class) = match outcome {
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors {
                doc.set_text(&format!("#{field}-error"), message);
            }
            (INVALID_MESSAGE, "error")
        }
        SubmitOutcome::Sent(message) => (message.as_str(), "success"),
        SubmitOutcome::Failed(message) => (message.as_str(), "error"),
    };
    doc.set_text("#form-status", status);
    doc.set_attr("#form-status", "class", &format!("form-status {class}"));
}

/// Puts the submitted values back into the form inputs.
pub fn refill_form(doc: &mut Document, form: &ContactSubmission) {
    doc.set_attr("#contact-form #name", "value", &form.name);
    doc.set_attr("#contact-form #email", "value", &form.email);
    if let Some(subject) = &form.subject {
        doc.set_attr("#contact-form #subject", "value", subject);
    }
    if let Some(phone) = &form.phone {
        doc.set_attr("#contact-form #phone", "value", phone);
    }
    doc.set_text("#contact-form #message", &form.message);
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    use super::*;
    use crate::view::shell::host_page;

    fn form(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    fn valid() -> ContactSubmission {
        form("Ada Lovelace", "Ada@Example.org", "  Bonjour, j'aimerais discuter d'un projet.  ")
    }

    /// Counts calls and answers with a fixed result.
    struct CountingTransport {
        calls: AtomicUsize,
        reject: bool,
    }

    impl CountingTransport {
        fn new(reject: bool) -> Self {
            Self { calls: AtomicUsize::new(0), reject }
        }
    }

    #[async_trait]
    impl ContactTransport for CountingTransport {
        async fn send(&self, _: &ContactSubmission) -> Result<ContactReply, ContactError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reject {
                Err(ContactError::Rejected { status: 500, message: None })
            } else {
                Ok(ContactReply { message: Some("Thanks".into()) })
            }
        }
    }

    #[test]
    fn test_valid_form_is_normalized() {
        let clean = validate(&valid()).unwrap();
        assert_eq!(clean.email, "ada@example.org");
        assert_eq!(clean.message, "Bonjour, j'aimerais discuter d'un projet.");
        assert_eq!(clean.subject, None);
    }

    #[test]
    fn test_name_rules() {
        let errors = validate(&form(" A ", "a@b.co", "assez long message")).unwrap_err();
        assert!(errors.contains_key("name"));
        let errors = validate(&form("www.spam.com", "a@b.co", "assez long message")).unwrap_err();
        assert_eq!(errors["name"], "Le nom ne peut pas contenir d'URL.");
    }

    #[test]
    fn test_email_rules() {
        assert!(validate(&form("Ada", "", "assez long message")).unwrap_err().contains_key("email"));
        assert!(validate(&form("Ada", "ada@localhost", "assez long message")).is_err());
        assert!(validate(&form("Ada", "ada@mail.fr", "assez long message")).is_ok());
    }

    #[test]
    fn test_message_rules() {
        let errors = validate(&form("Ada", "a@b.co", "   court   ")).unwrap_err();
        assert_eq!(errors["message"], "Le message doit contenir au moins 10 caractères.");

        let long = "x".repeat(5001);
        assert!(validate(&form("Ada", "a@b.co", &long)).unwrap_err().contains_key("message"));

        let spam = "voir http://a https://b http://c https://d";
        assert_eq!(
            validate(&form("Ada", "a@b.co", spam)).unwrap_err()["message"],
            "Le message contient trop de liens."
        );
        let three = "voir http://a https://b http://c merci";
        assert!(validate(&form("Ada", "a@b.co", three)).is_ok());
    }

    #[test]
    fn test_phone_is_optional_but_checked() {
        let mut with_phone = valid();
        with_phone.phone = Some("+32 (470) 12-34-56".into());
        assert!(validate(&with_phone).is_ok());

        with_phone.phone = Some("12345".into());
        assert!(validate(&with_phone).unwrap_err().contains_key("phone"));

        with_phone.phone = Some("   ".into());
        assert_eq!(validate(&with_phone).unwrap().phone, None);
    }

    #[tokio::test]
    async fn test_short_message_makes_no_network_call() {
        let transport = CountingTransport::new(false);
        let mut doc = host_page();

        for message in ["", "court", "   neuf car  "] {
            let outcome = submit(&form("Ada", "a@b.co", message), &transport).await;
            apply_outcome(&mut doc, &outcome);
            assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            doc.query("#message-error").unwrap().text_content(),
            "Le message doit contenir au moins 10 caractères."
        );
        assert!(doc.query("#form-status").unwrap().has_class("error"));
    }

    #[tokio::test]
    async fn test_bad_phone_fills_its_slot() {
        let mut with_phone = valid();
        with_phone.phone = Some("12345".into());
        let mut doc = host_page();
        apply_outcome(&mut doc, &submit(&with_phone, &CountingTransport::new(false)).await);
        assert_eq!(
            doc.query("#phone-error").unwrap().text_content(),
            "Numéro de téléphone invalide."
        );
    }

    #[test]
    fn test_refill_keeps_submitted_values() {
        let mut submitted = form("Ada", "ada@example.org", "court");
        submitted.phone = Some("0470 12 34 56".into());
        let mut doc = host_page();
        refill_form(&mut doc, &submitted);
        assert_eq!(doc.query("#name").unwrap().get_attr("value"), Some("Ada"));
        assert_eq!(doc.query("#phone").unwrap().get_attr("value"), Some("0470 12 34 56"));
        assert_eq!(doc.query("#subject").unwrap().get_attr("value"), None);
        assert_eq!(doc.query("#message").unwrap().text_content(), "court");
    }

    #[tokio::test]
    async fn test_transport_failure_shows_generic_message() {
        let transport = CountingTransport::new(true);
        let outcome = submit(&valid(), &transport).await;
        assert_eq!(outcome, SubmitOutcome::Failed(FAILED_MESSAGE.to_string()));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);

        let mut doc = host_page();
        apply_outcome(&mut doc, &outcome);
        assert_eq!(doc.query("#form-status").unwrap().text_content(), FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_success_clears_previous_errors() {
        let mut doc = host_page();
        let bad = submit(&form("A", "nope", "court"), &CountingTransport::new(false)).await;
        apply_outcome(&mut doc, &bad);
        assert!(!doc.query("#email-error").unwrap().text_content().is_empty());

        let good = submit(&valid(), &CountingTransport::new(false)).await;
        assert_eq!(good, SubmitOutcome::Sent("Thanks".into()));
        apply_outcome(&mut doc, &good);
        assert_eq!(doc.query("#email-error").unwrap().text_content(), "");
        assert!(doc.query("#form-status").unwrap().has_class("success"));
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn test_http_transport_relays_backend_messages() {
        let app = Router::new().route(
            "/api/contact/",
            post(|Json(body): Json<serde_json::Value>| async move {
                if body["email"] == "ada@example.org" {
                    (StatusCode::CREATED, Json(json!({"message": "Thank you for your message!"})))
                } else {
                    (StatusCode::BAD_REQUEST, Json(json!({"message": "Rejected by backend"})))
                }
            }),
        );
        let transport = HttpContactTransport::new(&serve(app).await);

        let sent = submit(&valid(), &transport).await;
        assert_eq!(sent, SubmitOutcome::Sent("Thank you for your message!".into()));

        let other = form("Grace", "grace@example.org", "Un message suffisamment long.");
        let failed = submit(&other, &transport).await;
        assert_eq!(failed, SubmitOutcome::Failed("Rejected by backend".into()));
    }

    #[tokio::test]
    async fn test_http_transport_without_reply_body() {
        let app = Router::new().route(
            "/api/contact/",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let transport = HttpContactTransport::new(&serve(app).await);
        let outcome = submit(&valid(), &transport).await;
        assert_eq!(outcome, SubmitOutcome::Failed(FAILED_MESSAGE.to_string()));
    }
}
