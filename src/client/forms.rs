//! Contact forms with simulated submission
//!
//! Validation only checks that required fields are non-empty. Sending is a
//! fixed delay; nothing leaves the page.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use super::notify::{NotificationKind, Notifier};
use crate::logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// `#contactForm`
    Contact,
    /// `#secureContactForm`
    SecureContact,
}

impl FormKind {
    /// Required fields, in the order they are checked
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Contact => &["name", "email", "message"],
            Self::SecureContact => &["name", "email", "subject", "message", "service"],
        }
    }

    pub const fn sending_label(self) -> &'static str {
        match self {
            Self::Contact => r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#,
            Self::SecureContact => {
                r#"<i class="fas fa-spinner fa-spin"></i> Encrypting & Sending..."#
            }
        }
    }

    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Contact => "Message sent successfully!",
            Self::SecureContact => {
                "Secure message sent! You will receive a response within 24 hours."
            }
        }
    }

    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Contact => "Failed to send message. Please try again.",
            Self::SecureContact => "Secure transmission failed. Please try again.",
        }
    }

    /// Latency the simulated send waits for
    pub const fn simulated_delay(self) -> Duration {
        match self {
            Self::Contact => Duration::from_millis(1_500),
            Self::SecureContact => Duration::from_millis(2_000),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Where a validated form is sent
pub trait SubmitTransport {
    fn send(
        &self,
        fields: &BTreeMap<String, String>,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// Waits a fixed delay and reports success
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn for_form(kind: FormKind) -> Self {
        Self::new(kind.simulated_delay())
    }
}

impl SubmitTransport for SimulatedTransport {
    fn send(
        &self,
        fields: &BTreeMap<String, String>,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        let delay = self.delay;
        let field_names: Vec<String> = fields.keys().cloned().collect();
        async move {
            tokio::time::sleep(delay).await;
            logger::write_info(&format!("[Form] Submitted fields: {field_names:?}"));
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was empty; nothing was sent
    Invalid,
    Sent,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    kind: FormKind,
    fields: BTreeMap<String, String>,
    idle_label: String,
    button: SubmitButton,
}

impl ContactForm {
    pub fn new(kind: FormKind, button_label: impl Into<String>) -> Self {
        let idle_label = button_label.into();
        Self {
            kind,
            fields: BTreeMap::new(),
            button: SubmitButton {
                label: idle_label.clone(),
                disabled: false,
            },
            idle_label,
        }
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub const fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Message for the first problem found, if any
    pub fn validate(&self) -> Result<(), String> {
        let missing = self
            .kind
            .required_fields()
            .iter()
            .find(|name| self.field(name).is_none_or(str::is_empty));

        match (missing, self.kind) {
            (None, _) => Ok(()),
            (Some(_), FormKind::Contact) => Err("Please fill all required fields".to_string()),
            (Some(name), FormKind::SecureContact) => Err(format!("Please fill the {name} field")),
        }
    }

    /// Disable the button and show the sending label
    fn begin_submit(&mut self) {
        self.button.label = self.kind.sending_label().to_string();
        self.button.disabled = true;
    }

    /// Restore the button whatever the outcome
    fn finish_submit(&mut self) {
        self.button.label.clone_from(&self.idle_label);
        self.button.disabled = false;
    }

    /// Validate, send, then report through a toast
    pub async fn submit<T: SubmitTransport>(
        &mut self,
        transport: &T,
        notifier: &Notifier,
    ) -> SubmitOutcome {
        if let Err(message) = self.validate() {
            notifier.show(message, NotificationKind::Error);
            return SubmitOutcome::Invalid;
        }

        self.begin_submit();
        let result = transport.send(&self.fields).await;

        let outcome = match result {
            Ok(()) => {
                notifier.show(self.kind.success_message(), NotificationKind::Success);
                self.fields.clear();
                SubmitOutcome::Sent
            }
            Err(e) => {
                logger::log_warning(&format!("Form submission failed: {e}"));
                notifier.show(self.kind.failure_message(), NotificationKind::Error);
                SubmitOutcome::Failed
            }
        };

        self.finish_submit();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn filled(kind: FormKind) -> ContactForm {
        let mut form = ContactForm::new(kind, "Send Message");
        for name in kind.required_fields() {
            form.set_field(name, format!("{name} value"));
        }
        form
    }

    /// Records how many fields each send carried
    struct ProbeTransport {
        fail: bool,
        seen: Arc<Mutex<Vec<usize>>>,
    }

    impl SubmitTransport for ProbeTransport {
        fn send(
            &self,
            fields: &BTreeMap<String, String>,
        ) -> impl Future<Output = Result<(), SubmitError>> + Send {
            self.seen.lock().unwrap().push(fields.len());
            let fail = self.fail;
            async move {
                if fail {
                    Err(SubmitError::Rejected("server busy".to_string()))
                } else {
                    Ok(())
                }
            }
        }
    }

    #[test]
    fn test_contact_validation_message() {
        let mut form = filled(FormKind::Contact);
        assert!(form.validate().is_ok());
        form.set_field("email", "");
        assert_eq!(
            form.validate().unwrap_err(),
            "Please fill all required fields"
        );
    }

    #[test]
    fn test_secure_validation_reports_first_missing_in_order() {
        let mut form = ContactForm::new(FormKind::SecureContact, "Send");
        form.set_field("name", "Ana");
        form.set_field("service", "audit");
        assert_eq!(form.validate().unwrap_err(), "Please fill the email field");

        form.set_field("email", "ana@example.com");
        assert_eq!(form.validate().unwrap_err(), "Please fill the subject field");
    }

    #[test]
    fn test_begin_and_finish_toggle_button() {
        let mut form = filled(FormKind::SecureContact);
        form.begin_submit();
        assert!(form.button().disabled);
        assert!(form.button().label.contains("Encrypting & Sending..."));
        form.finish_submit();
        assert_eq!(
            form.button(),
            &SubmitButton {
                label: "Send Message".to_string(),
                disabled: false,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submit_success() {
        let notifier = Notifier::new();
        let mut form = filled(FormKind::Contact);
        let transport = SimulatedTransport::for_form(FormKind::Contact);

        let started = tokio::time::Instant::now();
        let outcome = form.submit(&transport, &notifier).await;
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(started.elapsed() >= Duration::from_millis(1_500));

        let toast = notifier.current().unwrap();
        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.message, "Message sent successfully!");
        assert_eq!(form.field("name"), None);
        assert!(!form.button().disabled);
    }

    #[tokio::test]
    async fn test_invalid_form_not_sent() {
        let notifier = Notifier::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let transport = ProbeTransport {
            fail: false,
            seen: Arc::clone(&seen),
        };
        let mut form = ContactForm::new(FormKind::SecureContact, "Send");

        let outcome = form.submit(&transport, &notifier).await;
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(
            notifier.current().unwrap().message,
            "Please fill the name field"
        );
    }

    #[tokio::test]
    async fn test_failed_send_restores_button_and_keeps_fields() {
        let notifier = Notifier::new();
        let transport = ProbeTransport {
            fail: true,
            seen: Arc::new(Mutex::new(Vec::new())),
        };
        let mut form = filled(FormKind::SecureContact);

        let outcome = form.submit(&transport, &notifier).await;
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(
            notifier.current().unwrap().message,
            "Secure transmission failed. Please try again."
        );
        assert!(!form.button().disabled);
        assert_eq!(form.button().label, "Send Message");
        assert_eq!(form.field("subject"), Some("subject value"));
    }
}
