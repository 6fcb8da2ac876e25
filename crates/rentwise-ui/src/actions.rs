//! User-triggered backend actions and how their outcome is reported.
//!
//! # Design
//! - The backend is an opaque collaborator: only success or failure is
//!   observed, never a payload.
//! - Every outcome ends in exactly one toast. Failures are not retried.

use async_trait::async_trait;
use rentwise_validation::validate_email;
use thiserror::Error;
use tracing::{info, warn};

use crate::i18n::TranslationBundle;
use crate::toast::{ToastKind, ToastQueue};

/// Errors reported by the backend collaborator.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request never produced a response.
    #[error("backend request failed")]
    Request {
        /// Operation identifier.
        operation: &'static str,
        /// Transport detail.
        detail: String,
    },
    /// Backend answered with a non-success status.
    #[error("backend rejected the request")]
    Rejected {
        /// Operation identifier.
        operation: &'static str,
        /// Status code returned.
        status: u16,
    },
}

/// Account and payment operations performed by the hosted backend.
#[async_trait(?Send)]
pub trait AccountBackend {
    /// Ask the backend to resend the verification email for `email`.
    async fn resend_verification(&self, email: &str) -> Result<(), BackendError>;

    /// Ask the backend to sweep households for overdue payments.
    async fn trigger_overdue_sweep(&self) -> Result<(), BackendError>;
}

/// Result of a user-triggered action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Backend accepted the request.
    Completed,
    /// Input was rejected locally; the backend was not called.
    Invalid,
    /// Backend call failed.
    Failed,
}

/// Resend the verification email after checking the address locally.
pub async fn resend_verification<B>(
    backend: &B,
    email: &str,
    bundle: &TranslationBundle,
    toasts: &mut ToastQueue,
) -> ActionOutcome
where
    B: AccountBackend + ?Sized,
{
    let email = email.trim();
    if !validate_email(email) {
        toasts.push(
            ToastKind::Error,
            bundle.text("validation.invalid_email", "Please enter a valid email address"),
        );
        return ActionOutcome::Invalid;
    }
    match backend.resend_verification(email).await {
        Ok(()) => {
            info!("verification email resent");
            toasts.push(
                ToastKind::Success,
                bundle.text("toast.verification_sent", "Verification email sent"),
            );
            ActionOutcome::Completed
        }
        Err(err) => {
            warn!(error = ?err, "verification resend failed");
            toasts.push(
                ToastKind::Error,
                bundle.text(
                    "toast.verification_failed",
                    "Could not send the verification email",
                ),
            );
            ActionOutcome::Failed
        }
    }
}

/// Start a server-side overdue payment sweep.
pub async fn trigger_overdue_sweep<B>(
    backend: &B,
    bundle: &TranslationBundle,
    toasts: &mut ToastQueue,
) -> ActionOutcome
where
    B: AccountBackend + ?Sized,
{
    match backend.trigger_overdue_sweep().await {
        Ok(()) => {
            info!("overdue payment sweep triggered");
            toasts.push(
                ToastKind::Success,
                bundle.text("toast.overdue_triggered", "Overdue payment check started"),
            );
            ActionOutcome::Completed
        }
        Err(err) => {
            warn!(error = ?err, "overdue payment sweep failed");
            toasts.push(
                ToastKind::Error,
                bundle.text(
                    "toast.overdue_failed",
                    "Could not start the overdue payment check",
                ),
            );
            ActionOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingBackend {
        fail_with: Option<u16>,
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl AccountBackend for RecordingBackend {
        async fn resend_verification(&self, email: &str) -> Result<(), BackendError> {
            self.calls.borrow_mut().push(format!("resend:{email}"));
            self.outcome("resend_verification")
        }

        async fn trigger_overdue_sweep(&self) -> Result<(), BackendError> {
            self.calls.borrow_mut().push("sweep".to_string());
            self.outcome("trigger_overdue_sweep")
        }
    }

    impl RecordingBackend {
        fn failing(status: u16) -> Self {
            Self {
                fail_with: Some(status),
                calls: RefCell::default(),
            }
        }

        fn outcome(&self, operation: &'static str) -> Result<(), BackendError> {
            match self.fail_with {
                Some(status) => Err(BackendError::Rejected { operation, status }),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn resend_trims_email_and_reports_success() {
        let backend = RecordingBackend::default();
        let bundle = TranslationBundle::new(LocaleCode::En);
        let mut toasts = ToastQueue::new();

        let outcome =
            resend_verification(&backend, "  sam@example.com ", &bundle, &mut toasts).await;

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(*backend.calls.borrow(), ["resend:sam@example.com"]);
        let toast = toasts.latest().expect("toast");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Verification email sent");
    }

    #[tokio::test]
    async fn resend_rejects_invalid_email_without_calling_backend() {
        let backend = RecordingBackend::default();
        let bundle = TranslationBundle::new(LocaleCode::En);
        let mut toasts = ToastQueue::new();

        let outcome = resend_verification(&backend, "sam", &bundle, &mut toasts).await;

        assert_eq!(outcome, ActionOutcome::Invalid);
        assert!(backend.calls.borrow().is_empty());
        assert_eq!(toasts.latest().map(|toast| toast.kind), Some(ToastKind::Error));
    }

    #[tokio::test]
    async fn failures_are_reported_once_and_not_retried() {
        let backend = RecordingBackend::failing(503);
        let bundle = TranslationBundle::new(LocaleCode::Es);
        let mut toasts = ToastQueue::new();

        let outcome = trigger_overdue_sweep(&backend, &bundle, &mut toasts).await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(backend.calls.borrow().len(), 1);
        assert_eq!(toasts.toasts().len(), 1);
        assert_eq!(
            toasts.latest().map(|toast| toast.message.as_str()),
            Some("No se pudo iniciar la revisión de pagos atrasados")
        );
    }

    #[tokio::test]
    async fn sweep_success_uses_localised_message() {
        let backend = RecordingBackend::default();
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        let mut toasts = ToastQueue::new();

        let outcome = trigger_overdue_sweep(&backend, &bundle, &mut toasts).await;

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(
            toasts.latest().map(|toast| toast.message.as_str()),
            Some("Vérification des paiements en retard lancée")
        );
    }
}
