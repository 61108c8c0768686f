//! Notification collaborator: best-effort outbound email on contact creation.
//!
//! The trait boundary never raises; transports convert every failure into a
//! `false` return after logging it, so submission outcomes cannot be altered
//! by mail problems.

use async_trait::async_trait;

use crate::domain::ContactRecord;

pub mod smtp;

pub use smtp::SmtpNotifier;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send the admin notification for a freshly shaped contact record.
    async fn contact_notification(&self, contact: &ContactRecord) -> bool;

    /// Send the thank-you confirmation to the submitter. Composed and
    /// sendable, but not wired into the active submission flow.
    async fn contact_confirmation(&self, contact: &ContactRecord) -> bool;
}

/// In-memory notifiers for tests and doc examples.
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Always succeeds and records the contact ids it was asked to notify.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notified: Mutex<Vec<i32>>,
        pub confirmed: Mutex<Vec<i32>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn contact_notification(&self, contact: &ContactRecord) -> bool {
            self.notified.lock().unwrap().push(contact.id);
            true
        }

        async fn contact_confirmation(&self, contact: &ContactRecord) -> bool {
            self.confirmed.lock().unwrap().push(contact.id);
            true
        }
    }

    /// Simulates a broken transport: every send reports failure.
    #[derive(Default)]
    pub struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn contact_notification(&self, _contact: &ContactRecord) -> bool {
            false
        }

        async fn contact_confirmation(&self, _contact: &ContactRecord) -> bool {
            false
        }
    }
}
