//! Collaborator traits the HTTP client calls out to.
//!
//! The client owns no UI: user-visible notifications and the redirect to
//! the login surface are injected behind these traits. The defaults log
//! through `tracing` so a headless embedding still records every event.

use async_trait::async_trait;
use tracing::{error, info};

/// Fire-and-forget surface for user-visible error messages.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Navigation to the login surface. `to_login` resolves when the
/// navigation has completed.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn to_login(&self);
}

/// Default notifier: logs the message at error level.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        error!(notice = %message, "api notification");
    }
}

/// Default navigator: records the redirect and resolves immediately.
pub struct LogNavigator;

#[async_trait]
impl Navigator for LogNavigator {
    async fn to_login(&self) {
        info!("redirecting to login");
    }
}
