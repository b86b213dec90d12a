//! Authenticator that does nothing.

use tracing::debug;
use wakflo_core::{application::ports::Authenticator, error::WakfloResult};

/// Placeholder until the backend exposes a login flow.
///
/// `login` and `logout` always succeed and store nothing; the session is
/// never authenticated and there is never a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuthenticator;

impl NoopAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

impl Authenticator for NoopAuthenticator {
    fn login(&self) -> WakfloResult<()> {
        debug!("login requested, nothing to do");
        Ok(())
    }

    fn logout(&self) -> WakfloResult<()> {
        debug!("logout requested, nothing to do");
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        false
    }

    fn current_token(&self) -> Option<String> {
        None
    }
}
