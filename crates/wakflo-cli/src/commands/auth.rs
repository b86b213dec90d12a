//! `wakflo auth`: log in and out through the configured authenticator.

use tracing::instrument;

use wakflo_core::application::ports::Authenticator;

use crate::{cli::AuthCommands, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(
    cmd: AuthCommands,
    auth: &dyn Authenticator,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        AuthCommands::Login => {
            auth.login()?;
            output.success("Logged in successfully!")?;
        }
        AuthCommands::Logout => {
            auth.logout()?;
            output.success("Logged out successfully!")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::OutputFormat, output::tests::make_manager};
    use wakflo_adapters::NoopAuthenticator;

    #[test]
    fn login_and_logout_succeed_without_a_session() {
        let auth = NoopAuthenticator::new();
        let output = make_manager(true, OutputFormat::Plain);

        execute(AuthCommands::Login, &auth, &output).unwrap();
        assert!(!auth.is_authenticated());
        execute(AuthCommands::Logout, &auth, &output).unwrap();
        assert_eq!(auth.current_token(), None);
    }
}
