//! Simulated login flow.
//!
//! There is no authentication backend: credentials are checked for shape
//! only, an artificial delay stands in for the API round-trip, and success is
//! a static greeting. The email check here is stricter than user
//! registration, which accepts any non-blank text; the two tiers are
//! intentionally distinct.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use capra_core::{Email, EmailError};

/// Artificial pause standing in for the login API call.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Errors reported by the login form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Email or password is blank.
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,

    /// The email failed the structural check.
    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail(#[source] EmailError),
}

/// Validate credentials, wait out the simulated API delay and greet the user.
///
/// The blank check trims; the structural check runs on the input as typed,
/// so stray whitespace around an otherwise valid address is rejected. The
/// password is never inspected beyond the blank check - there is no backend
/// to verify it against.
///
/// # Errors
///
/// Returns [`LoginError::MissingFields`] when either field is blank and
/// [`LoginError::InvalidEmail`] when the email fails the structural check.
pub async fn simulate_login(email: &str, password: &SecretString) -> Result<String, LoginError> {
    if email.trim().is_empty() || password.expose_secret().trim().is_empty() {
        return Err(LoginError::MissingFields);
    }

    let email = Email::parse(email).map_err(LoginError::InvalidEmail)?;

    // Simulated API round-trip.
    tokio::time::sleep(LOGIN_DELAY).await;

    tracing::info!(email = %email, "login simulated");
    Ok(format!(
        "Bem-vindo(a), {email}!\nVocê agora pode gerenciar adoções e doações."
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn password(value: &str) -> SecretString {
        SecretString::from(value.to_owned())
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_fields_are_rejected() {
        let err = simulate_login("", &password("segredo")).await.unwrap_err();
        assert_eq!(err, LoginError::MissingFields);

        let err = simulate_login("admin@capra.com", &password("   "))
            .await
            .unwrap_err();
        assert_eq!(err, LoginError::MissingFields);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_email_is_rejected() {
        let err = simulate_login("admin@capra", &password("segredo"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::InvalidEmail(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_email_is_checked_as_typed() {
        // Trailing space passes the blank check but fails the structural one.
        let err = simulate_login("admin@capra.com ", &password("segredo"))
            .await
            .unwrap_err();
        assert_eq!(err, LoginError::InvalidEmail(EmailError::Whitespace));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_greets_by_email() {
        let greeting = simulate_login("admin@capra.com", &password("segredo"))
            .await
            .unwrap();
        assert!(greeting.starts_with("Bem-vindo(a), admin@capra.com!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_runs_before_success() {
        let started = tokio::time::Instant::now();
        simulate_login("admin@capra.com", &password("segredo"))
            .await
            .unwrap();
        assert!(started.elapsed() >= LOGIN_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_fails_without_waiting() {
        let started = tokio::time::Instant::now();
        let _ = simulate_login("", &password("segredo")).await;
        assert!(started.elapsed() < LOGIN_DELAY);
    }
}
