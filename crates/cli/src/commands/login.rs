//! Simulated login command.

use std::io::{self, BufRead, Write};

use secrecy::SecretString;

use capra_store::simulate_login;

/// Prompt for the password and run the simulated login.
pub async fn run(email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let password = prompt_password()?;
    let greeting = simulate_login(email, &password).await?;

    tracing::info!("Login realizado! 🎉");
    for line in greeting.lines() {
        tracing::info!("{line}");
    }
    Ok(())
}

/// Read the password from the terminal, wrapped immediately.
fn prompt_password() -> io::Result<SecretString> {
    let mut stderr = io::stderr();
    write!(stderr, "Senha: ")?;
    stderr.flush()?;

    let mut password = String::new();
    io::stdin().lock().read_line(&mut password)?;
    Ok(SecretString::from(
        password.trim_end_matches(['\r', '\n']).to_owned(),
    ))
}
