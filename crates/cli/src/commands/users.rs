//! User management commands (the "Gerenciar Usuários" screen).

use capra_core::UserId;
use capra_store::{AdoptionStore, CapraConfig, NewUser};

use super::confirm;

/// List user accounts.
pub fn list(config: CapraConfig) {
    let store = AdoptionStore::seeded(config);
    let users = store.users();

    tracing::info!("👥 Gerenciar Usuários - Total: {}", users.len());
    for user in users {
        tracing::info!("  [{}] {} {} - {}", user.id, user.avatar, user.name, user.email);
    }
}

/// Create a new user account.
pub fn create(
    config: CapraConfig,
    name: String,
    email: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = AdoptionStore::seeded(config);
    let user = store.create_user(NewUser { name, email })?;

    tracing::info!("Sucesso! Usuário criado com sucesso.");
    tracing::info!("  [{}] {} {} - {}", user.id, user.avatar, user.name, user.email);
    Ok(())
}

/// Remove a user after an explicit confirmation.
pub fn delete(config: CapraConfig, id: &str, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = AdoptionStore::seeded(config);
    let removal = store.remove_user(&UserId::new(id));

    if yes || confirm("Deseja realmente excluir este usuário?")? {
        match removal.confirm() {
            Some(user) => tracing::info!("Sucesso! Usuário excluído: {}", user.name),
            None => tracing::info!("Nenhum usuário encontrado com id {id}"),
        }
    } else {
        removal.cancel();
        tracing::info!("Exclusão cancelada.");
    }
    Ok(())
}
