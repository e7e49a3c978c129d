//! User management operations (the admin "Gerenciar Usuários" screen).

use capra_core::UserId;

use super::AdoptionStore;
use crate::error::StoreError;
use crate::models::{NewUser, User};

impl AdoptionStore {
    /// Create a new user account.
    ///
    /// Blank `name` or `email` fails validation and leaves the collection
    /// untouched. The email is NOT format-checked here - that stricter tier
    /// belongs to the login flow only. On success exactly one user is
    /// appended, with a fresh clock-derived id and the default avatar.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingFields`] when a field is empty or
    /// whitespace-only.
    pub fn create_user(&mut self, new_user: NewUser) -> Result<User, StoreError> {
        if new_user.has_blank_field() {
            tracing::warn!("user creation rejected: blank field");
            return Err(StoreError::MissingFields);
        }

        let user = User::register(new_user);
        tracing::info!(id = %user.id, name = %user.name, "user created");
        self.users_mut().push(user.clone());
        Ok(user)
    }

    /// Begin removing a user.
    ///
    /// Removal is two-phase: nothing is mutated until
    /// [`UserRemoval::confirm`] is called, and dropping the guard (the
    /// cancel path of the confirmation dialog) leaves the collection
    /// untouched. Requests that snapshotted this user keep their copies.
    pub fn remove_user(&mut self, id: &UserId) -> UserRemoval<'_> {
        UserRemoval {
            store: self,
            id: id.clone(),
        }
    }
}

/// A user removal awaiting confirmation.
#[must_use = "dropping the guard cancels the removal"]
pub struct UserRemoval<'s> {
    store: &'s mut AdoptionStore,
    id: UserId,
}

impl UserRemoval<'_> {
    /// Complete the removal.
    ///
    /// Returns the removed user, or `None` when the id matched nothing - the
    /// collection is left as-is and no error is raised.
    pub fn confirm(self) -> Option<User> {
        let index = self
            .store
            .users()
            .iter()
            .position(|user| user.id == self.id)?;
        let user = self.store.users_mut().remove(index);
        tracing::info!(id = %user.id, name = %user.name, "user removed");
        Some(user)
    }

    /// Abandon the removal, leaving the collection untouched.
    pub fn cancel(self) {
        tracing::debug!(id = %self.id, "user removal cancelled");
    }
}
