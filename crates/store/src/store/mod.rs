//! The authoritative in-memory store consumed by every screen.
//!
//! One `AdoptionStore` value is built at startup and handed to each consumer
//! (screens hold only transient selection state of their own). All writes run
//! to completion inside one UI event; there is no suspension point between
//! two user actions, so no partial update is ever observable.

pub mod pets;
pub mod requests;
pub mod users;

pub use pets::PetRemoval;
pub use requests::filter_by_status;
pub use users::UserRemoval;

use crate::config::CapraConfig;
use crate::fixtures;
use crate::models::{AdoptionRequest, Pet, User};

/// The single in-memory holder of pets, users and adoption requests.
#[derive(Debug, Clone)]
pub struct AdoptionStore {
    config: CapraConfig,
    pets: Vec<Pet>,
    users: Vec<User>,
    requests: Vec<AdoptionRequest>,
}

impl AdoptionStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new(config: CapraConfig) -> Self {
        Self {
            config,
            pets: Vec::new(),
            users: Vec::new(),
            requests: Vec::new(),
        }
    }

    /// Create a store pre-loaded with the seed fixtures every screen boots
    /// from.
    #[must_use]
    pub fn seeded(config: CapraConfig) -> Self {
        Self::with_data(
            config,
            fixtures::pets(),
            fixtures::users(),
            fixtures::requests(),
        )
    }

    /// Create a store over explicit collections.
    #[must_use]
    pub const fn with_data(
        config: CapraConfig,
        pets: Vec<Pet>,
        users: Vec<User>,
        requests: Vec<AdoptionRequest>,
    ) -> Self {
        Self {
            config,
            pets,
            users,
            requests,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CapraConfig {
        &self.config
    }

    /// Current snapshot of the pet collection, in insertion order.
    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Current snapshot of the user collection, in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Current snapshot of the request collection, in insertion order.
    #[must_use]
    pub fn requests(&self) -> &[AdoptionRequest] {
        &self.requests
    }

    pub(crate) fn pets_mut(&mut self) -> &mut Vec<Pet> {
        &mut self.pets
    }

    pub(crate) fn users_mut(&mut self) -> &mut Vec<User> {
        &mut self.users
    }

    pub(crate) fn requests_mut(&mut self) -> &mut Vec<AdoptionRequest> {
        &mut self.requests
    }
}
