//! Integration tests for CAPRA.
//!
//! These tests exercise the public store API end to end, the way the screens
//! drive it: seed the fixtures, run operations, read the derived views back.
//! Everything is in-memory, so no external services are required.
//!
//! Run with: `cargo test -p capra-integration-tests`
//!
//! # Test Categories
//!
//! - `admin_pets` - Pet registration and removal
//! - `admin_users` - User creation and removal
//! - `admin_requests` - Status workflow and filtering
//! - `adoption_history` - Terminal-state views and month grouping
//! - `login_flow` - Simulated login and the two validation tiers

#![cfg_attr(not(test), forbid(unsafe_code))]

use capra_core::PetSpecies;
use capra_store::{AdoptionStore, CapraConfig, NewPet, NewUser};

/// A store seeded with the standard fixtures and permissive transitions.
#[must_use]
pub fn seeded_store() -> AdoptionStore {
    AdoptionStore::seeded(CapraConfig::default())
}

/// A store seeded with the standard fixtures and the strict transition table.
#[must_use]
pub fn strict_store() -> AdoptionStore {
    AdoptionStore::seeded(CapraConfig::strict())
}

/// A valid pet-registration input.
#[must_use]
pub fn sample_pet_input() -> NewPet {
    NewPet {
        name: "Rex".to_owned(),
        breed: "Labrador".to_owned(),
        age: "2 anos".to_owned(),
        size: "Grande".to_owned(),
        species: PetSpecies::Dog,
    }
}

/// A valid user-creation input.
#[must_use]
pub fn sample_user_input() -> NewUser {
    NewUser {
        name: "Ana Paula".to_owned(),
        email: "ana@example.com".to_owned(),
    }
}
