//! CAPRA Store - the in-memory domain model behind every screen.
//!
//! Holds the authoritative collections of pets, users and adoption requests,
//! plus the read views the tab and admin screens render: status filtering,
//! the month-grouped history timeline, the adoptable listing and the donation
//! catalog. Data lives in memory only, seeded from fixtures at startup and
//! lost on process exit - there is no persistence layer and no network.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration (strict transition opt-in)
//! - [`error`] - Store error taxonomy
//! - [`fixtures`] - Seed data the screens boot from
//! - [`history`] - Month grouping for the history view
//! - [`login`] - Simulated login flow
//! - [`models`] - Domain records
//! - [`store`] - The [`AdoptionStore`] itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod history;
pub mod login;
pub mod models;
pub mod store;

pub use config::{CapraConfig, ConfigError};
pub use error::StoreError;
pub use history::{HistoryStats, MonthGroup, group_by_month, month_label};
pub use login::{LOGIN_DELAY, LoginError, simulate_login};
pub use models::{
    AdoptionRequest, DonationCadence, DonationOption, NewPet, NewUser, PIX_KEY, Pet, User,
    donation_catalog,
};
pub use store::{AdoptionStore, PetRemoval, UserRemoval, filter_by_status};
