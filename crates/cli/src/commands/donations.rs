//! Donations command (the "Doar" tab).

use capra_store::{PIX_KEY, donation_catalog};

/// Show the donation catalog and the PIX key.
pub fn run() {
    tracing::info!("Doe para Nossos Peludinhos");
    tracing::info!("Ajude com doações para garantir conforto e cuidado.");

    for option in donation_catalog() {
        tracing::info!("  {} - {}", option.title, option.description);
    }

    tracing::info!("Ou doe via PIX: {PIX_KEY}");
}
