//! Donation catalog shown on the donations tab.
//!
//! The catalog is fixed product configuration, not admin-managed data, so it
//! lives outside the mutable store collections.

use capra_core::{Amount, DonationId};
use serde::{Deserialize, Serialize};

/// PIX key advertised for direct donations.
pub const PIX_KEY: &str = "capra@example.com";

/// How often a donation repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationCadence {
    /// A single contribution.
    OneTime,
    /// A recurring monthly sponsorship.
    Monthly,
}

impl DonationCadence {
    /// Card label fragment (pt-BR).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneTime => "Única",
            Self::Monthly => "Mensal",
        }
    }
}

/// One donation card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationOption {
    /// Catalog entry ID.
    pub id: DonationId,
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Donation value.
    pub value: Amount,
    /// One-time or monthly.
    pub cadence: DonationCadence,
}

/// The fixed donation catalog.
#[must_use]
pub fn donation_catalog() -> Vec<DonationOption> {
    vec![
        DonationOption {
            id: DonationId::new("1"),
            title: "Doação Única R$50,00".to_owned(),
            description: "Ajude com ração e cuidados veterinários básicos para nossos peludinhos."
                .to_owned(),
            value: Amount::from_centavos(5000),
            cadence: DonationCadence::OneTime,
        },
        DonationOption {
            id: DonationId::new("2"),
            title: "Doação Única R$100,00".to_owned(),
            description: "Contribua com medicamentos e tratamentos especiais.".to_owned(),
            value: Amount::from_centavos(10000),
            cadence: DonationCadence::OneTime,
        },
        DonationOption {
            id: DonationId::new("3"),
            title: "Doação Mensal R$30,00".to_owned(),
            description: "Seja um padrinho/madrinha e ajude mensalmente.".to_owned(),
            value: Amount::from_centavos(3000),
            cadence: DonationCadence::Monthly,
        },
    ]
}
