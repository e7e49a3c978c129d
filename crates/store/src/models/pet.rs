//! Adoptable pet records.

use capra_core::{PetId, PetSpecies};
use serde::{Deserialize, Serialize};

/// Size label preselected by the registration form.
const DEFAULT_SIZE: &str = "Médio";

/// A pet available for adoption.
///
/// `size` is free text ("Pequeno", "Médio", "Grande" in practice), not a
/// closed enum. `image` holds either an emoji glyph or a placeholder URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique pet ID.
    pub id: PetId,
    /// Display name.
    pub name: String,
    /// Breed, free text.
    pub breed: String,
    /// Age, free text ("3 anos", "6 meses").
    pub age: String,
    /// Size category, free text.
    pub size: String,
    /// Species (serialized as `type`, the historical wire name).
    #[serde(rename = "type")]
    pub species: PetSpecies,
    /// Emoji glyph or placeholder image URL.
    pub image: String,
}

/// Input for registering a pet through the admin panel.
#[derive(Debug, Clone, Default)]
pub struct NewPet {
    /// Display name (required).
    pub name: String,
    /// Breed (required).
    pub breed: String,
    /// Age, free text (required).
    pub age: String,
    /// Size category; blank falls back to the form default "Médio".
    pub size: String,
    /// Species; decides the default card glyph.
    pub species: PetSpecies,
}

impl NewPet {
    /// Whether any required field is empty or whitespace-only.
    #[must_use]
    pub fn has_blank_required_field(&self) -> bool {
        self.name.trim().is_empty()
            || self.breed.trim().is_empty()
            || self.age.trim().is_empty()
    }
}

impl Pet {
    /// Build a pet record from validated registration input.
    ///
    /// Assigns a fresh clock-derived id and the species default glyph.
    pub(crate) fn register(new: NewPet) -> Self {
        let size = if new.size.trim().is_empty() {
            DEFAULT_SIZE.to_owned()
        } else {
            new.size
        };

        Self {
            id: PetId::generate(),
            name: new.name,
            breed: new.breed,
            age: new.age,
            size,
            species: new.species,
            image: new.species.default_glyph().to_owned(),
        }
    }
}
