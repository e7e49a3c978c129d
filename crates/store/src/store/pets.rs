//! Pet management operations (the admin "Gerenciar Pets" screen and the
//! adoptable listing tab).

use capra_core::{PetId, SpeciesFilter};

use super::AdoptionStore;
use crate::error::StoreError;
use crate::models::{NewPet, Pet};

impl AdoptionStore {
    /// Register a new pet.
    ///
    /// Blank `name`, `breed` or `age` fails validation and leaves the
    /// collection untouched. On success exactly one pet is appended, with a
    /// fresh clock-derived id and the species default glyph, and returned so
    /// the caller can surface its confirmation message.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRequiredFields`] when a required field
    /// is empty or whitespace-only.
    pub fn create_pet(&mut self, new_pet: NewPet) -> Result<Pet, StoreError> {
        if new_pet.has_blank_required_field() {
            tracing::warn!("pet registration rejected: blank required field");
            return Err(StoreError::MissingRequiredFields);
        }

        let pet = Pet::register(new_pet);
        tracing::info!(id = %pet.id, name = %pet.name, "pet registered");
        self.pets_mut().push(pet.clone());
        Ok(pet)
    }

    /// Begin removing a pet.
    ///
    /// Removal is two-phase: nothing is mutated until
    /// [`PetRemoval::confirm`] is called, and dropping the guard (the cancel
    /// path of the confirmation dialog) leaves the collection untouched.
    pub fn remove_pet(&mut self, id: &PetId) -> PetRemoval<'_> {
        PetRemoval {
            store: self,
            id: id.clone(),
        }
    }

    /// The adoptable-pet listing, optionally narrowed to one species tab.
    ///
    /// Pure read; order is preserved.
    #[must_use]
    pub fn adoptable_pets(&self, filter: SpeciesFilter) -> Vec<&Pet> {
        self.pets()
            .iter()
            .filter(|pet| filter.matches(pet.species))
            .collect()
    }
}

/// A pet removal awaiting confirmation.
#[must_use = "dropping the guard cancels the removal"]
pub struct PetRemoval<'s> {
    store: &'s mut AdoptionStore,
    id: PetId,
}

impl PetRemoval<'_> {
    /// Complete the removal.
    ///
    /// Returns the removed pet, or `None` when the id matched nothing - the
    /// collection is left as-is and no error is raised.
    pub fn confirm(self) -> Option<Pet> {
        let index = self
            .store
            .pets()
            .iter()
            .position(|pet| pet.id == self.id)?;
        let pet = self.store.pets_mut().remove(index);
        tracing::info!(id = %pet.id, name = %pet.name, "pet removed");
        Some(pet)
    }

    /// Abandon the removal, leaving the collection untouched.
    pub fn cancel(self) {
        tracing::debug!(id = %self.id, "pet removal cancelled");
    }
}
