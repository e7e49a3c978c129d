//! Pet management commands (the "Gerenciar Pets" screen and the adoptable
//! listing tab).

use capra_core::{PetId, PetSpecies, SpeciesFilter};
use capra_store::{AdoptionStore, CapraConfig, NewPet};

use super::confirm;

/// List adoptable pets, optionally narrowed to one species tab.
pub fn list(config: CapraConfig, species: SpeciesFilter) {
    let store = AdoptionStore::seeded(config);
    let pets = store.adoptable_pets(species);

    tracing::info!("🏠 Pets para Adoção - Total: {}", pets.len());
    if pets.is_empty() {
        tracing::info!("Ops! Não encontramos pets nesta categoria.");
        return;
    }
    for pet in pets {
        tracing::info!(
            "  [{}] {} {} - {} - 🎂 {} - 📏 Porte {}",
            pet.id,
            pet.image,
            pet.name,
            pet.breed,
            pet.age,
            pet.size
        );
    }
}

/// Register a new pet.
pub fn create(
    config: CapraConfig,
    name: String,
    breed: String,
    age: String,
    size: String,
    species: PetSpecies,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = AdoptionStore::seeded(config);
    let pet = store.create_pet(NewPet {
        name,
        breed,
        age,
        size,
        species,
    })?;

    tracing::info!("Sucesso! Pet cadastrado com sucesso.");
    tracing::info!("  [{}] {} {} - {}", pet.id, pet.image, pet.name, pet.breed);
    Ok(())
}

/// Remove a pet after an explicit confirmation.
pub fn delete(config: CapraConfig, id: &str, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = AdoptionStore::seeded(config);
    let removal = store.remove_pet(&PetId::new(id));

    if yes || confirm("Deseja realmente excluir este pet?")? {
        match removal.confirm() {
            Some(pet) => tracing::info!("Sucesso! Pet excluído: {}", pet.name),
            None => tracing::info!("Nenhum pet encontrado com id {id}"),
        }
    } else {
        removal.cancel();
        tracing::info!("Exclusão cancelada.");
    }
    Ok(())
}
