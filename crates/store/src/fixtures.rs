//! Seed data the screens boot from.
//!
//! Everything here is process-local mock data: it is loaded at startup and
//! lost on exit. The request fixtures include history records whose pets and
//! users are no longer in the live tables - their snapshot fields carry all
//! a reader needs, which is exactly why those fields are snapshots.

use capra_core::{PetId, PetSpecies, RequestId, RequestStatus, UserId};
use chrono::NaiveDate;

use crate::models::{AdoptionRequest, Pet, User};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The pet table: the admin trio plus the two extra pets from the adoptable
/// listing.
#[must_use]
pub fn pets() -> Vec<Pet> {
    vec![
        Pet {
            id: PetId::new("1"),
            name: "Rex".to_owned(),
            breed: "Golden Retriever".to_owned(),
            age: "3 anos".to_owned(),
            size: "Grande".to_owned(),
            species: PetSpecies::Dog,
            image: "🐕".to_owned(),
        },
        Pet {
            id: PetId::new("2"),
            name: "Mimi".to_owned(),
            breed: "Siamês".to_owned(),
            age: "2 anos".to_owned(),
            size: "Pequeno".to_owned(),
            species: PetSpecies::Cat,
            image: "🐱".to_owned(),
        },
        Pet {
            id: PetId::new("3"),
            name: "Thor".to_owned(),
            breed: "Labrador".to_owned(),
            age: "5 anos".to_owned(),
            size: "Grande".to_owned(),
            species: PetSpecies::Dog,
            image: "🐶".to_owned(),
        },
        Pet {
            id: PetId::new("4"),
            name: "Bela".to_owned(),
            breed: "SRD (Vira-lata)".to_owned(),
            age: "3 anos".to_owned(),
            size: "Médio".to_owned(),
            species: PetSpecies::Dog,
            image: "https://via.placeholder.com/200x200".to_owned(),
        },
        Pet {
            id: PetId::new("5"),
            name: "Félix".to_owned(),
            breed: "Persa".to_owned(),
            age: "6 meses".to_owned(),
            size: "Pequeno".to_owned(),
            species: PetSpecies::Cat,
            image: "https://via.placeholder.com/200x200".to_owned(),
        },
    ]
}

/// The user table.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new("1"),
            name: "Administrador".to_owned(),
            email: "admin@capra.com".to_owned(),
            avatar: "👤".to_owned(),
        },
        User {
            id: UserId::new("2"),
            name: "João Silva".to_owned(),
            email: "joao@example.com".to_owned(),
            avatar: "🧑".to_owned(),
        },
        User {
            id: UserId::new("3"),
            name: "Maria Santos".to_owned(),
            email: "maria@example.com".to_owned(),
            avatar: "👩".to_owned(),
        },
    ]
}

/// The request table: the open requests plus the terminal history records.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn requests() -> Vec<AdoptionRequest> {
    vec![
        AdoptionRequest {
            id: RequestId::new("1"),
            pet_id: PetId::new("1"),
            pet_name: "Rex".to_owned(),
            user_id: UserId::new("2"),
            user_name: "João Silva".to_owned(),
            user_email: "joao@example.com".to_owned(),
            status: RequestStatus::Pending,
            request_date: date(2025, 10, 20),
            notes: Some("Tenho experiência com cachorros grandes".to_owned()),
        },
        AdoptionRequest {
            id: RequestId::new("2"),
            pet_id: PetId::new("2"),
            pet_name: "Mimi".to_owned(),
            user_id: UserId::new("3"),
            user_name: "Maria Santos".to_owned(),
            user_email: "maria@example.com".to_owned(),
            status: RequestStatus::Approved,
            request_date: date(2025, 10, 18),
            notes: Some("Tenho um quintal grande e seguro".to_owned()),
        },
        AdoptionRequest {
            id: RequestId::new("3"),
            pet_id: PetId::new("3"),
            pet_name: "Thor".to_owned(),
            user_id: UserId::new("2"),
            user_name: "João Silva".to_owned(),
            user_email: "joao@example.com".to_owned(),
            status: RequestStatus::Completed,
            request_date: date(2025, 10, 15),
            notes: Some("Adoção concluída com sucesso".to_owned()),
        },
        AdoptionRequest {
            id: RequestId::new("101"),
            pet_id: PetId::new("10"),
            pet_name: "Bella".to_owned(),
            user_id: UserId::new("5"),
            user_name: "Ana Paula".to_owned(),
            user_email: "ana@example.com".to_owned(),
            status: RequestStatus::Completed,
            request_date: date(2025, 10, 10),
            notes: Some("Adoção realizada com sucesso. Pet adaptado ao novo lar.".to_owned()),
        },
        AdoptionRequest {
            id: RequestId::new("102"),
            pet_id: PetId::new("11"),
            pet_name: "Max".to_owned(),
            user_id: UserId::new("6"),
            user_name: "Pedro Santos".to_owned(),
            user_email: "pedro@example.com".to_owned(),
            status: RequestStatus::Completed,
            request_date: date(2025, 9, 25),
            notes: Some("Família com experiência em cachorros de grande porte.".to_owned()),
        },
        AdoptionRequest {
            id: RequestId::new("103"),
            pet_id: PetId::new("12"),
            pet_name: "Luna".to_owned(),
            user_id: UserId::new("7"),
            user_name: "Carla Oliveira".to_owned(),
            user_email: "carla@example.com".to_owned(),
            status: RequestStatus::Completed,
            request_date: date(2025, 9, 15),
            notes: Some("Adoção concluída. Pet está se adaptando bem.".to_owned()),
        },
        AdoptionRequest {
            id: RequestId::new("104"),
            pet_id: PetId::new("13"),
            pet_name: "Zeus".to_owned(),
            user_id: UserId::new("8"),
            user_name: "Roberto Lima".to_owned(),
            user_email: "roberto@example.com".to_owned(),
            status: RequestStatus::Rejected,
            request_date: date(2025, 9, 10),
            notes: Some("Solicitação rejeitada - não possuía condições adequadas.".to_owned()),
        },
        AdoptionRequest {
            id: RequestId::new("105"),
            pet_id: PetId::new("14"),
            pet_name: "Mel".to_owned(),
            user_id: UserId::new("9"),
            user_name: "Julia Costa".to_owned(),
            user_email: "julia@example.com".to_owned(),
            status: RequestStatus::Completed,
            request_date: date(2025, 8, 30),
            notes: Some("Família amorosa. Pet está muito feliz no novo lar.".to_owned()),
        },
    ]
}
