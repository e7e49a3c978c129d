//! Adoption request records.

use capra_core::{PetId, RequestId, RequestStatus, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Pet, User};

/// A request pairing one pet with one prospective adopter.
///
/// `pet_name`, `user_name` and `user_email` are snapshot fields: copied when
/// the request is opened and never re-synchronized with the pet and user
/// tables. Reads always reflect the snapshot, so a request stays renderable
/// even after the underlying pet or user record changes or disappears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    /// Unique request ID.
    pub id: RequestId,
    /// Pet this request is for.
    pub pet_id: PetId,
    /// Pet display name, snapshotted at creation.
    pub pet_name: String,
    /// Requesting user.
    pub user_id: UserId,
    /// User display name, snapshotted at creation.
    pub user_name: String,
    /// User email, snapshotted at creation.
    pub user_email: String,
    /// Workflow status; always one of the four enumerated values.
    pub status: RequestStatus,
    /// Calendar date the request was made.
    pub request_date: NaiveDate,
    /// Optional free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AdoptionRequest {
    /// Open a request for `pet` by `user`, snapshotting their display fields.
    ///
    /// New requests start out [`RequestStatus::Pending`].
    #[must_use]
    pub fn open(
        id: RequestId,
        pet: &Pet,
        user: &User,
        request_date: NaiveDate,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            pet_id: pet.id.clone(),
            pet_name: pet.name.clone(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            status: RequestStatus::Pending,
            request_date,
            notes,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use capra_core::PetSpecies;

    use super::*;

    fn sample_pet() -> Pet {
        Pet {
            id: PetId::new("1"),
            name: "Rex".to_owned(),
            breed: "Labrador".to_owned(),
            age: "2 anos".to_owned(),
            size: "Grande".to_owned(),
            species: PetSpecies::Dog,
            image: "🐕".to_owned(),
        }
    }

    fn sample_user() -> User {
        User {
            id: UserId::new("2"),
            name: "João Silva".to_owned(),
            email: "joao@example.com".to_owned(),
            avatar: "🧑".to_owned(),
        }
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()
    }

    #[test]
    fn test_open_snapshots_display_fields() {
        let pet = sample_pet();
        let user = sample_user();
        let request = AdoptionRequest::open(RequestId::new("1"), &pet, &user, sample_date(), None);

        assert_eq!(request.pet_name, "Rex");
        assert_eq!(request.user_name, "João Silva");
        assert_eq!(request.user_email, "joao@example.com");
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[test]
    fn test_snapshot_does_not_track_source_record() {
        let mut pet = sample_pet();
        let user = sample_user();
        let request = AdoptionRequest::open(RequestId::new("1"), &pet, &user, sample_date(), None);

        pet.name = "Max".to_owned();
        assert_eq!(request.pet_name, "Rex");
    }

    #[test]
    fn test_serde_uses_camel_case_wire_names() {
        let request = AdoptionRequest::open(
            RequestId::new("1"),
            &sample_pet(),
            &sample_user(),
            sample_date(),
            Some("Tenho quintal".to_owned()),
        );
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["petName"], "Rex");
        assert_eq!(json["userEmail"], "joao@example.com");
        assert_eq!(json["requestDate"], "2025-10-20");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn test_serde_omits_absent_notes() {
        let request =
            AdoptionRequest::open(RequestId::new("1"), &sample_pet(), &sample_user(), sample_date(), None);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("notes").is_none());
    }
}
