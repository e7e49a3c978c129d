//! Integration tests for the adoption request workflow.
//!
//! Drives the store the way the "Solicitações de Adoção" screen does:
//! filter tabs, the detail view and the status action buttons.

#![allow(clippy::unwrap_used)]

use capra_core::{RequestId, RequestStatus, StatusFilter};
use capra_store::StoreError;

use capra_integration_tests::{seeded_store, strict_store};

// ============================================================================
// Status Workflow Tests
// ============================================================================

#[test]
fn test_full_workflow_pending_to_completed() {
    let mut store = seeded_store();
    let id = RequestId::new("1");
    assert_eq!(
        store.find_request(&id).unwrap().status,
        RequestStatus::Pending
    );

    for status in [RequestStatus::Approved, RequestStatus::Completed] {
        let updated = store.update_status(&id, status).unwrap().unwrap();
        assert_eq!(updated.status, status);
        assert_eq!(store.find_request(&id).unwrap().status, status);
    }
}

#[test]
fn test_every_status_pair_is_reachable_by_default() {
    let mut store = seeded_store();
    let id = RequestId::new("1");

    for from in RequestStatus::ALL {
        for to in RequestStatus::ALL {
            store.update_status(&id, from).unwrap();
            let updated = store.update_status(&id, to).unwrap().unwrap();
            assert_eq!(updated.status, to, "move {from} -> {to} must be allowed");
        }
    }
}

#[test]
fn test_update_keeps_every_other_field() {
    let mut store = seeded_store();
    let id = RequestId::new("2");
    let before = store.find_request(&id).unwrap().clone();

    store.update_status(&id, RequestStatus::Completed).unwrap();

    let after = store.find_request(&id).unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.pet_id, before.pet_id);
    assert_eq!(after.pet_name, before.pet_name);
    assert_eq!(after.user_name, before.user_name);
    assert_eq!(after.user_email, before.user_email);
    assert_eq!(after.request_date, before.request_date);
    assert_eq!(after.notes, before.notes);
    assert_eq!(after.status, RequestStatus::Completed);
}

#[test]
fn test_unknown_id_changes_nothing_and_raises_nothing() {
    let mut store = seeded_store();
    let snapshot: Vec<_> = store.requests().to_vec();

    let outcome = store
        .update_status(&RequestId::new("nonexistent-id"), RequestStatus::Approved)
        .unwrap();

    assert!(outcome.is_none());
    assert_eq!(store.requests(), snapshot.as_slice());
}

// ============================================================================
// Strict Transition Tests
// ============================================================================

#[test]
fn test_strict_mode_blocks_terminal_escapes() {
    let mut store = strict_store();
    let id = RequestId::new("3"); // seeded as completed

    let err = store.update_status(&id, RequestStatus::Pending).unwrap_err();

    assert!(matches!(err, StoreError::InvalidTransition { .. }));
    assert_eq!(
        store.find_request(&id).unwrap().status,
        RequestStatus::Completed
    );
}

#[test]
fn test_strict_mode_follows_the_table() {
    let mut store = strict_store();
    let id = RequestId::new("1"); // seeded as pending

    store.update_status(&id, RequestStatus::Approved).unwrap();
    store.update_status(&id, RequestStatus::Completed).unwrap();
    assert_eq!(
        store.find_request(&id).unwrap().status,
        RequestStatus::Completed
    );
}

// ============================================================================
// Filter Tests
// ============================================================================

#[test]
fn test_filter_all_returns_everything_in_order() {
    let store = seeded_store();
    let all = store.filter_requests(StatusFilter::All);

    let ids: Vec<_> = all.iter().map(|r| r.id.clone()).collect();
    let stored_ids: Vec<_> = store.requests().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, stored_ids);
}

#[test]
fn test_specific_filters_partition_the_collection() {
    let store = seeded_store();

    let mut total = 0;
    for status in RequestStatus::ALL {
        let matching = store.filter_requests(StatusFilter::Only(status));
        assert!(matching.iter().all(|r| r.status == status));
        total += matching.len();
    }
    assert_eq!(total, store.requests().len());
}

#[test]
fn test_filters_reflect_status_updates() {
    let mut store = seeded_store();
    let pending_before = store
        .filter_requests(StatusFilter::Only(RequestStatus::Pending))
        .len();

    store
        .update_status(&RequestId::new("1"), RequestStatus::Approved)
        .unwrap();

    let pending_after = store
        .filter_requests(StatusFilter::Only(RequestStatus::Pending))
        .len();
    assert_eq!(pending_after, pending_before - 1);
}

// ============================================================================
// Snapshot Semantics Tests
// ============================================================================

#[test]
fn test_request_snapshots_survive_user_removal() {
    let mut store = seeded_store();
    let id = RequestId::new("1");
    let user_id = store.find_request(&id).unwrap().user_id.clone();

    store.remove_user(&user_id).confirm().unwrap();

    let request = store.find_request(&id).unwrap();
    assert_eq!(request.user_name, "João Silva");
    assert_eq!(request.user_email, "joao@example.com");
}

#[test]
fn test_request_snapshots_survive_pet_removal() {
    let mut store = seeded_store();
    let id = RequestId::new("3");
    let pet_id = store.find_request(&id).unwrap().pet_id.clone();

    store.remove_pet(&pet_id).confirm().unwrap();

    assert_eq!(store.find_request(&id).unwrap().pet_name, "Thor");
}

// ============================================================================
// Wire Shape Tests
// ============================================================================

#[test]
fn test_request_wire_shape_is_camel_case() {
    let store = seeded_store();
    let request = store.find_request(&RequestId::new("1")).unwrap();

    let json = serde_json::to_value(request).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["petId"], "1");
    assert_eq!(json["petName"], "Rex");
    assert_eq!(json["userName"], "João Silva");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["requestDate"], "2025-10-20");
}
