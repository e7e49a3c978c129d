//! Adoption request operations (the admin "Solicitações" and "Histórico"
//! screens).

use capra_core::{RequestId, RequestStatus, StatusFilter};

use super::AdoptionStore;
use crate::error::StoreError;
use crate::history::HistoryStats;
use crate::models::AdoptionRequest;

impl AdoptionStore {
    /// Look up a request by id.
    #[must_use]
    pub fn find_request(&self, id: &RequestId) -> Option<&AdoptionRequest> {
        self.requests().iter().find(|request| request.id == *id)
    }

    /// Replace the status of the matching request, leaving every other field
    /// untouched.
    ///
    /// An unknown id is a silent no-op over the whole collection: every
    /// element fails the match, nothing changes, nothing is raised and
    /// `Ok(None)` is returned. By default any status may move to any other,
    /// including out of the terminal states; with strict transitions enabled
    /// in configuration, a move the workflow table does not allow fails and
    /// mutates nothing.
    ///
    /// Returns the updated request so the caller can surface
    /// "Status atualizado para: {label}".
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidTransition`] only in strict mode.
    pub fn update_status(
        &mut self,
        id: &RequestId,
        new_status: RequestStatus,
    ) -> Result<Option<&AdoptionRequest>, StoreError> {
        let strict = self.config().strict_transitions;
        let Some(request) = self
            .requests_mut()
            .iter_mut()
            .find(|request| request.id == *id)
        else {
            tracing::debug!(id = %id, "status update matched no request");
            return Ok(None);
        };

        if strict && !request.status.can_transition_to(new_status) {
            return Err(StoreError::InvalidTransition {
                from: request.status,
                to: new_status,
            });
        }

        let previous = request.status;
        request.status = new_status;
        tracing::info!(
            id = %request.id,
            from = %previous,
            to = %new_status,
            "request status updated"
        );
        Ok(Some(&*request))
    }

    /// Requests passing `filter`, in stored order.
    #[must_use]
    pub fn filter_requests(&self, filter: StatusFilter) -> Vec<&AdoptionRequest> {
        filter_by_status(self.requests(), filter)
    }

    /// The history view: terminal-state requests only, in stored order.
    #[must_use]
    pub fn history(&self) -> Vec<&AdoptionRequest> {
        self.requests()
            .iter()
            .filter(|request| request.status.is_terminal())
            .collect()
    }

    /// Counts shown on the history screen's stat cards.
    #[must_use]
    pub fn history_stats(&self) -> HistoryStats {
        let mut stats = HistoryStats::default();
        for request in self.history() {
            match request.status {
                RequestStatus::Completed => stats.completed += 1,
                RequestStatus::Rejected => stats.rejected += 1,
                RequestStatus::Pending | RequestStatus::Approved => {}
            }
        }
        stats
    }
}

/// Keep only requests whose status passes `filter`, preserving input order.
///
/// Pure function of its input; [`StatusFilter::All`] returns the collection
/// unchanged in order.
#[must_use]
pub fn filter_by_status<'a>(
    requests: &'a [AdoptionRequest],
    filter: StatusFilter,
) -> Vec<&'a AdoptionRequest> {
    requests
        .iter()
        .filter(|request| filter.matches(request.status))
        .collect()
}
