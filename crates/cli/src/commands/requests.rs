//! Adoption request commands (the "Solicitações de Adoção" screen).

use capra_core::{RequestId, RequestStatus, StatusFilter};
use capra_store::{AdoptionStore, CapraConfig};

/// List requests, optionally narrowed to one status tab.
pub fn list(config: CapraConfig, status: StatusFilter) {
    let store = AdoptionStore::seeded(config);
    let requests = store.filter_requests(status);

    tracing::info!("📋 Solicitações de Adoção - Total: {}", requests.len());
    if requests.is_empty() {
        tracing::info!("📭 Nenhuma solicitação encontrada");
        return;
    }
    for request in requests {
        tracing::info!(
            "  [{}] 🐾 {} - 👤 {} - 📅 {} - {}",
            request.id,
            request.pet_name,
            request.user_name,
            request.request_date,
            request.status.label()
        );
    }
}

/// Show one request in full (the detail modal).
pub fn show(config: CapraConfig, id: &str) {
    let store = AdoptionStore::seeded(config);
    let Some(request) = store.find_request(&RequestId::new(id)) else {
        tracing::info!("📭 Nenhuma solicitação encontrada");
        return;
    };

    tracing::info!("Detalhes da Solicitação [{}]", request.id);
    tracing::info!("  Pet: 🐾 {}", request.pet_name);
    tracing::info!(
        "  Solicitante: 👤 {} ({})",
        request.user_name,
        request.user_email
    );
    tracing::info!("  Data da Solicitação: 📅 {}", request.request_date);
    tracing::info!("  Status Atual: {}", request.status.label());
    if let Some(notes) = &request.notes {
        tracing::info!("  Observações: {notes}");
    }
}

/// Move a request to a new status.
pub fn set_status(
    config: CapraConfig,
    id: &str,
    status: RequestStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = AdoptionStore::seeded(config);
    match store.update_status(&RequestId::new(id), status)? {
        Some(request) => {
            tracing::info!("Sucesso! Status atualizado para: {}", request.status.label());
        }
        None => tracing::info!("Nenhuma solicitação encontrada com id {id}"),
    }
    Ok(())
}
