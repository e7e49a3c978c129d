//! Adoption history command (the "Histórico de Adoções" screen).

use capra_store::{AdoptionStore, CapraConfig, group_by_month};

/// Show the history timeline: terminal-state requests, grouped by month.
pub fn run(config: CapraConfig, flat: bool) {
    let store = AdoptionStore::seeded(config);
    let history = store.history();
    let stats = store.history_stats();

    tracing::info!("📜 Histórico de Adoções - Total: {} registros", history.len());
    tracing::info!(
        "  Concluídas: {} | Rejeitadas: {}",
        stats.completed,
        stats.rejected
    );

    if flat {
        for request in history {
            tracing::info!(
                "  {} 🐾 {} - 👤 {} - 📅 {} - {}",
                request.status.icon(),
                request.pet_name,
                request.user_name,
                request.request_date,
                request.status.label()
            );
        }
        return;
    }

    for group in group_by_month(history) {
        tracing::info!("{}", group.label);
        for request in group.requests {
            tracing::info!(
                "  {} 🐾 {} - 👤 {} - 📅 {} - {}",
                request.status.icon(),
                request.pet_name,
                request.user_name,
                request.request_date,
                request.status.label()
            );
        }
    }
}
