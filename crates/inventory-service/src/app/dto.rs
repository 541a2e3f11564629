use serde::Deserialize;

/// Body of `POST /inventory/:id/reserve`.
#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    pub quantity: u64,
}
