use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct ListBookingsQuery {
    pub status: Option<String>,
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}
