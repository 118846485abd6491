use axum::response::Response;

use crate::api::found;

pub async fn index() -> Response {
    found("/login")
}
