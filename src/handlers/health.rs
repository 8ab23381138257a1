//! Liveness handler

pub async fn check() -> &'static str {
    "Backend is alive"
}
