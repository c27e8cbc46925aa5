use crate::shared::api_utils::api_url;
use contracts::shared::site::{GalleryImage, HostProfile};
use gloo_net::http::Request;

pub async fn fetch_gallery() -> Result<Vec<GalleryImage>, String> {
    let response = Request::get(&api_url("/api/site/gallery"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_host_profile() -> Result<HostProfile, String> {
    let response = Request::get(&api_url("/api/site/host"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
