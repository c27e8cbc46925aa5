//! Session token storage. The token itself is issued by the external auth
//! service; this layer only reads what that flow left in localStorage.

const ACCESS_TOKEN_KEY: &str = "access_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_access_token() -> Option<String> {
    local_storage()
        .and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
}

pub fn clear_access_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
