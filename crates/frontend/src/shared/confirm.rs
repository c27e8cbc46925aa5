/// Simple confirm dialog via browser.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|win| win.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Guard used before closing a dirty form.
pub fn confirm_discard() -> bool {
    confirm("You have unsaved changes. Discard them?")
}
