use contracts::system::auth::SessionContext;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{api, storage};

/// Provides the read-only [`SessionContext`] capability object to the tree.
///
/// Components read roles exclusively through [`use_session`]; there is no
/// module-level auth singleton, so tests can provide a fixture context.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionContext::anonymous());

    // Restore the session from the externally-managed token on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(token) = storage::get_access_token() {
                match api::get_current_user(&token).await {
                    Ok(user) => set_session.set(SessionContext::for_user(user)),
                    Err(_) => {
                        // Token expired or revoked; fall back to anonymous.
                        storage::clear_access_token();
                        set_session.set(SessionContext::anonymous());
                    }
                }
            }
        });
    });

    provide_context(session);

    children()
}

/// Hook to access the current session capabilities.
pub fn use_session() -> ReadSignal<SessionContext> {
    use_context::<ReadSignal<SessionContext>>()
        .expect("AuthProvider not found in component tree")
}
