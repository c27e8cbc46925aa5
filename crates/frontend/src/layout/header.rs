use crate::system::auth::use_session;
use leptos::prelude::*;

/// Top navigation. The PMS entry only renders for team members; the route
/// itself is guarded as well, this just keeps the link out of guests' way.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = use_session();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                {"Casa Limoneto"}
            </a>
            <nav class="site-header__nav">
                <a href="/book" class="site-header__link">
                    {"Book"}
                </a>
                <a href="/my-bookings" class="site-header__link">
                    {"My bookings"}
                </a>
                <Show when=move || session.get().is_team_member()>
                    <a href="/pms/calendar" class="site-header__link site-header__link--pms">
                        {"Calendar"}
                    </a>
                </Show>
            </nav>
        </header>
    }
}
