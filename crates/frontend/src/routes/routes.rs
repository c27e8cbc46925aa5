use crate::domain::b001_booking::ui::flow::BookingFlowPage;
use crate::domain::b001_booking::ui::my_bookings::MyBookingsPage;
use crate::layout::{SiteFooter, SiteHeader};
use crate::projections::p901_calendar_month::CalendarPage;
use crate::site::{ConfirmationPage, HomePage};
use crate::system::auth::use_session;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <SiteHeader />
            <main class="main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/book") view=BookingFlowPage />
                    <Route path=path!("/confirmation") view=ConfirmationPage />
                    <Route path=path!("/my-bookings") view=MyBookingsPage />
                    <Route path=path!("/pms/calendar") view=PmsCalendarRoute />
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}

/// Route-level guard for the PMS. The API enforces authorization on every
/// endpoint; this only keeps the staff UI from rendering for guests.
#[component]
fn PmsCalendarRoute() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.get().is_team_member()
            fallback=|| view! {
                <div class="page access-denied">
                    <h1>{"Staff area"}</h1>
                    <p>{"You need a team account to open the calendar."}</p>
                </div>
            }
        >
            <CalendarPage />
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>{"Page not found"}</h1>
            <a href="/">{"Back to the home page"}</a>
        </div>
    }
}
