//! Guest self-service list of past and upcoming bookings.

use crate::domain::b001_booking::api;
use crate::shared::date_utils::format_human;
use crate::system::auth::storage;
use contracts::domain::b001_booking::Booking;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let signed_in = storage::get_access_token().is_some();

    if let Some(token) = storage::get_access_token() {
        spawn_local(async move {
            match api::my_bookings(&token).await {
                Ok(list) => bookings.set(list),
                Err(message) => {
                    log::warn!("failed to load bookings: {}", message);
                    error.set(Some("Could not load your bookings right now.".to_string()));
                }
            }
            loading.set(false);
        });
    } else {
        loading.set(false);
    }

    view! {
        <div class="page my-bookings">
            <div class="header">
                <h1 class="header__title">{"My bookings"}</h1>
            </div>

            {move || (!signed_in).then(|| view! {
                <p class="my-bookings__signin">
                    {"Sign in with the link from your confirmation email to see your bookings."}
                </p>
            })}

            <Show when=move || signed_in && !loading.get()>
                {move || error.get().map(|message| view! {
                    <p class="my-bookings__error">{message}</p>
                })}
                <Show
                    when=move || !bookings.get().is_empty()
                    fallback=move || (error.get().is_none()).then(|| view! {
                        <p class="my-bookings__empty">
                            {"No bookings yet. Your next stay starts "}
                            <a href="/book">{"here"}</a>
                            {"."}
                        </p>
                    })
                >
                    <div class="my-bookings__list">
                        <For
                            each=move || bookings.get()
                            key=|b| b.id.clone()
                            children=|booking| view! { <BookingCard booking=booking /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn BookingCard(booking: Booking) -> impl IntoView {
    view! {
        <div class="booking-card">
            <div class="booking-card__top">
                <span class="booking-card__code">{booking.booking_id.clone()}</span>
                <span class="booking-card__status">{booking.status.label()}</span>
            </div>
            <div class="booking-card__dates">
                {format_human(booking.check_in)}
                {" → "}
                {format_human(booking.check_out)}
            </div>
            <div class="booking-card__meta">
                {format!("{} guests", booking.number_of_guests)}
                {" · "}
                {booking.total_amount.clone()}
                {" · "}
                {booking.payment_status.label()}
            </div>
        </div>
    }
}
