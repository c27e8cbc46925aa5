use super::{url_state, FlowStep};
use crate::domain::b001_booking::api;
use crate::projections::p902_referral_credits::api as referrals_api;
use crate::shared::toast::ToastService;
use chrono::NaiveDate;
use contracts::domain::b001_booking::{
    CreateBookingRequest, DateRange, ExtraGuestDetail, GuestCounts, GuestField,
};
use contracts::projections::p900_price_quote::{
    derive_display_pricing, CancellationPolicy, DisplayPricing, PriceQuote,
};
use contracts::shared::money::{format_amount, is_settled};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Guest-count URL sync is debounced so a burst of counter clicks does not
/// churn the history entry.
const URL_SYNC_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityState {
    /// No valid date range selected yet.
    Idle,
    Checking,
    Available,
    Unavailable,
}

/// Contact fields collected on the guest step. All required.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("First name is required".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("Last name is required".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Phone is required".into());
        }
        if self.country.trim().is_empty() {
            return Err("Country is required".into());
        }
        Ok(())
    }
}

/// ViewModel driving the two-step reservation flow.
///
/// Derived values (nights, pricing breakdown, applied credit) are pure
/// closures over the signals, recomputed on every relevant change; nothing
/// derived is persisted.
#[derive(Clone, Copy)]
pub struct BookingFlowViewModel {
    pub step: RwSignal<FlowStep>,
    pub range: RwSignal<DateRange>,
    pub guests: RwSignal<GuestCounts>,
    pub availability: RwSignal<AvailabilityState>,
    pub quote: RwSignal<Option<PriceQuote>>,
    pub policy: RwSignal<CancellationPolicy>,
    pub use_credits: RwSignal<bool>,
    pub available_credits: RwSignal<f64>,
    pub contact: RwSignal<ContactForm>,
    pub special_requests: RwSignal<String>,
    pub extra_guests: RwSignal<Vec<ExtraGuestDetail>>,
    pub submitting: RwSignal<bool>,

    /// Fence for stale availability/pricing responses: a response is applied
    /// only if its generation still matches the latest issued request.
    generation: RwSignal<u64>,
    /// Epoch for the debounced guest-count URL sync.
    url_epoch: RwSignal<u64>,
    /// Idempotency key attached to the create-booking payload.
    client_request_id: RwSignal<String>,
}

impl BookingFlowViewModel {
    pub fn new() -> Self {
        Self {
            step: RwSignal::new(FlowStep::Plan),
            range: RwSignal::new(DateRange::default()),
            guests: RwSignal::new(GuestCounts::default()),
            availability: RwSignal::new(AvailabilityState::Idle),
            quote: RwSignal::new(None),
            policy: RwSignal::new(CancellationPolicy::Flex),
            use_credits: RwSignal::new(false),
            available_credits: RwSignal::new(0.0),
            contact: RwSignal::new(ContactForm::default()),
            special_requests: RwSignal::new(String::new()),
            extra_guests: RwSignal::new(Vec::new()),
            submitting: RwSignal::new(false),
            generation: RwSignal::new(0),
            url_epoch: RwSignal::new(0),
            client_request_id: RwSignal::new(uuid::Uuid::new_v4().to_string()),
        }
    }

    /// Prefill from the page query string and fetch the referral balance.
    pub fn init(&self) {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let restored = url_state::decode(&search);
        self.range.set(restored.range);
        self.guests.set(restored.guests);
        self.step.set(restored.step);
        if restored.range.is_valid() {
            self.refresh_dates();
        }

        let available_credits = self.available_credits;
        spawn_local(async move {
            // Anonymous visitors simply have no balance; degrade silently.
            if let Ok(credits) = referrals_api::get_referral_credits().await {
                available_credits.set(credits.balance());
            }
        });
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn nights(&self) -> i64 {
        self.range.get().nights()
    }

    pub fn pricing(&self) -> Option<DisplayPricing> {
        let quote = self.quote.get()?;
        Some(derive_display_pricing(
            &quote,
            self.range.get().nights(),
            self.policy.get(),
            self.use_credits.get(),
            self.available_credits.get(),
        ))
    }

    // ------------------------------------------------------------------
    // Plan step
    // ------------------------------------------------------------------

    pub fn set_dates(&self, check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) {
        self.range.set(DateRange::new(check_in, check_out));
        self.refresh_dates();
        self.sync_url_now();
    }

    pub fn increment(&self, field: GuestField) {
        self.guests.update(|g| *g = g.increment(field));
        self.refresh_price_only();
        self.sync_url_debounced();
    }

    pub fn decrement(&self, field: GuestField) {
        self.guests.update(|g| *g = g.decrement(field));
        self.refresh_price_only();
        self.sync_url_debounced();
    }

    /// Kick off availability + pricing for the current range. Both requests
    /// run concurrently; stale responses are fenced by generation.
    fn refresh_dates(&self) {
        let range = self.range.get_untracked();
        if !range.is_valid() {
            self.availability.set(AvailabilityState::Idle);
            self.quote.set(None);
            return;
        }
        let (Some(check_in), Some(check_out)) = (range.check_in, range.check_out) else {
            return;
        };

        let generation = self.generation;
        let this_generation = generation.get_untracked() + 1;
        generation.set(this_generation);

        let availability = self.availability;
        availability.set(AvailabilityState::Checking);
        spawn_local(async move {
            let result = api::check_availability(check_in, check_out).await;
            if generation.get_untracked() != this_generation {
                return;
            }
            match result {
                Ok(true) => availability.set(AvailabilityState::Available),
                Ok(false) => availability.set(AvailabilityState::Unavailable),
                Err(e) => {
                    log::warn!("availability check failed: {}", e);
                    availability.set(AvailabilityState::Idle);
                }
            }
        });

        self.fetch_price(this_generation, check_in, check_out);
    }

    /// Re-price for a guest-count change without re-checking availability.
    fn refresh_price_only(&self) {
        let range = self.range.get_untracked();
        let (Some(check_in), Some(check_out)) = (range.check_in, range.check_out) else {
            return;
        };
        if !range.is_valid() {
            return;
        }
        let this_generation = self.generation.get_untracked() + 1;
        self.generation.set(this_generation);
        self.fetch_price(this_generation, check_in, check_out);
    }

    fn fetch_price(&self, this_generation: u64, check_in: NaiveDate, check_out: NaiveDate) {
        let generation = self.generation;
        let quote = self.quote;
        let guest_count = self.guests.get_untracked().total();
        spawn_local(async move {
            let result = api::calculate_price(check_in, check_out, guest_count).await;
            if generation.get_untracked() != this_generation {
                return;
            }
            match result {
                Ok(q) => quote.set(Some(q)),
                Err(e) => {
                    log::warn!("price calculation failed: {}", e);
                    quote.set(None);
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Step transitions
    // ------------------------------------------------------------------

    /// Advance to the guest step. Guest counts are not validated here; the
    /// counters keep them valid continuously.
    pub fn continue_to_guest(&self, toasts: ToastService) {
        if !self.range.get_untracked().is_valid() {
            toasts.error("Please select your check-in and check-out dates first");
            return;
        }
        match self.availability.get_untracked() {
            AvailabilityState::Checking => {
                // Not an error: the check just has not settled yet.
                toasts.info("Checking availability — one moment please");
            }
            AvailabilityState::Unavailable => {
                toasts.error("The selected dates are not available");
            }
            AvailabilityState::Idle | AvailabilityState::Available => {
                self.step.set(FlowStep::Guest);
                self.sync_url_now();
            }
        }
    }

    pub fn back_to_plan(&self) {
        self.step.set(FlowStep::Plan);
        self.sync_url_now();
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Create the booking, then either skip checkout (fully covered by
    /// credits) or redirect to the hosted payment page.
    ///
    /// If checkout-session creation fails after the booking exists, the
    /// booking is deleted again (compensating action); if that cleanup also
    /// fails, the human-readable booking id is escalated so staff can release
    /// the dates manually.
    pub fn submit(&self, toasts: ToastService) {
        if self.submitting.get_untracked() {
            return;
        }
        let contact = self.contact.get_untracked();
        if let Err(message) = contact.validate() {
            toasts.error(message);
            return;
        }
        let Some(pricing) = self.pricing_untracked() else {
            toasts.error("Pricing is still being calculated — one moment please");
            return;
        };
        let range = self.range.get_untracked();
        let (Some(check_in), Some(check_out)) = (range.check_in, range.check_out) else {
            toasts.error("Please select your dates first");
            return;
        };

        let guests = self.guests.get_untracked();
        let payload = CreateBookingRequest {
            check_in,
            check_out,
            adults: guests.adults,
            children: guests.children,
            infants: guests.infants,
            number_of_guests: guests.total(),
            first_name: contact.first_name.trim().to_string(),
            last_name: contact.last_name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone: contact.phone.trim().to_string(),
            country: contact.country.trim().to_string(),
            special_requests: self.special_requests.get_untracked(),
            extra_guests: self.extra_guests.get_untracked(),
            cancellation_policy: self.policy.get_untracked(),
            applied_credit: format_amount(pricing.applied_credit),
            nightly_rate: format_amount(pricing.nightly_rate),
            cleaning_fee: format_amount(pricing.cleaning_fee),
            tourist_tax: format_amount(pricing.tourist_tax),
            total_amount: format_amount(pricing.total_after_policy),
            client_request_id: self.client_request_id.get_untracked(),
        };

        let submitting = self.submitting;
        let client_request_id = self.client_request_id;
        submitting.set(true);
        spawn_local(async move {
            let booking = match api::create_booking(&payload).await {
                Ok(b) => b,
                Err(e) => {
                    submitting.set(false);
                    toasts.error(format!("Failed to create the booking: {}", e));
                    return;
                }
            };

            match post_create_step(booking.outstanding_balance()) {
                PostCreateStep::Confirm => {
                    redirect(&format!("/confirmation?booking={}", booking.booking_id));
                }
                PostCreateStep::StartCheckout => {
                    match api::create_checkout_session(&booking.id).await {
                        Ok(session) => redirect(&session.session_url),
                        Err(checkout_err) => {
                            log::error!("checkout-session creation failed: {}", checkout_err);
                            // Single compensating delete; its outcome alone decides
                            // what the guest sees next.
                            let delete_result = api::delete_booking(&booking.id).await;
                            match release_outcome(delete_result, &booking.booking_id) {
                                ReleaseOutcome::Released => {
                                    // Fresh key: the deleted booking must not swallow
                                    // a retry.
                                    client_request_id.set(uuid::Uuid::new_v4().to_string());
                                    submitting.set(false);
                                    toasts.error(
                                        "Payment could not be started, so the booking was \
                                         released. Please try again.",
                                    );
                                }
                                ReleaseOutcome::Escalate { message } => {
                                    submitting.set(false);
                                    toasts.persistent_error(message);
                                }
                            }
                        }
                    }
                }
            }
        });
    }

    fn pricing_untracked(&self) -> Option<DisplayPricing> {
        let quote = self.quote.get_untracked()?;
        Some(derive_display_pricing(
            &quote,
            self.range.get_untracked().nights(),
            self.policy.get_untracked(),
            self.use_credits.get_untracked(),
            self.available_credits.get_untracked(),
        ))
    }

    // ------------------------------------------------------------------
    // URL mirroring
    // ------------------------------------------------------------------

    fn write_url(&self) {
        let query = url_state::encode(
            self.range.get_untracked(),
            self.guests.get_untracked(),
            self.step.get_untracked(),
        );
        let new_url = format!("?{}", query);
        if let Some(window) = web_sys::window() {
            let current = window.location().search().unwrap_or_default();
            if current != new_url {
                if let Ok(history) = window.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        }
    }

    pub fn sync_url_now(&self) {
        self.url_epoch.update(|e| *e += 1);
        self.write_url();
    }

    fn sync_url_debounced(&self) {
        let epoch = self.url_epoch;
        let this_epoch = epoch.get_untracked() + 1;
        epoch.set(this_epoch);
        let this = *self;
        Timeout::new(URL_SYNC_DEBOUNCE_MS, move || {
            // Superseded by a newer edit or an immediate sync; skip.
            if epoch.get_untracked() == this_epoch {
                this.write_url();
            }
        })
        .forget();
    }
}

fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

// ============================================================================
// Post-create sequencing
// ============================================================================
//
// The decisions after `create_booking` succeeds are kept apart from the API
// calls so the sequencing is testable without a browser: whether a checkout
// session is requested at all, and what the guest sees once the single
// compensating delete has resolved.

/// Next step once the booking record exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostCreateStep {
    /// Nothing left to pay (typically fully covered by credits): go straight
    /// to the confirmation page, no checkout session.
    Confirm,
    /// A balance is still due: request a hosted checkout session.
    StartCheckout,
}

fn post_create_step(outstanding_balance: f64) -> PostCreateStep {
    if is_settled(outstanding_balance) {
        PostCreateStep::Confirm
    } else {
        PostCreateStep::StartCheckout
    }
}

/// What the guest sees after a failed checkout-session request, decided from
/// the outcome of the one compensating delete. Both arms are terminal: the
/// delete is never re-issued.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReleaseOutcome {
    /// The dates were released; the guest can simply retry.
    Released,
    /// The delete failed too, so the reservation is still blocking the
    /// dates. Escalate with the human-readable code staff can look up.
    Escalate { message: String },
}

fn release_outcome(delete_result: Result<(), String>, booking_code: &str) -> ReleaseOutcome {
    match delete_result {
        Ok(()) => ReleaseOutcome::Released,
        Err(delete_err) => {
            log::error!("compensating delete failed: {}", delete_err);
            ReleaseOutcome::Escalate {
                message: format!(
                    "Payment could not be started and the reservation {} is still \
                     blocking the dates. Please contact us and quote that code.",
                    booking_code
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::money::SETTLED_EPSILON;

    #[test]
    fn test_zero_due_skips_checkout_session() {
        assert_eq!(post_create_step(0.0), PostCreateStep::Confirm);
        // Float residue from the credit clamp still counts as settled.
        assert_eq!(post_create_step(SETTLED_EPSILON), PostCreateStep::Confirm);
    }

    #[test]
    fn test_outstanding_balance_requires_checkout() {
        assert_eq!(post_create_step(0.02), PostCreateStep::StartCheckout);
        assert_eq!(post_create_step(142.50), PostCreateStep::StartCheckout);
    }

    #[test]
    fn test_successful_release_lets_the_guest_retry() {
        assert_eq!(release_outcome(Ok(()), "BK-2025-0142"), ReleaseOutcome::Released);
    }

    #[test]
    fn test_failed_release_escalates_with_the_booking_code() {
        let outcome = release_outcome(Err("HTTP 500".into()), "BK-2025-0142");
        let ReleaseOutcome::Escalate { message } = outcome else {
            panic!("expected escalation");
        };
        assert!(message.contains("BK-2025-0142"));
    }
}
