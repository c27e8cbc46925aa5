use super::view_model::{AvailabilityState, BookingFlowViewModel};
use super::FlowStep;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::components::{DateRangePicker, GuestCounter};
use crate::shared::toast::ToastService;
use contracts::domain::b001_booking::{ExtraGuestDetail, GuestField};
use contracts::projections::p900_price_quote::CancellationPolicy;
use contracts::shared::money::format_amount;
use leptos::prelude::*;

#[component]
pub fn BookingFlowPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = BookingFlowViewModel::new();
    vm.init();

    view! {
        <div class="page booking-flow">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Book your stay"}</h1>
                </div>
                <div class="booking-flow__steps">
                    <span
                        class="booking-flow__step"
                        class:booking-flow__step--active=move || vm.step.get() == FlowStep::Plan
                    >
                        {"1. Dates & guests"}
                    </span>
                    <span
                        class="booking-flow__step"
                        class:booking-flow__step--active=move || vm.step.get() == FlowStep::Guest
                    >
                        {"2. Your details"}
                    </span>
                </div>
            </div>

            <Show
                when=move || vm.step.get() == FlowStep::Guest
                fallback=move || view! { <PlanStep vm=vm toasts=toasts /> }
            >
                <GuestStep vm=vm toasts=toasts />
            </Show>
        </div>
    }
}

#[component]
fn PlanStep(vm: BookingFlowViewModel, toasts: ToastService) -> impl IntoView {
    view! {
        <div class="booking-flow__plan">
            <DateRangePicker
                check_in=Signal::derive(move || vm.range.get().check_in)
                check_out=Signal::derive(move || vm.range.get().check_out)
                on_change=Callback::new(move |(check_in, check_out)| {
                    vm.set_dates(check_in, check_out);
                })
            />

            {move || {
                let nights = vm.nights();
                (nights > 0).then(|| view! {
                    <p class="booking-flow__nights">
                        {format!("{} night{}", nights, if nights == 1 { "" } else { "s" })}
                    </p>
                })
            }}

            <AvailabilityNotice vm=vm />

            <div class="booking-flow__guests">
                <GuestCounter
                    label="Adults"
                    value=Signal::derive(move || vm.guests.get().adults)
                    on_decrement=Callback::new(move |_| vm.decrement(GuestField::Adults))
                    on_increment=Callback::new(move |_| vm.increment(GuestField::Adults))
                />
                <GuestCounter
                    label="Children"
                    hint="Ages 2–12"
                    value=Signal::derive(move || vm.guests.get().children)
                    on_decrement=Callback::new(move |_| vm.decrement(GuestField::Children))
                    on_increment=Callback::new(move |_| vm.increment(GuestField::Children))
                />
                <GuestCounter
                    label="Infants"
                    hint="Under 2, not counted towards capacity"
                    value=Signal::derive(move || vm.guests.get().infants)
                    on_decrement=Callback::new(move |_| vm.decrement(GuestField::Infants))
                    on_increment=Callback::new(move |_| vm.increment(GuestField::Infants))
                />
            </div>

            <PolicyChoice vm=vm />
            <CreditOptIn vm=vm />
            <PriceSummary vm=vm />

            <div class="booking-flow__actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.continue_to_guest(toasts)
                >
                    {"Continue"}
                </button>
            </div>
        </div>
    }
}

#[component]
fn AvailabilityNotice(vm: BookingFlowViewModel) -> impl IntoView {
    move || match vm.availability.get() {
        AvailabilityState::Idle => None,
        AvailabilityState::Checking => Some(view! {
            <p class="booking-flow__availability booking-flow__availability--checking">
                {"Checking availability…"}
            </p>
        }),
        AvailabilityState::Available => Some(view! {
            <p class="booking-flow__availability booking-flow__availability--ok">
                {"Your dates are available"}
            </p>
        }),
        AvailabilityState::Unavailable => Some(view! {
            <p class="booking-flow__availability booking-flow__availability--conflict">
                {"Sorry, these dates are already taken"}
            </p>
        }),
    }
}

#[component]
fn PolicyChoice(vm: BookingFlowViewModel) -> impl IntoView {
    let option = move |policy: CancellationPolicy, description: &'static str| {
        view! {
            <label class="policy-choice__option">
                <input
                    type="radio"
                    name="cancellation_policy"
                    prop:checked=move || vm.policy.get() == policy
                    on:change=move |_| vm.policy.set(policy)
                />
                <span class="policy-choice__label">{policy.label()}</span>
                <span class="policy-choice__description">{description}</span>
            </label>
        }
    };

    view! {
        <div class="policy-choice">
            <h3>{"Cancellation policy"}</h3>
            {option(
                CancellationPolicy::Flex,
                "Free cancellation up to 7 days before check-in",
            )}
            {option(
                CancellationPolicy::NonRefundable,
                "No refund on cancellation, 10% off your total",
            )}
        </div>
    }
}

#[component]
fn CreditOptIn(vm: BookingFlowViewModel) -> impl IntoView {
    move || {
        let balance = vm.available_credits.get();
        (balance > 0.0).then(|| view! {
            <label class="credit-opt-in">
                <input
                    type="checkbox"
                    prop:checked=move || vm.use_credits.get()
                    on:change=move |_| vm.use_credits.update(|v| *v = !*v)
                />
                <span>
                    {format!("Use my referral credits ({} available)", format_amount(balance))}
                </span>
            </label>
        })
    }
}

#[component]
fn PriceSummary(vm: BookingFlowViewModel) -> impl IntoView {
    let row = |label: String, amount: f64| {
        view! {
            <div class="price-summary__row">
                <span>{label}</span>
                <span>{format_amount(amount)}</span>
            </div>
        }
    };

    move || {
        vm.pricing().map(|pricing| {
            view! {
                <div class="price-summary">
                    {row(
                        format!(
                            "{} × {} nights",
                            format_amount(pricing.nightly_rate),
                            vm.nights()
                        ),
                        pricing.accommodation_total,
                    )}
                    {row("Cleaning fee".to_string(), pricing.cleaning_fee)}
                    {(pricing.extra_guest_fee > 0.0)
                        .then(|| row("Extra guest fee".to_string(), pricing.extra_guest_fee))}
                    {row("Tourist tax".to_string(), pricing.tourist_tax)}
                    {(pricing.discount > 0.0).then(|| view! {
                        <div class="price-summary__row price-summary__row--discount">
                            <span>{"Non-refundable discount"}</span>
                            <span>{format!("−{}", format_amount(pricing.discount))}</span>
                        </div>
                    })}
                    {(pricing.applied_credit > 0.0).then(|| view! {
                        <div class="price-summary__row price-summary__row--credit">
                            <span>{"Referral credit"}</span>
                            <span>{format!("−{}", format_amount(pricing.applied_credit))}</span>
                        </div>
                    })}
                    <div class="price-summary__row price-summary__row--total">
                        <span>{"Total"}</span>
                        <span>{format_amount(pricing.total_after_credit)}</span>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn GuestStep(vm: BookingFlowViewModel, toasts: ToastService) -> impl IntoView {
    view! {
        <div class="booking-flow__guest">
            <div class="details-form">
                <Input
                    label="First name"
                    required=true
                    value=Signal::derive(move || vm.contact.get().first_name)
                    on_input=Callback::new(move |v| vm.contact.update(|c| c.first_name = v))
                />
                <Input
                    label="Last name"
                    required=true
                    value=Signal::derive(move || vm.contact.get().last_name)
                    on_input=Callback::new(move |v| vm.contact.update(|c| c.last_name = v))
                />
                <Input
                    label="Email"
                    input_type="email"
                    required=true
                    value=Signal::derive(move || vm.contact.get().email)
                    on_input=Callback::new(move |v| vm.contact.update(|c| c.email = v))
                />
                <Input
                    label="Phone"
                    input_type="tel"
                    required=true
                    value=Signal::derive(move || vm.contact.get().phone)
                    on_input=Callback::new(move |v| vm.contact.update(|c| c.phone = v))
                />
                <Input
                    label="Country"
                    required=true
                    value=Signal::derive(move || vm.contact.get().country)
                    on_input=Callback::new(move |v| vm.contact.update(|c| c.country = v))
                />
                <Textarea
                    label="Special requests"
                    placeholder="Anything we should prepare for your stay? (optional)"
                    value=Signal::derive(move || vm.special_requests.get())
                    on_input=Callback::new(move |v| vm.special_requests.set(v))
                />
            </div>

            <ExtraGuestRows vm=vm />
            <PriceSummary vm=vm />

            <div class="booking-flow__actions">
                <button class="button button--secondary" on:click=move |_| vm.back_to_plan()>
                    {"Back"}
                </button>
                <button
                    class="button button--primary"
                    disabled=move || vm.submitting.get()
                    on:click=move |_| vm.submit(toasts)
                >
                    {move || if vm.submitting.get() { "Booking…" } else { "Book and pay" }}
                </button>
            </div>
        </div>
    }
}

/// Optional free-form rows naming the other guests of the stay.
#[component]
fn ExtraGuestRows(vm: BookingFlowViewModel) -> impl IntoView {
    view! {
        <div class="extra-guests">
            <h3>{"Travelling with others?"}</h3>
            {move || {
                vm.extra_guests
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, guest)| {
                        view! {
                            <div class="extra-guests__row">
                                <Input
                                    placeholder="Full name"
                                    value=Signal::derive(move || {
                                        vm.extra_guests
                                            .get()
                                            .get(idx)
                                            .map(|g| g.name.clone())
                                            .unwrap_or_default()
                                    })
                                    on_input=Callback::new(move |v| {
                                        vm.extra_guests.update(|rows| {
                                            if let Some(row) = rows.get_mut(idx) {
                                                row.name = v;
                                            }
                                        });
                                    })
                                />
                                <Input
                                    placeholder="Age"
                                    input_type="number"
                                    value=Signal::derive(move || {
                                        guest.age.map(|a| a.to_string()).unwrap_or_default()
                                    })
                                    on_input=Callback::new(move |v: String| {
                                        vm.extra_guests.update(|rows| {
                                            if let Some(row) = rows.get_mut(idx) {
                                                row.age = v.parse().ok();
                                            }
                                        });
                                    })
                                />
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| {
                                        vm.extra_guests.update(|rows| {
                                            rows.remove(idx);
                                        });
                                    }
                                >
                                    {"Remove"}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="button button--secondary"
                on:click=move |_| {
                    vm.extra_guests.update(|rows| rows.push(ExtraGuestDetail::default()));
                }
            >
                {"Add a guest"}
            </button>
        </div>
    }
}
