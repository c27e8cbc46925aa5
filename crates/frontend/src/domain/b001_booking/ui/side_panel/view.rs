use super::view_model::{BookingSidePanelViewModel, PanelMode};
use crate::domain::b002_guest_registry::ui::GuestRegistry;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::GuestCounter;
use crate::shared::date_utils::{format_human, parse_iso_date, to_iso_date};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::b001_booking::{GuestField, PaymentStatus};
use contracts::projections::p900_price_quote::CancellationPolicy;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn BookingSidePanel(vm: BookingSidePanelViewModel) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    install_shortcuts(vm, toasts);

    view! {
        <Show when=move || vm.open.get()>
            <div class="side-panel__backdrop" on:click=move |_| vm.close()></div>
            <aside class="side-panel">
                <PanelHeader vm=vm />
                <div class="side-panel__body">
                    <Show
                        when=move || vm.mode.get() == PanelMode::View
                        fallback=move || view! { <BookingForm vm=vm /> }
                    >
                        <BookingDetails vm=vm />
                        {move || vm.booking.get().map(|b| view! {
                            <GuestRegistry
                                booking_id=b.id.clone()
                                expected_guests=b.number_of_guests
                            />
                        })}
                    </Show>
                </div>
                <PanelFooter vm=vm toasts=toasts />
            </aside>
        </Show>
    }
}

/// What a panel keydown maps to. `Escape` closes (or backs out of editing),
/// Ctrl/Cmd+E edits, Ctrl/Cmd+S saves; Cmd is the standard chord on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelShortcut {
    Dismiss,
    Edit,
    Save,
}

fn panel_shortcut(key: &str, ctrl: bool, meta: bool) -> Option<PanelShortcut> {
    match key {
        "Escape" => Some(PanelShortcut::Dismiss),
        "e" | "E" if ctrl || meta => Some(PanelShortcut::Edit),
        "s" | "S" if ctrl || meta => Some(PanelShortcut::Save),
        _ => None,
    }
}

/// Registered once for the page; every handler no-ops while the panel is
/// closed.
fn install_shortcuts(vm: BookingSidePanelViewModel, toasts: ToastService) {
    let handler = Closure::<dyn Fn(web_sys::KeyboardEvent)>::wrap(Box::new(
        move |event: web_sys::KeyboardEvent| {
            if !vm.open.get_untracked() {
                return;
            }
            match panel_shortcut(&event.key(), event.ctrl_key(), event.meta_key()) {
                Some(PanelShortcut::Dismiss) => {
                    if vm.mode.get_untracked() == PanelMode::View {
                        vm.close();
                    } else {
                        vm.cancel_edit();
                    }
                }
                Some(PanelShortcut::Edit) => {
                    event.prevent_default();
                    vm.enter_edit();
                }
                Some(PanelShortcut::Save) => {
                    event.prevent_default();
                    vm.save(toasts);
                }
                None => {}
            }
        },
    ));

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let _ = document
            .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
    }
    handler.forget();
}

#[component]
fn PanelHeader(vm: BookingSidePanelViewModel) -> impl IntoView {
    let title = move || match vm.mode.get() {
        PanelMode::Create => "New booking".to_string(),
        _ => vm
            .booking
            .get()
            .map(|b| b.booking_id)
            .unwrap_or_default(),
    };

    view! {
        <div class="side-panel__header">
            <h2 class="side-panel__title">{title}</h2>
            {move || vm.booking.get().map(|b| view! {
                <span class=format!("status-badge status-badge--{}", status_class(b.status))>
                    {b.status.label()}
                </span>
            })}
            <button class="side-panel__close" on:click=move |_| vm.close()>
                {icon("cancel")}
            </button>
        </div>
    }
}

#[component]
fn BookingDetails(vm: BookingSidePanelViewModel) -> impl IntoView {
    let row = |label: &'static str, value: String| {
        view! {
            <div class="detail-row">
                <span class="detail-row__label">{label}</span>
                <span class="detail-row__value">{value}</span>
            </div>
        }
    };

    move || {
        vm.booking.get().map(|b| {
            view! {
                <div class="booking-details">
                    {row("Guest", b.guest_name())}
                    {row("Email", b.email.clone())}
                    {row("Phone", b.phone.clone())}
                    {row("Country", b.country.clone())}
                    {row("Check-in", format_human(b.check_in))}
                    {row("Check-out", format_human(b.check_out))}
                    {row(
                        "Guests",
                        format!(
                            "{} adults, {} children, {} infants",
                            b.adults, b.children, b.infants
                        ),
                    )}
                    {row("Policy", b.cancellation_policy.label().to_string())}
                    {row("Payment", b.payment_status.label().to_string())}
                    {row("Total", b.total_amount.clone())}
                    {row("Amount due", b.amount_due.clone())}
                    {(!b.special_requests.is_empty())
                        .then(|| row("Special requests", b.special_requests.clone()))}
                    {(!b.notes.is_empty()).then(|| row("Notes", b.notes.clone()))}
                </div>
            }
        })
    }
}

#[component]
fn BookingForm(vm: BookingSidePanelViewModel) -> impl IntoView {
    let field_error = move |key: &'static str| {
        Signal::derive(move || vm.field_errors.get().get(key).cloned())
    };

    view! {
        <div class="booking-form">
            <Input
                label="First name"
                required=true
                value=Signal::derive(move || vm.form.get().first_name)
                on_input=Callback::new(move |v| vm.form.update(|f| f.first_name = v))
                error=field_error("first_name")
            />
            <Input
                label="Last name"
                required=true
                value=Signal::derive(move || vm.form.get().last_name)
                on_input=Callback::new(move |v| vm.form.update(|f| f.last_name = v))
                error=field_error("last_name")
            />
            <Input
                label="Email"
                input_type="email"
                required=true
                value=Signal::derive(move || vm.form.get().email)
                on_input=Callback::new(move |v| vm.form.update(|f| f.email = v))
                error=field_error("email")
            />
            <Input
                label="Phone"
                input_type="tel"
                required=true
                value=Signal::derive(move || vm.form.get().phone)
                on_input=Callback::new(move |v| vm.form.update(|f| f.phone = v))
                error=field_error("phone")
            />
            <Input
                label="Country"
                required=true
                value=Signal::derive(move || vm.form.get().country)
                on_input=Callback::new(move |v| vm.form.update(|f| f.country = v))
                error=field_error("country")
            />

            <Input
                label="Check-in"
                input_type="date"
                required=true
                value=Signal::derive(move || {
                    vm.form.get().check_in.map(to_iso_date).unwrap_or_default()
                })
                on_input=Callback::new(move |v: String| {
                    vm.form.update(|f| f.check_in = parse_iso_date(&v));
                })
                error=field_error("check_in")
            />
            <Input
                label="Check-out"
                input_type="date"
                required=true
                value=Signal::derive(move || {
                    vm.form.get().check_out.map(to_iso_date).unwrap_or_default()
                })
                on_input=Callback::new(move |v: String| {
                    vm.form.update(|f| f.check_out = parse_iso_date(&v));
                })
                error=field_error("check_out")
            />

            <GuestCounter
                label="Adults"
                value=Signal::derive(move || vm.form.get().adults)
                on_decrement=Callback::new(move |_| {
                    vm.form.update(|f| {
                        let counts = f.guest_counts().decrement(GuestField::Adults);
                        f.set_guest_counts(counts);
                    });
                })
                on_increment=Callback::new(move |_| {
                    vm.form.update(|f| {
                        let counts = f.guest_counts().increment(GuestField::Adults);
                        f.set_guest_counts(counts);
                    });
                })
            />
            <GuestCounter
                label="Children"
                value=Signal::derive(move || vm.form.get().children)
                on_decrement=Callback::new(move |_| {
                    vm.form.update(|f| {
                        let counts = f.guest_counts().decrement(GuestField::Children);
                        f.set_guest_counts(counts);
                    });
                })
                on_increment=Callback::new(move |_| {
                    vm.form.update(|f| {
                        let counts = f.guest_counts().increment(GuestField::Children);
                        f.set_guest_counts(counts);
                    });
                })
            />
            <GuestCounter
                label="Infants"
                value=Signal::derive(move || vm.form.get().infants)
                on_decrement=Callback::new(move |_| {
                    vm.form.update(|f| {
                        let counts = f.guest_counts().decrement(GuestField::Infants);
                        f.set_guest_counts(counts);
                    });
                })
                on_increment=Callback::new(move |_| {
                    vm.form.update(|f| {
                        let counts = f.guest_counts().increment(GuestField::Infants);
                        f.set_guest_counts(counts);
                    });
                })
            />

            <Select
                label="Payment status"
                value=Signal::derive(move || {
                    payment_status_value(vm.form.get().payment_status).to_string()
                })
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.payment_status = parse_payment_status(&v));
                })
                options=Signal::derive(|| {
                    [
                        PaymentStatus::Unpaid,
                        PaymentStatus::DepositPaid,
                        PaymentStatus::Paid,
                        PaymentStatus::Refunded,
                    ]
                    .into_iter()
                    .map(|s| (payment_status_value(s).to_string(), s.label().to_string()))
                    .collect()
                })
            />
            <Select
                label="Cancellation policy"
                value=Signal::derive(move || {
                    policy_value(vm.form.get().cancellation_policy).to_string()
                })
                on_change=Callback::new(move |v: String| {
                    vm.form.update(|f| f.cancellation_policy = parse_policy(&v));
                })
                options=Signal::derive(|| {
                    [CancellationPolicy::Flex, CancellationPolicy::NonRefundable]
                        .into_iter()
                        .map(|p| (policy_value(p).to_string(), p.label().to_string()))
                        .collect()
                })
            />

            <ManualPricing vm=vm />

            <Textarea
                label="Special requests"
                value=Signal::derive(move || vm.form.get().special_requests)
                on_input=Callback::new(move |v| vm.form.update(|f| f.special_requests = v))
            />
            <Textarea
                label="Internal notes"
                placeholder="Visible to staff only"
                value=Signal::derive(move || vm.form.get().notes)
                on_input=Callback::new(move |v| vm.form.update(|f| f.notes = v))
            />
        </div>
    }
}

/// Override block. The server keeps computing its own figures; these replace
/// them on the guest-facing documents only while the toggle stays on.
#[component]
fn ManualPricing(vm: BookingSidePanelViewModel) -> impl IntoView {
    view! {
        <div class="manual-pricing">
            <label class="manual-pricing__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || vm.form.get().manual_pricing
                    on:change=move |_| {
                        vm.form.update(|f| f.manual_pricing = !f.manual_pricing);
                    }
                />
                <span>{"Override pricing"}</span>
            </label>
            <Show when=move || vm.form.get().manual_pricing>
                <Input
                    label="Nightly rate"
                    value=Signal::derive(move || vm.form.get().manual_nightly_rate)
                    on_input=Callback::new(move |v| {
                        vm.form.update(|f| f.manual_nightly_rate = v);
                    })
                />
                <Input
                    label="Cleaning fee"
                    value=Signal::derive(move || vm.form.get().manual_cleaning_fee)
                    on_input=Callback::new(move |v| {
                        vm.form.update(|f| f.manual_cleaning_fee = v);
                    })
                />
                <Input
                    label="Tourist tax"
                    value=Signal::derive(move || vm.form.get().manual_tourist_tax)
                    on_input=Callback::new(move |v| {
                        vm.form.update(|f| f.manual_tourist_tax = v);
                    })
                />
                <Input
                    label="Total"
                    value=Signal::derive(move || vm.form.get().manual_total)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.manual_total = v))
                />
            </Show>
        </div>
    }
}

#[component]
fn PanelFooter(vm: BookingSidePanelViewModel, toasts: ToastService) -> impl IntoView {
    view! {
        <div class="side-panel__footer">
            <Show
                when=move || vm.mode.get() == PanelMode::View
                fallback=move || view! {
                    <button
                        class="button button--secondary"
                        on:click=move |_| vm.cancel_edit()
                    >
                        {"Cancel"}
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || vm.saving.get()
                        on:click=move |_| vm.save(toasts)
                    >
                        {move || if vm.saving.get() { "Saving…" } else { "Save" }}
                    </button>
                }
            >
                <div class="side-panel__actions">
                    <For
                        each=move || vm.available_actions()
                        key=|action| *action
                        children=move |action| {
                            view! {
                                <button
                                    class="button button--secondary"
                                    disabled=move || vm.saving.get()
                                    on:click=move |_| vm.apply_status_action(action, toasts)
                                >
                                    {action.label()}
                                </button>
                            }
                        }
                    />
                </div>
                <button class="button button--primary" on:click=move |_| vm.enter_edit()>
                    {icon("edit")}
                    {"Edit"}
                </button>
            </Show>
        </div>
    }
}

fn status_class(status: contracts::domain::b001_booking::BookingStatus) -> &'static str {
    use contracts::domain::b001_booking::BookingStatus::*;
    match status {
        Pending => "pending",
        Confirmed => "confirmed",
        Paid => "paid",
        CheckedIn => "checked-in",
        CheckedOut => "checked-out",
        Cancelled => "cancelled",
        NoShow => "no-show",
    }
}

fn payment_status_value(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Unpaid => "unpaid",
        PaymentStatus::DepositPaid => "deposit_paid",
        PaymentStatus::Paid => "paid",
        PaymentStatus::Refunded => "refunded",
    }
}

fn parse_payment_status(value: &str) -> PaymentStatus {
    match value {
        "deposit_paid" => PaymentStatus::DepositPaid,
        "paid" => PaymentStatus::Paid,
        "refunded" => PaymentStatus::Refunded,
        _ => PaymentStatus::Unpaid,
    }
}

fn policy_value(policy: CancellationPolicy) -> &'static str {
    match policy {
        CancellationPolicy::Flex => "flex",
        CancellationPolicy::NonRefundable => "non_refundable",
    }
}

fn parse_policy(value: &str) -> CancellationPolicy {
    match value {
        "non_refundable" => CancellationPolicy::NonRefundable,
        _ => CancellationPolicy::Flex,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_fire_on_ctrl_and_on_cmd() {
        for (ctrl, meta) in [(true, false), (false, true), (true, true)] {
            assert_eq!(panel_shortcut("e", ctrl, meta), Some(PanelShortcut::Edit));
            assert_eq!(panel_shortcut("E", ctrl, meta), Some(PanelShortcut::Edit));
            assert_eq!(panel_shortcut("s", ctrl, meta), Some(PanelShortcut::Save));
            assert_eq!(panel_shortcut("S", ctrl, meta), Some(PanelShortcut::Save));
        }
    }

    #[test]
    fn test_bare_keys_do_not_trigger_edit_or_save() {
        assert_eq!(panel_shortcut("e", false, false), None);
        assert_eq!(panel_shortcut("s", false, false), None);
        assert_eq!(panel_shortcut("x", true, true), None);
    }

    #[test]
    fn test_escape_needs_no_modifier() {
        assert_eq!(panel_shortcut("Escape", false, false), Some(PanelShortcut::Dismiss));
    }
}
