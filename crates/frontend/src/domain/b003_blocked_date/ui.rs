//! Dialog for blocking out calendar dates without a booking.

use super::api;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::{parse_iso_date, to_iso_date};
use crate::shared::toast::ToastService;
use contracts::domain::b003_blocked_date::{BlockReason, BlockedDateDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn BlockDatesDialog(
    open: RwSignal<bool>,
    /// Fires after a block is created so the calendar can refetch the month.
    on_created: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let form = RwSignal::new(BlockedDateDto::default());
    let saving = RwSignal::new(false);

    let close = move || {
        form.set(BlockedDateDto::default());
        open.set(false);
    };

    let save = move |_| {
        let dto = form.get_untracked();
        if let Err(message) = dto.validate() {
            toasts.error(message);
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::create_blocked_date(&dto).await {
                Ok(_) => {
                    toasts.success("Dates blocked");
                    form.set(BlockedDateDto::default());
                    open.set(false);
                    on_created.run(());
                }
                Err(err) => toasts.error(err.message),
            }
            saving.set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog__backdrop" on:click=move |_| close()></div>
            <div class="dialog block-dates">
                <h2 class="dialog__title">{"Block dates"}</h2>

                <Input
                    label="From"
                    input_type="date"
                    required=true
                    value=Signal::derive(move || {
                        form.get().start_date.map(to_iso_date).unwrap_or_default()
                    })
                    on_input=Callback::new(move |v: String| {
                        form.update(|f| f.start_date = parse_iso_date(&v));
                    })
                />
                <Input
                    label="To"
                    input_type="date"
                    required=true
                    value=Signal::derive(move || {
                        form.get().end_date.map(to_iso_date).unwrap_or_default()
                    })
                    on_input=Callback::new(move |v: String| {
                        form.update(|f| f.end_date = parse_iso_date(&v));
                    })
                />
                <Select
                    label="Reason"
                    value=Signal::derive(move || reason_value(form.get().reason).to_string())
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.reason = parse_reason(&v));
                    })
                    options=Signal::derive(|| {
                        BlockReason::ALL
                            .into_iter()
                            .map(|r| (reason_value(r).to_string(), r.label().to_string()))
                            .collect()
                    })
                />
                <Textarea
                    label="Notes"
                    placeholder="Optional"
                    value=Signal::derive(move || form.get().notes)
                    on_input=Callback::new(move |v| form.update(|f| f.notes = v))
                />

                <div class="dialog__actions">
                    <button class="button button--secondary" on:click=move |_| close()>
                        {"Cancel"}
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || saving.get()
                        on:click=save
                    >
                        {move || if saving.get() { "Blocking…" } else { "Block" }}
                    </button>
                </div>
            </div>
        </Show>
    }
}

fn reason_value(reason: BlockReason) -> &'static str {
    match reason {
        BlockReason::Maintenance => "maintenance",
        BlockReason::OwnerUse => "owner_use",
        BlockReason::Other => "other",
    }
}

fn parse_reason(value: &str) -> BlockReason {
    match value {
        "owner_use" => BlockReason::OwnerUse,
        "other" => BlockReason::Other,
        _ => BlockReason::Maintenance,
    }
}
