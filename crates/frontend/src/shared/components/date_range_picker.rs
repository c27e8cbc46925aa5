use crate::shared::date_utils::{parse_iso_date, to_iso_date};
use chrono::NaiveDate;
use leptos::prelude::*;

/// Check-in / check-out pair of native date inputs.
///
/// Emits `(check_in, check_out)` on every edit; malformed input surfaces as
/// `None` for that endpoint and is never forwarded as an error.
#[component]
pub fn DateRangePicker(
    #[prop(into)] check_in: Signal<Option<NaiveDate>>,
    #[prop(into)] check_out: Signal<Option<NaiveDate>>,
    on_change: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,
) -> impl IntoView {
    let on_check_in = {
        move |raw: String| {
            let new_check_in = parse_iso_date(&raw);
            on_change.run((new_check_in, check_out.get_untracked()));
        }
    };

    let on_check_out = move |raw: String| {
        let new_check_out = parse_iso_date(&raw);
        on_change.run((check_in.get_untracked(), new_check_out));
    };

    let invalid_order = move || match (check_in.get(), check_out.get()) {
        (Some(ci), Some(co)) => co <= ci,
        _ => false,
    };

    view! {
        <div class="date-range" class:date-range--invalid=invalid_order>
            <div class="form__group">
                <label class="form__label" for="check_in">{"Check-in"}</label>
                <input
                    type="date"
                    id="check_in"
                    class="form__input"
                    prop:value=move || check_in.get().map(to_iso_date).unwrap_or_default()
                    on:change=move |ev| on_check_in(event_target_value(&ev))
                />
            </div>
            <div class="form__group">
                <label class="form__label" for="check_out">{"Check-out"}</label>
                <input
                    type="date"
                    id="check_out"
                    class="form__input"
                    prop:value=move || check_out.get().map(to_iso_date).unwrap_or_default()
                    on:change=move |ev| on_check_out(event_target_value(&ev))
                />
            </div>
            {move || invalid_order().then(|| view! {
                <span class="form__error">{"Check-out must be after check-in"}</span>
            })}
        </div>
    }
}
