use crate::shared::icons::icon;
use leptos::prelude::*;

/// Bounded `− n +` counter for one guest field.
///
/// The component itself enforces nothing; the owner passes already-clamped
/// callbacks (see `GuestCounts`), so a rejected update simply re-renders the
/// unchanged value.
#[component]
pub fn GuestCounter(
    #[prop(into)] label: String,
    #[prop(optional, into)] hint: MaybeProp<String>,
    #[prop(into)] value: Signal<u32>,
    on_decrement: Callback<()>,
    on_increment: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="guest-counter">
            <div class="guest-counter__text">
                <span class="guest-counter__label">{label}</span>
                {move || hint.get().map(|h| view! {
                    <span class="guest-counter__hint">{h}</span>
                })}
            </div>
            <div class="guest-counter__controls">
                <button
                    type="button"
                    class="guest-counter__button"
                    on:click=move |_| on_decrement.run(())
                >
                    {icon("minus")}
                </button>
                <span class="guest-counter__value">{move || value.get()}</span>
                <button
                    type="button"
                    class="guest-counter__button"
                    on:click=move |_| on_increment.run(())
                >
                    {icon("plus")}
                </button>
            </div>
        </div>
    }
}
