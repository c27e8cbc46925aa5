use leptos::prelude::*;

/// Post-payment landing page. The payment provider (or the flow itself, for
/// fully-credited bookings) redirects here with `?booking=<code>`.
#[component]
pub fn ConfirmationPage() -> impl IntoView {
    let booking_code = booking_code_from_url();

    view! {
        <div class="page confirmation">
            <h1 class="confirmation__title">{"Booking confirmed"}</h1>
            {match booking_code {
                Some(code) => view! {
                    <p class="confirmation__text">
                        {"Your booking "}
                        <strong>{code}</strong>
                        {" is confirmed. A confirmation email with your details is on its way."}
                    </p>
                }
                .into_any(),
                None => view! {
                    <p class="confirmation__text">
                        {"Your booking is confirmed. A confirmation email is on its way."}
                    </p>
                }
                .into_any(),
            }}
            <a class="button button--secondary" href="/my-bookings">
                {"View my bookings"}
            </a>
        </div>
    }
}

fn booking_code_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("booking").filter(|code| !code.is_empty())
}
