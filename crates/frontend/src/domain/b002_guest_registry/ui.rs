//! Guest document registration for a booking.
//!
//! Mounted inside the side panel's view mode; staff register each occupant's
//! identity document before arrival, as required for the public-security
//! guest report.

use super::api;
use crate::shared::components::ui::{Input, Select};
use crate::shared::confirm::confirm;
use crate::shared::date_utils::{format_human, parse_iso_date, to_iso_date};
use crate::shared::toast::ToastService;
use contracts::domain::b002_guest_registry::{
    BookingGuest, BookingGuestDto, DocumentType, RegistrationProgress,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn GuestRegistry(
    /// Server id of the booking the registrations belong to.
    booking_id: String,
    /// `number_of_guests` on the booking, for the progress banner.
    expected_guests: u32,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let guests = RwSignal::new(Vec::<BookingGuest>::new());
    let form = RwSignal::new(None::<BookingGuestDto>);
    let saving = RwSignal::new(false);

    let id_for_load = booking_id.clone();
    spawn_local(async move {
        match api::list_guests(&id_for_load).await {
            Ok(list) => guests.set(list),
            Err(message) => log::warn!("failed to load registered guests: {}", message),
        }
    });

    let progress = move || {
        RegistrationProgress::compute(guests.get().len() as u32, expected_guests).message()
    };

    let id_for_save = booking_id.clone();
    let save = move |_| {
        let Some(dto) = form.get_untracked() else {
            return;
        };
        if let Err(message) = dto.validate() {
            toasts.error(message);
            return;
        }
        let booking_id = id_for_save.clone();
        saving.set(true);
        spawn_local(async move {
            let (result, done_message) = match dto.id.clone() {
                Some(guest_id) => (
                    api::update_guest(&booking_id, &guest_id, &dto).await,
                    "Guest updated",
                ),
                None => (api::register_guest(&booking_id, &dto).await, "Guest registered"),
            };
            match result {
                Ok(guest) => {
                    guests.update(|list| {
                        match list.iter_mut().find(|g| g.id == guest.id) {
                            Some(existing) => *existing = guest,
                            None => list.push(guest),
                        }
                    });
                    form.set(None);
                    toasts.success(done_message);
                }
                Err(err) => toasts.error(err.message),
            }
            saving.set(false);
        });
    };

    let id_for_remove = booking_id.clone();
    let remove = move |guest_id: String| {
        if !confirm("Remove this registered guest?") {
            return;
        }
        let booking_id = id_for_remove.clone();
        spawn_local(async move {
            match api::remove_guest(&booking_id, &guest_id).await {
                Ok(()) => guests.update(|list| list.retain(|g| g.id != guest_id)),
                Err(message) => toasts.error(message),
            }
        });
    };
    let remove = Callback::new(remove);

    view! {
        <div class="guest-registry">
            <h3 class="guest-registry__title">{"Registered guests"}</h3>
            {move || progress().map(|message| view! {
                <p class="guest-registry__progress">{message}</p>
            })}

            <For
                each=move || guests.get()
                key=|g| g.id.clone()
                children=move |guest| {
                    let guest_id = guest.id.clone();
                    let editable = guest.clone();
                    view! {
                        <div class="guest-registry__row">
                            <span>{format!("{} {}", guest.first_name, guest.last_name)}</span>
                            <span class="guest-registry__doc">
                                {format!(
                                    "{} {}",
                                    guest.document_type.label(),
                                    guest.document_number
                                )}
                            </span>
                            <span>{format_human(guest.date_of_birth)}</span>
                            <button
                                class="button button--link"
                                on:click=move |_| {
                                    form.set(Some(BookingGuestDto::from(editable.clone())));
                                }
                            >
                                {"Edit"}
                            </button>
                            <button
                                class="button button--link"
                                on:click=move |_| remove.run(guest_id.clone())
                            >
                                {"Remove"}
                            </button>
                        </div>
                    }
                }
            />

            <Show
                when=move || form.get().is_some()
                fallback=move || view! {
                    <button
                        class="button button--secondary"
                        on:click=move |_| form.set(Some(BookingGuestDto::default()))
                    >
                        {"Register a guest"}
                    </button>
                }
            >
                <GuestForm form=form />
                <div class="guest-registry__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| form.set(None)
                    >
                        {"Discard"}
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || saving.get()
                        on:click=save.clone()
                    >
                        {move || if saving.get() { "Saving…" } else { "Save guest" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Identity fields for one occupant. Province/city inputs appear only when
/// the respective country is Italy, matching the validation rules.
#[component]
fn GuestForm(form: RwSignal<Option<BookingGuestDto>>) -> impl IntoView {
    let field = move |get: fn(&BookingGuestDto) -> String| {
        Signal::derive(move || form.get().map(|d| get(&d)).unwrap_or_default())
    };
    let update = move |set: fn(&mut BookingGuestDto, String), value: String| {
        form.update(|dto| {
            if let Some(dto) = dto {
                set(dto, value);
            }
        });
    };

    let italian_birth = move || {
        form.get()
            .map(|d| is_italy_ui(&d.birth_country))
            .unwrap_or(false)
    };
    let italian_document = move || {
        form.get()
            .map(|d| is_italy_ui(&d.document_issue_country))
            .unwrap_or(false)
    };

    view! {
        <div class="guest-form">
            <Input
                label="First name"
                required=true
                value=field(|d| d.first_name.clone())
                on_input=Callback::new(move |v| update(|d, v| d.first_name = v, v))
            />
            <Input
                label="Last name"
                required=true
                value=field(|d| d.last_name.clone())
                on_input=Callback::new(move |v| update(|d, v| d.last_name = v, v))
            />
            <Input
                label="Date of birth"
                input_type="date"
                required=true
                value=field(|d| d.date_of_birth.map(to_iso_date).unwrap_or_default())
                on_input=Callback::new(move |v: String| {
                    update(|d, v| d.date_of_birth = parse_iso_date(&v), v)
                })
            />
            <Input
                label="Nationality"
                required=true
                placeholder="Country code, e.g. IT"
                value=field(|d| d.nationality.clone())
                on_input=Callback::new(move |v| update(|d, v| d.nationality = v, v))
            />
            <Input
                label="Birth country"
                required=true
                value=field(|d| d.birth_country.clone())
                on_input=Callback::new(move |v| update(|d, v| d.birth_country = v, v))
            />
            <Show when=italian_birth>
                <Input
                    label="Birth province"
                    required=true
                    value=field(|d| d.birth_province.clone())
                    on_input=Callback::new(move |v| update(|d, v| d.birth_province = v, v))
                />
                <Input
                    label="Birth city"
                    required=true
                    value=field(|d| d.birth_city.clone())
                    on_input=Callback::new(move |v| update(|d, v| d.birth_city = v, v))
                />
            </Show>

            <Select
                label="Document type"
                value=Signal::derive(move || {
                    form.get()
                        .map(|d| document_type_value(d.document_type).to_string())
                        .unwrap_or_default()
                })
                on_change=Callback::new(move |v: String| {
                    form.update(|dto| {
                        if let Some(dto) = dto {
                            dto.document_type = parse_document_type(&v);
                        }
                    });
                })
                options=Signal::derive(|| {
                    [
                        DocumentType::Passport,
                        DocumentType::IdentityCard,
                        DocumentType::DrivingLicense,
                    ]
                    .into_iter()
                    .map(|t| (document_type_value(t).to_string(), t.label().to_string()))
                    .collect()
                })
            />
            <Input
                label="Document number"
                required=true
                value=field(|d| d.document_number.clone())
                on_input=Callback::new(move |v| update(|d, v| d.document_number = v, v))
            />
            <Input
                label="Issue country"
                required=true
                value=field(|d| d.document_issue_country.clone())
                on_input=Callback::new(move |v| {
                    update(|d, v| d.document_issue_country = v, v)
                })
            />
            <Show when=italian_document>
                <Input
                    label="Issue province"
                    required=true
                    value=field(|d| d.document_issue_province.clone())
                    on_input=Callback::new(move |v| {
                        update(|d, v| d.document_issue_province = v, v)
                    })
                />
                <Input
                    label="Issue city"
                    required=true
                    value=field(|d| d.document_issue_city.clone())
                    on_input=Callback::new(move |v| {
                        update(|d, v| d.document_issue_city = v, v)
                    })
                />
            </Show>
            <Input
                label="Issue date"
                input_type="date"
                value=field(|d| d.document_issue_date.map(to_iso_date).unwrap_or_default())
                on_input=Callback::new(move |v: String| {
                    update(|d, v| d.document_issue_date = parse_iso_date(&v), v)
                })
            />
            <Input
                label="Expiry date"
                input_type="date"
                value=field(|d| d.document_expiry_date.map(to_iso_date).unwrap_or_default())
                on_input=Callback::new(move |v: String| {
                    update(|d, v| d.document_expiry_date = parse_iso_date(&v), v)
                })
            />
        </div>
    }
}

// Mirrors the validation's country matching so the conditional inputs show
// up exactly when their values become required.
fn is_italy_ui(country: &str) -> bool {
    let c = country.trim();
    c.eq_ignore_ascii_case("IT") || c.eq_ignore_ascii_case("ITA") || c.eq_ignore_ascii_case("Italy")
}

fn document_type_value(t: DocumentType) -> &'static str {
    match t {
        DocumentType::Passport => "passport",
        DocumentType::IdentityCard => "identity_card",
        DocumentType::DrivingLicense => "driving_license",
    }
}

fn parse_document_type(value: &str) -> DocumentType {
    match value {
        "identity_card" => DocumentType::IdentityCard,
        "driving_license" => DocumentType::DrivingLicense,
        _ => DocumentType::Passport,
    }
}
