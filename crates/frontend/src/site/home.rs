use super::api;
use contracts::shared::site::{GalleryImage, HostProfile};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Landing page: photo carousel, property pitch, host card, booking entry.
/// Every remote section degrades to nothing on failure; the booking link must
/// work even when the image host is down.
#[component]
pub fn HomePage() -> impl IntoView {
    let gallery = RwSignal::new(Vec::<GalleryImage>::new());
    let host = RwSignal::new(None::<HostProfile>);

    spawn_local(async move {
        match api::fetch_gallery().await {
            Ok(mut images) => {
                images.sort_by_key(|img| img.sort_order);
                gallery.set(images);
            }
            Err(message) => log::warn!("gallery unavailable: {}", message),
        }
    });
    spawn_local(async move {
        match api::fetch_host_profile().await {
            Ok(profile) => host.set(Some(profile)),
            Err(message) => log::warn!("host profile unavailable: {}", message),
        }
    });

    view! {
        <div class="page home">
            <section class="home__hero">
                <h1 class="home__title">{"Casa Limoneto"}</h1>
                <p class="home__tagline">
                    {"A quiet vacation home above the coast, sleeping up to five guests."}
                </p>
                <a class="button button--primary home__cta" href="/book">
                    {"Check availability"}
                </a>
            </section>

            <Gallery images=gallery />

            <section class="home__details">
                <h2>{"The house"}</h2>
                <ul class="home__features">
                    <li>{"Two bedrooms, sleeps 5"}</li>
                    <li>{"Full kitchen and laundry"}</li>
                    <li>{"Terrace with sea view"}</li>
                    <li>{"Free parking"}</li>
                </ul>
            </section>

            <HostCard host=host />
        </div>
    }
}

#[component]
fn Gallery(images: RwSignal<Vec<GalleryImage>>) -> impl IntoView {
    let current = RwSignal::new(0usize);

    let step = move |delta: isize| {
        let len = images.get_untracked().len();
        if len == 0 {
            return;
        }
        current.update(|i| *i = (*i as isize + delta).rem_euclid(len as isize) as usize);
    };

    view! {
        <Show when=move || !images.get().is_empty()>
            <section class="gallery">
                {move || {
                    images.get().get(current.get()).map(|image| view! {
                        <img class="gallery__image" src=image.url.clone() alt=image.caption.clone() />
                    })
                }}
                <button class="gallery__nav gallery__nav--prev" on:click=move |_| step(-1)>
                    {"‹"}
                </button>
                <button class="gallery__nav gallery__nav--next" on:click=move |_| step(1)>
                    {"›"}
                </button>
                <span class="gallery__counter">
                    {move || format!("{} / {}", current.get() + 1, images.get().len())}
                </span>
            </section>
        </Show>
    }
}

#[component]
fn HostCard(host: RwSignal<Option<HostProfile>>) -> impl IntoView {
    move || {
        host.get().map(|profile| {
            view! {
                <section class="host-card">
                    <Show when={
                        let avatar = profile.avatar_url.clone();
                        move || !avatar.is_empty()
                    }>
                        <img class="host-card__avatar" src=profile.avatar_url.clone() alt="" />
                    </Show>
                    <div class="host-card__text">
                        <h2>{format!("Hosted by {}", profile.display_name)}</h2>
                        <p>{profile.bio.clone()}</p>
                        {(!profile.languages.is_empty()).then(|| view! {
                            <p class="host-card__languages">
                                {format!("Speaks {}", profile.languages.join(", "))}
                            </p>
                        })}
                    </div>
                </section>
            }
        })
    }
}
