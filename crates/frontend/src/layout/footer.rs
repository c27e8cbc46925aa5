use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>{"Casa Limoneto"}</span>
            <span class="site-footer__contact">{"hello@casalimoneto.example"}</span>
        </footer>
    }
}
