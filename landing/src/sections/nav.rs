use leptos::prelude::*;

const LINKS: [(&str, &str); 2] = [("#services", "Services"), ("#about", "About")];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <div class="nav-logo">
                        <img src="assets/carepoint-logo.svg" alt="Carepoint Digital" />
                    </div>
                    <span class="nav-title">"Carepoint Digital"</span>
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="nav-link" on:click=move |_| set_menu_open.set(false)>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=format!("#{}", super::CONTACT_ANCHOR)
                        class="nav-cta"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        "Free Consultation"
                    </a>
                </div>
            </div>
        </nav>
    }
}
