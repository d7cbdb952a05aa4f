use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"Carepoint Digital"</span>
                    <p class="footer-tagline">
                        "Compliance-first web technology for dental and healthcare practices."
                    </p>
                </div>
                <div class="footer-links">
                    <a href="#services" class="footer-link">"Services"</a>
                    <a href="#about" class="footer-link">"About"</a>
                    <a href=format!("#{}", super::CONTACT_ANCHOR) class="footer-link">"Contact"</a>
                    <a href="mailto:hello@carepoint.dev" class="footer-link">"hello@carepoint.dev"</a>
                </div>
                <p class="footer-copyright">
                    "(c)2025 Carepoint Digital. HIPAA, PCI DSS and SOC 2 aligned."
                </p>
            </div>
        </footer>
    }
}
