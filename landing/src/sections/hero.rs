use leptos::prelude::*;

const TRUST_INDICATORS: [&str; 3] = ["HIPAA Compliant", "PCI Certified", "SOC 2 Compliant"];

#[component]
pub fn Hero() -> impl IntoView {
    let contact_href = format!("#{}", super::CONTACT_ANCHOR);
    view! {
        <section class="hero">
            <div class="hero-overlay"></div>
            <div class="container hero-content">
                <h1 class="hero-title">
                    "Healthcare Technology Solutions"
                    <span class="hero-title-accent">"Built for Compliance"</span>
                </h1>
                <p class="hero-description">
                    "Empowering dental practices and healthcare businesses with custom web applications, "
                    "SEO optimization, and HIPAA/PCI compliant solutions that drive growth and protect patient data."
                </p>
                <div class="hero-actions">
                    <a href=contact_href class="btn btn-hero">
                        "Get Started Today"
                    </a>
                    <a href="#services" class="btn btn-outline">
                        "View Our Work"
                    </a>
                </div>
                <div class="hero-trust">
                    {TRUST_INDICATORS
                        .into_iter()
                        .map(|label| {
                            view! {
                                <div class="trust-item">
                                    <span class="trust-dot"></span>
                                    <span class="trust-label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
