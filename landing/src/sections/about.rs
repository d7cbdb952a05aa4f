use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("100+", "Projects Completed"),
    ("100%", "Compliance Rate"),
    ("10+", "Years Experience"),
    ("24/7", "Support Available"),
];

const REASONS: [(&str, &str); 4] = [
    (
        "Healthcare-Focused:",
        "Deep understanding of medical practice workflows and patient interaction requirements.",
    ),
    (
        "Compliance First:",
        "Every solution is built with HIPAA, PCI, PHIPA, PIPEDA, and SOC 2 compliance as a foundation.",
    ),
    (
        "Proven Results:",
        "Track record of improving patient acquisition and practice efficiency.",
    ),
    (
        "Ongoing Support:",
        "Continuous monitoring, updates, and support to ensure optimal performance.",
    ),
];

/// Scroll the contact section into view (smooth via `scroll-behavior` in CSS).
fn scroll_to_contact() {
    if let Some(section) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(super::CONTACT_ANCHOR))
    {
        section.scroll_into_view();
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container about-grid">
                <div class="about-copy">
                    <h2 class="section-title">"15+ Years of Healthcare Technology Expertise"</h2>
                    <p class="about-text">
                        "As a seasoned web developer with over 15 years of experience, I specialize in creating "
                        "technology solutions specifically for healthcare practices. My deep understanding of "
                        "compliance requirements and industry challenges ensures your practice gets solutions "
                        "that work seamlessly and securely."
                    </p>
                    <p class="about-text">
                        "From small dental practices to large healthcare organizations, I've helped hundreds "
                        "of clients improve their digital presence, streamline operations, and maintain strict "
                        "compliance standards while growing their business."
                    </p>

                    <div class="stats-grid">
                        {STATS
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="stat-tile">
                                        <div class="stat-value">{value}</div>
                                        <div class="stat-label">{label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button class="btn btn-primary" on:click=move |_| scroll_to_contact()>
                        "Schedule a Consultation"
                    </button>
                </div>

                <div class="about-reasons">
                    <h3>"Why Choose Our Solutions?"</h3>
                    <ul class="reason-list">
                        {REASONS
                            .into_iter()
                            .map(|(lead, text)| {
                                view! {
                                    <li>
                                        <span class="reason-dot"></span>
                                        <div>
                                            <strong>{lead}</strong>
                                            " "
                                            {text}
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
