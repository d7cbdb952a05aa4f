use leptos::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

static SERVICES: [Service; 3] = [
    Service {
        icon: "assets/seo-icon.svg",
        title: "SEO Optimization",
        description: "Drive more patients to your practice with targeted SEO strategies that improve search rankings and local visibility.",
        features: &[
            "Local SEO for healthcare",
            "Medical keyword optimization",
            "Google My Business management",
            "Healthcare content strategy",
        ],
    },
    Service {
        icon: "assets/webapp-icon.svg",
        title: "Custom Web Applications",
        description: "Streamline your practice with custom booking systems, payment processing, and patient management solutions.",
        features: &[
            "Appointment booking systems",
            "Payment collection portals",
            "Patient communication tools",
            "Practice management integrations",
        ],
    },
    Service {
        icon: "assets/compliance-icon.svg",
        title: "Compliance & Security",
        description: "Ensure your digital infrastructure meets all HIPAA, PCI, and industry regulations with our expert implementation.",
        features: &[
            "HIPAA compliance auditing",
            "PCI DSS certification",
            "Data encryption & protection",
            "Regular security assessments",
        ],
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Comprehensive Technology Solutions"</h2>
                    <p class="section-description">
                        "From SEO optimization to custom development, we provide end-to-end solutions "
                        "that help healthcare practices thrive in the digital landscape."
                    </p>
                </div>
                <div class="services-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=service /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    let alt = format!("{} icon", service.title);
    view! {
        <div class="card service-card">
            <div class="service-icon">
                <img src=service.icon alt=alt />
            </div>
            <h3 class="card-title">{service.title}</h3>
            <p class="card-description">{service.description}</p>
            <ul class="bullet-list">
                {service
                    .features
                    .iter()
                    .map(|feature| view! { <li><span class="bullet"></span>{*feature}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
