// Carepoint Digital landing page, Leptos 0.8 edition
// Developed by the Carepoint Digital team (c)2025

mod backend;
mod logging;
mod sections;

use backend::RestLeadSink;
use leadform::SiteConfig;
use leptos::prelude::*;
use sections::*;

/// Embedded at build time; see `site.toml` next to this crate's manifest.
const SITE_TOML: &str = include_str!("../site.toml");

fn site_config() -> SiteConfig {
    let mut config = SiteConfig::load_or_default(SITE_TOML);
    config.backend = config.backend.with_overrides(
        option_env!("LEADS_BACKEND_URL"),
        option_env!("LEADS_ANON_KEY"),
    );
    config
}

fn main() {
    console_error_panic_hook::set_once();

    let config = site_config();
    logging::init(&config.logging.level);
    tracing::info!(
        "Starting carepoint-landing v{} (backend configured: {})",
        env!("CARGO_PKG_VERSION"),
        config.backend.is_configured()
    );

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_context(ToastQueue::new());
    provide_context(RestLeadSink::new(config.backend));

    view! {
        <Nav />
        <main>
            <Hero />
            <Services />
            <About />
            <Contact />
        </main>
        <Footer />
        <Toaster />
    }
}
