//! Lendform Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lendform_player::application::services::{AppDataService, OpusService};
use lendform_player::infrastructure::http_client::OpusHttpClient;
use lendform_player::ports::outbound::{OpusApiPort, PlatformPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lendform_player=debug,lendform_domain=info,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Lendform Player");

    // Platform
    let platform = lendform_player::infrastructure::platform::create_platform();
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // HTTP
    let engine_url = platform.engine_base_url();
    tracing::info!(%engine_url, "Using engine");
    let api: Arc<dyn OpusApiPort> = Arc::new(OpusHttpClient::new(engine_url));

    let services = lendform_player::presentation::Services::new(
        AppDataService::new(platform.clone()),
        OpusService::new(api, platform.clone()),
    );

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Lendform"));
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(services)
        .launch(lendform_player::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/output.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
