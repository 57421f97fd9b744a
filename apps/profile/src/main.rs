use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile_core::config::Config;
use profile_core::resume::{find_template_by_name, templates, ResumePreview};
use profile_core::sections::{profile_menu, MenuTarget};
use profile_core::{FileStore, ProfileStore, SectionRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("profile_core={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting profile core v{}", env!("CARGO_PKG_VERSION"));
    info!("Profile data directory: {}", config.data_dir.display());

    let kv = Arc::new(FileStore::new(config.data_dir.clone()));
    let store = ProfileStore::load(kv, config.persist_policy()).await;

    if store.state().is_empty() {
        info!("No saved profile found; starting empty");
    }

    let renderer = SectionRenderer::new(store.state());
    for section in profile_menu() {
        let count = section.entry_count(store.state());
        match section.target {
            MenuTarget::Section(category) => {
                let view = renderer.view_of(category);
                if view.is_empty() {
                    info!("{}: {}", section.title, view.empty_message);
                } else {
                    info!("{}: {} entries (add via {})", section.title, count, view.add_route);
                }
            }
            _ => info!("{}: {}", section.title, if count > 0 { "set" } else { "not set" }),
        }
    }

    let template = match find_template_by_name(&config.resume_template) {
        Some(t) => t,
        None => {
            warn!(
                "Unknown template '{}', falling back to the first one",
                config.resume_template
            );
            templates()
                .first()
                .context("template catalog is empty")?
        }
    };

    let preview = ResumePreview::from_state(store.state(), template);
    println!("{}", serde_json::to_string_pretty(&preview)?);

    store.shutdown().await;
    Ok(())
}
