use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::layout::Shell;
use anyhow::Context;
use contracts::shared::catalog::Catalog;
use contracts::shared::config::load_config;
use leptos::prelude::*;

/// Deployment overrides compiled into the bundle
const DEPLOYMENT_CONFIG: &str = include_str!("../config/deployment.toml");

fn boot() -> anyhow::Result<AppGlobalContext> {
    let config = load_config(Some(DEPLOYMENT_CONFIG)).context("loading deployment config")?;
    let catalog = Catalog::embedded().context("loading program catalog")?;
    log::info!(
        "catalog: {} programs, cost unit {:?}, date filter {:?}",
        catalog.len(),
        config.filters.cost_unit,
        config.filters.date_scope
    );
    Ok(AppGlobalContext::new(catalog, config))
}

#[component]
pub fn App() -> impl IntoView {
    match boot() {
        Ok(ctx) => {
            // Provide the AppGlobalContext store to the whole app via context.
            provide_context(ctx);
            // Provide ModalService for the program detail modal
            provide_context(ModalService::new());

            view! { <Shell /> }.into_any()
        }
        Err(e) => {
            log::error!("startup failed: {:#}", e);
            view! {
                <div class="boot-error">
                    <h2>"The program directory could not be loaded."</h2>
                    <pre>{format!("{:#}", e)}</pre>
                </div>
            }
            .into_any()
        }
    }
}
