//! CLI configuration: thin wrapper around `amc_config` that honours the
//! `--config` flag and builds the service clients.

use std::path::PathBuf;

use amc_api::{ActiveModeClient, RadioControllerClient};
use amc_core::{Reconciler, ServiceSinks};
use tracing::debug;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use amc_config::Config;

/// Config file in effect: `--config` / `AMC_CONFIG`, else the platform path.
pub fn effective_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(amc_config::config_path)
}

/// Load and validate the layered configuration.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let config = amc_config::load_config(global.config.as_deref())?;
    Ok(config)
}

/// Reconciler wired to the configured HTTP services.
pub fn build_reconciler(
    config: &Config,
) -> Result<Reconciler<ActiveModeClient, ServiceSinks>, CliError> {
    let http = config.to_transport().build_client()?;

    let radio_controller =
        RadioControllerClient::with_client(&config.services.radio_controller_url, http.clone())?;
    let active_mode = ActiveModeClient::with_client(&config.services.active_mode_url, http)?;

    debug!(
        radio_controller = %radio_controller.base_url(),
        active_mode = %active_mode.base_url(),
        "service clients ready"
    );

    Ok(Reconciler::new(
        config.to_reconciler_config(),
        active_mode.clone(),
        ServiceSinks::new(radio_controller, active_mode),
    ))
}
