pub mod info;
pub mod show;

use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use plocar::engine::config::DecodeConfig;
use plocar::engine::progress::ProgressReporter;
use plocar::workflows::read::{PlocarData, read_plocar};
use std::path::Path;
use tracing::info;

/// Decodes `input` (or the default `PLOCAR`) with a progress bar unless `quiet`.
fn decode_input(input: Option<&Path>, config: &DecodeConfig, quiet: bool) -> Result<PlocarData> {
    let progress_handler = CliProgressHandler::new(!quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core decode workflow...");
    let data = read_plocar(input, config, &reporter)?;
    info!("Decoded PLO array with shape {:?}.", data.plo.shape());
    Ok(data)
}
