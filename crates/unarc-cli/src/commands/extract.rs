//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::convert_extraction_error;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use log::debug;
use std::env;
use unarc_core::ExtractionConfig;
use unarc_core::Platform;
use unarc_core::extract_with_config;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let config = build_config(args);
    debug!(
        "extracting {} into {} (executable bits: {})",
        args.archive.display(),
        output_dir.display(),
        config.platform.executable_bit
    );

    let report = extract_with_config(&args.archive, &output_dir, &config)
        .map_err(convert_extraction_error)?;

    formatter.format_extraction_result(&output_dir, &report)
}

fn build_config(args: &ExtractArgs) -> ExtractionConfig {
    let platform = if args.no_exec_bit {
        Platform::without_permissions()
    } else {
        Platform::host()
    };

    let config = ExtractionConfig::default().with_platform(platform);
    match &args.staging_dir {
        Some(dir) => config.with_staging_dir(dir),
        None => config,
    }
}
