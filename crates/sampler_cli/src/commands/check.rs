//! Check command implementation
//!
//! Validates a request without drawing and reports the effective
//! configuration.

use std::io::Write;

use clap::Args;
use sampler_core::report::write_parameters;
use sampler_core::validate;
use tracing::info;

use super::RequestArgs;
use crate::config::SamplerConfig;
use crate::Result;

/// Arguments of the `check` command
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}

/// Run the check command
pub fn run<W: Write>(args: &CheckArgs, config: &SamplerConfig, out: &mut W) -> Result<()> {
    info!("Checking request...");

    let request = args.request.to_request()?;
    write_parameters(out, &request)?;
    writeln!(out)?;

    let validated = validate(&request)?;
    for warning in validated.warnings() {
        writeln!(out, "Warning: {}", warning)?;
    }
    writeln!(
        out,
        "Request OK: {} distribution, {} values",
        validated.kind(),
        validated.size()
    )?;

    writeln!(
        out,
        "Configuration: seed={}, format={:?}, chart={:?}, bins={}",
        config
            .seed
            .map_or_else(|| "entropy".to_string(), |s| s.to_string()),
        config.format,
        config.chart,
        config.bins
    )?;

    info!("Check complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use sampler_core::SamplerError;

    fn check(request: RequestArgs) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(&CheckArgs { request }, &SamplerConfig::default(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_request() {
        let (result, text) = check(RequestArgs {
            kind: Some("binomial".to_string()),
            size: Some("1000".to_string()),
            trials: Some(10),
            prob: Some(0.5),
            ..RequestArgs::default()
        });

        assert!(result.is_ok());
        assert!(text.contains("trials: 10"));
        assert!(text.contains("Request OK: Binomial distribution, 1000 values"));
        assert!(text.contains("seed=entropy"));
    }

    #[test]
    fn test_irrelevant_parameter_reported() {
        let (result, text) = check(RequestArgs {
            kind: Some("Poisson".to_string()),
            size: Some("5".to_string()),
            lam: Some(1.0),
            prob: Some(0.2),
            ..RequestArgs::default()
        });

        assert!(result.is_ok());
        assert!(text.contains("Warning: "));
        assert!(text.contains("prob"));
    }

    #[test]
    fn test_missing_parameter_fails_after_parameters_printed() {
        let (result, text) = check(RequestArgs {
            kind: Some("Normal".to_string()),
            size: Some("10".to_string()),
            mean: Some(0.0),
            ..RequestArgs::default()
        });

        assert!(matches!(
            result,
            Err(CliError::Sampler(SamplerError::MissingRequiredParameter { .. }))
        ));
        assert!(text.contains("sd: None"));
        assert!(!text.contains("Request OK"));
    }
}
