//! CLI command implementations

pub mod check;
pub mod draw;

use std::path::{Path, PathBuf};

use clap::Args;
use sampler_core::{parse_size, ParameterUpdate, SampleRequest, SamplerError};
use tracing::debug;

use crate::{CliError, Result};

/// Request arguments shared by `draw` and `check`.
///
/// Flags override the matching fields of a `--request` file.
#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Distribution kind (Normal, Poisson, Binomial)
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Number of values to draw
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Normal mean
    #[arg(long, allow_negative_numbers = true)]
    pub mean: Option<f64>,

    /// Normal standard deviation
    #[arg(long, allow_negative_numbers = true)]
    pub sd: Option<f64>,

    /// Poisson rate
    #[arg(long, allow_negative_numbers = true)]
    pub lam: Option<f64>,

    /// Binomial trial count
    #[arg(long)]
    pub trials: Option<u64>,

    /// Binomial success probability
    #[arg(long, allow_negative_numbers = true)]
    pub prob: Option<f64>,

    /// TOML file holding a full request
    #[arg(short, long)]
    pub request: Option<PathBuf>,
}

impl RequestArgs {
    /// Builds the request from the optional file and the flags.
    pub fn to_request(&self) -> Result<SampleRequest> {
        let mut request = match &self.request {
            Some(path) => load_request(path)?,
            None => {
                if self.kind.is_none() || self.size.is_none() {
                    return Err(CliError::InvalidArgument(
                        "--kind and --size are required unless --request is given".to_string(),
                    ));
                }
                SampleRequest::default()
            }
        };

        let mut update = ParameterUpdate::default();
        if let Some(kind) = &self.kind {
            update = update.kind(kind.as_str());
        }
        if let Some(size) = &self.size {
            update = update.size(parse_size(size)?);
        }
        if let Some(mean) = self.mean {
            update = update.mean(mean);
        }
        if let Some(sd) = self.sd {
            update = update.sd(sd);
        }
        if let Some(lam) = self.lam {
            update = update.lam(lam);
        }
        if let Some(trials) = self.trials {
            update = update.trials(trials);
        }
        if let Some(prob) = self.prob {
            update = update.prob(prob);
        }
        request.apply(update);

        debug!(?request, "request assembled");
        Ok(request)
    }
}

/// Reads a [`SampleRequest`] from a TOML file.
///
/// `size` may be an integer or a string; anything that is not an integer
/// literal fails with [`SamplerError::InvalidSize`], as on the command line.
pub fn load_request(path: &Path) -> Result<SampleRequest> {
    let file_error = |message: String| CliError::RequestFile {
        path: path.display().to_string(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
    let mut table: toml::Table =
        toml::from_str(&content).map_err(|e| file_error(e.to_string()))?;

    let size = table.remove("size").map(|value| size_from_toml(&value)).transpose()?;

    let mut request: SampleRequest = toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| file_error(e.to_string()))?;
    request.size = size;
    Ok(request)
}

fn size_from_toml(value: &toml::Value) -> Result<i64> {
    match value {
        toml::Value::Integer(size) => Ok(*size),
        toml::Value::String(text) => Ok(parse_size(text)?),
        other => Err(SamplerError::InvalidSize {
            value: other.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flags_only() {
        let args = RequestArgs {
            kind: Some("Binomial".to_string()),
            size: Some("1000".to_string()),
            trials: Some(10),
            prob: Some(0.5),
            ..RequestArgs::default()
        };

        let request = args.to_request().unwrap();
        assert_eq!(request, SampleRequest::new("Binomial", 1000).trials(10).prob(0.5));
    }

    #[test]
    fn test_missing_kind_without_file() {
        let args = RequestArgs {
            size: Some("10".to_string()),
            ..RequestArgs::default()
        };
        assert!(matches!(args.to_request(), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_fractional_size_rejected() {
        let args = RequestArgs {
            kind: Some("Poisson".to_string()),
            size: Some("10.5".to_string()),
            lam: Some(2.0),
            ..RequestArgs::default()
        };
        assert!(matches!(
            args.to_request(),
            Err(CliError::Sampler(SamplerError::InvalidSize { .. }))
        ));
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kind = \"Normal\"\nsize = 100\nmean = 1.0\nsd = 2.0").unwrap();

        let args = RequestArgs {
            sd: Some(4.0),
            request: Some(file.path().to_path_buf()),
            ..RequestArgs::default()
        };

        let request = args.to_request().unwrap();
        assert_eq!(request, SampleRequest::new("Normal", 100).mean(1.0).sd(4.0));
    }

    #[test]
    fn test_load_request_size_forms() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kind = \"Poisson\"\nsize = \"25\"\nlam = 2.0").unwrap();
        assert_eq!(load_request(file.path()).unwrap().size, Some(25));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kind = \"Poisson\"\nlam = 2.0").unwrap();
        assert_eq!(load_request(file.path()).unwrap().size, None);

        for bad in ["10.5", "\"ten\"", "true"] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "kind = \"Poisson\"\nsize = {}\nlam = 2.0", bad).unwrap();
            assert!(
                matches!(
                    load_request(file.path()),
                    Err(CliError::Sampler(SamplerError::InvalidSize { .. }))
                ),
                "size = {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_load_request_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kind = \"Normal\"\nshape = 3").unwrap();

        match load_request(file.path()) {
            Err(CliError::RequestFile { path, .. }) => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("Expected request file error, got {:?}", other),
        }
    }
}
