//! The `generate` command: parse IDL files and write the shim file.

use std::path::PathBuf;

use shim_diagnostic::{Diagnostic, ErrorCode};
use shim_gen::{generate_range, GenConfig};

use super::{report_diagnostics, report_parse_error};

/// Releases requested when `--releases` is not given.
pub const DEFAULT_RELEASES: [&str; 3] = ["M13", "M14", "M15"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub files: Vec<PathBuf>,
    pub releases: Vec<String>,
    pub config: GenConfig,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            files: Vec::new(),
            releases: DEFAULT_RELEASES.iter().map(ToString::to_string).collect(),
            config: GenConfig::default(),
        }
    }
}

/// Parse the arguments following `generate`.
pub fn parse_generate_options(args: &[String]) -> Result<GenerateOptions, String> {
    let mut options = GenerateOptions::default();
    for arg in args {
        if let Some(path) = arg
            .strip_prefix("--output=")
            .or_else(|| arg.strip_prefix("--pnaclshim="))
        {
            if path.is_empty() {
                return Err(format!("missing value for `{arg}`"));
            }
            options.config = options.config.with_output_path(path);
        } else if arg == "--disable-pnacl-opt" {
            options.config = options.config.with_force_all_wrapping(true);
        } else if let Some(list) = arg.strip_prefix("--releases=") {
            options.releases = list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            if options.releases.is_empty() {
                return Err("`--releases` needs at least one release name".to_string());
            }
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else {
            options.files.push(PathBuf::from(arg));
        }
    }
    if options.files.is_empty() {
        return Err("no input files".to_string());
    }
    options.files.sort();
    Ok(options)
}

/// Run generation; returns the exit code.
pub fn generate_shims(options: &GenerateOptions) -> i32 {
    let ast = match shim_parse::parse_files(&options.files) {
        Ok(ast) => ast,
        Err(err) => {
            report_parse_error(&err);
            return 1;
        }
    };

    match generate_range(&ast, &options.releases, &options.config) {
        Ok(summary) => {
            let warnings: Vec<Diagnostic> = summary
                .unknown_releases
                .iter()
                .map(|name| {
                    Diagnostic::warning(ErrorCode::E3002)
                        .with_message(format!("release `{name}` is not defined by any label"))
                })
                .collect();
            report_diagnostics(&warnings);
            println!(
                "wrote {} ({} of {} interface versions wrapped, {} shims)",
                summary.output_path.display(),
                summary.wrapped_versions,
                summary.interface_versions,
                summary.shims
            );
            0
        }
        Err(err) => {
            report_diagnostics(&[err.to_diagnostic()]);
            1
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests use unwrap for brevity")]
mod tests;
