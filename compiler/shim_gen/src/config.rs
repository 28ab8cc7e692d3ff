//! Generator configuration.

use std::path::PathBuf;

/// Options for one generation run.
///
/// Passed explicitly to the analyzer and driver; nothing reads process-wide
/// state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    /// Treat every member as needing a shim, disabling the skip of
    /// structurally unnecessary shims.
    pub force_all_wrapping: bool,
    /// Where `generate_range` writes the artifact.
    pub output_path: PathBuf,
    /// Prefix of generated identifiers (`Pnacl_M14_PPB_Foo_Create`).
    pub wrapper_prefix: String,
    /// ABI tag placed on shims and on function-pointer casts.
    pub abi_attribute: String,
    /// Header declaring the shim entry points, included first.
    pub own_header: String,
    /// Directory of the per-interface C headers.
    pub header_dir: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            force_all_wrapping: false,
            output_path: PathBuf::from("temp_pnacl_shim.c"),
            wrapper_prefix: "Pnacl".to_string(),
            abi_attribute: "__attribute__((pnaclcall))".to_string(),
            own_header: "ppapi/generators/pnacl_shim.h".to_string(),
            header_dir: "ppapi/c".to_string(),
        }
    }
}

impl GenConfig {
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn with_force_all_wrapping(mut self, force: bool) -> Self {
        self.force_all_wrapping = force;
        self
    }

    /// Include path of a header in `header_dir`.
    pub fn header_path(&self, file: &str) -> String {
        if self.header_dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{file}", self.header_dir.trim_end_matches('/'))
        }
    }
}
