//! Release-range driver.
//!
//! Expands every interface into its distinct versions over the requested
//! releases, decides per version whether a wrapper table is needed, and
//! assembles the shim file.
//!
//! ```text
//! interfaces ──▶ determine_interfaces ──▶ [InterfaceVersion]
//!                                              │
//!                      ┌───────────────────────┼─────────────────────┐
//!                      ▼                       ▼                     ▼
//!            generate_wrapper_methods    wrapper tables      wrapper infos
//!                      └────────────── generate_artifact ────────────┘
//! ```

use std::path::PathBuf;

use rustc_hash::FxHashSet;
use shim_cgen::{CGen, SignatureStyle, TypeMode};
use shim_ir::{Ast, Directionality, Interface, Release, SourceFile, Version};

use crate::analysis::WrapAnalyzer;
use crate::config::GenConfig;
use crate::emit::{ShimEmitter, ShimTarget};
use crate::error::GenError;
use crate::preamble;
use crate::writer::CodeWriter;

/// One interface at one distinct version.
#[derive(Clone, Debug)]
pub struct InterfaceVersion<'a> {
    pub iface: &'a Interface,
    pub file: &'a SourceFile,
    /// First requested release at which this version is in effect.
    pub release: Release,
    pub version: Version,
    pub struct_name: String,
    pub interface_macro: String,
    pub needs_wrapping: bool,
}

impl InterfaceVersion<'_> {
    /// C header declaring the interface (`ppb_foo.h`).
    pub fn header(&self) -> String {
        format!("{}.h", self.file.stem())
    }

    pub fn direction(&self) -> Directionality {
        self.iface.direction
    }

    fn target(&self) -> ShimTarget<'_> {
        ShimTarget {
            iface: self.iface,
            release: &self.release,
            struct_name: &self.struct_name,
        }
    }
}

/// What the lookup code hands out for one interface version.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum WrapperTableEntry {
    /// The browser's or plugin's own table.
    Real,
    /// The generated table of the given name.
    Shim(String),
}

/// Outcome of [`generate_range`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct GenSummary {
    pub output_path: PathBuf,
    pub interface_versions: usize,
    pub wrapped_versions: usize,
    pub shims: usize,
    /// Requested release names no file defines.
    pub unknown_releases: Vec<String>,
}

pub struct ShimGenerator<'a> {
    ast: &'a Ast,
    config: &'a GenConfig,
    cgen: CGen,
}

impl<'a> ShimGenerator<'a> {
    pub fn new(ast: &'a Ast, config: &'a GenConfig) -> Self {
        ShimGenerator {
            ast,
            config,
            cgen: CGen::new(ast),
        }
    }

    pub fn analyzer(&self) -> WrapAnalyzer<'_> {
        WrapAnalyzer::new(&self.cgen, self.config.force_all_wrapping)
    }

    pub fn emitter(&self) -> ShimEmitter<'_> {
        ShimEmitter::new(&self.cgen, self.config)
    }

    /// Distinct interface versions over `release_names`, in
    /// interface-then-version order. Names are resolved against each
    /// interface's own file; unknown names are skipped.
    #[tracing::instrument(level = "debug", skip_all, fields(releases = release_names.len()))]
    pub fn determine_interfaces<S: AsRef<str>>(
        &self,
        release_names: &[S],
    ) -> Vec<InterfaceVersion<'a>> {
        let analyzer = self.analyzer();
        let mut versions = Vec::new();
        for (file, iface) in self.ast.interfaces() {
            let releases = file.releases.resolve(release_names);
            for release in iface.unique_releases(&releases) {
                let Some(version) = iface.version_at(&release) else {
                    continue;
                };
                let needs_wrapping = analyzer.interface_version_needs_wrapping(iface, &release);
                if !needs_wrapping {
                    tracing::info!("{} ver {} does not need wrapping", iface.name, version);
                }
                versions.push(InterfaceVersion {
                    iface,
                    file,
                    struct_name: iface.struct_name(version),
                    interface_macro: iface.interface_macro(version),
                    release,
                    version,
                    needs_wrapping,
                });
            }
        }
        versions
    }

    /// Shim bodies for every wrapped version, optionally bracketed by
    /// comments.
    pub fn generate_wrapper_methods(
        &self,
        versions: &[InterfaceVersion<'_>],
        comments: bool,
    ) -> String {
        let mut w = CodeWriter::new();
        self.write_wrapper_methods(&mut w, versions, comments);
        w.take_output()
    }

    /// Returns the number of shims written.
    fn write_wrapper_methods(
        &self,
        w: &mut CodeWriter,
        versions: &[InterfaceVersion<'_>],
        comments: bool,
    ) -> usize {
        let analyzer = self.analyzer();
        let emitter = self.emitter();
        let mut shims = 0;
        for version in versions {
            if !version.needs_wrapping {
                if comments {
                    w.comment_block(&format!(
                        "Not generating wrapper methods for {}",
                        version.struct_name
                    ));
                }
                continue;
            }
            if comments {
                w.comment_block(&format!("Begin wrapper methods for {}", version.struct_name));
            }
            let target = version.target();
            for member in version.iface.members_at(&version.release) {
                if !analyzer.member_needs_wrapping(member, &version.release) {
                    continue;
                }
                if let Some(text) = emitter.emit_shim(&target, member) {
                    w.write(&text);
                    shims += 1;
                }
            }
            if comments {
                w.comment_block(&format!("End wrapper methods for {}", version.struct_name));
            }
        }
        shims
    }

    pub fn table_entry(&self, version: &InterfaceVersion<'_>) -> WrapperTableEntry {
        if version.needs_wrapping {
            WrapperTableEntry::Shim(self.emitter().names().wrapper_table(&version.struct_name))
        } else {
            WrapperTableEntry::Real
        }
    }

    /// The complete shim file.
    pub fn generate_artifact(&self, versions: &[InterfaceVersion<'_>]) -> (String, usize) {
        let names = self.emitter().names().clone();
        let mut w = CodeWriter::new();

        self.write_banner(&mut w);
        self.write_includes(&mut w, versions);
        preamble::emit_strcmp(&mut w);
        preamble::emit_info_struct(&mut w, &names);

        for version in versions {
            w.writeln(&format!(
                "static struct {} {};",
                names.info_struct(),
                names.wrapper_info(&version.struct_name)
            ));
        }
        w.newline();

        let shims = self.write_wrapper_methods(&mut w, versions, true);
        for version in versions {
            self.write_wrapper_table(&mut w, version);
        }
        for version in versions {
            self.write_wrapper_info(&mut w, version);
        }
        for (direction, array) in [
            (Directionality::Provider, "s_ppb_wrappers"),
            (Directionality::Consumer, "s_ppp_wrappers"),
        ] {
            w.writeln(&format!("static struct {} *{array}[] = {{", names.info_struct()));
            w.indent();
            for version in versions.iter().filter(|v| v.direction() == direction) {
                w.writeln(&format!("&{},", names.wrapper_info(&version.struct_name)));
            }
            w.writeln("NULL");
            w.dedent();
            w.writeln("};");
            w.newline();
        }

        preamble::emit_lookup_functions(&mut w, &names);
        (w.take_output(), shims)
    }

    fn write_banner(&self, w: &mut CodeWriter) {
        let files: Vec<&str> = self.ast.files.iter().map(SourceFile::file_name).collect();
        w.writeln(&format!(
            "/* Generated from {}. DO NOT EDIT. */",
            files.join(", ")
        ));
        w.newline();
    }

    fn write_includes(&self, w: &mut CodeWriter, versions: &[InterfaceVersion<'_>]) {
        w.writeln(&format!("#include \"{}\"", self.config.own_header));
        w.writeln("#include <stddef.h>");
        w.writeln(&format!("#include \"{}\"", self.config.header_path("ppb.h")));
        w.writeln(&format!("#include \"{}\"", self.config.header_path("ppp.h")));
        let mut seen = FxHashSet::default();
        let mut headers: Vec<String> = versions
            .iter()
            .map(InterfaceVersion::header)
            .filter(|h| seen.insert(h.clone()))
            .collect();
        headers.sort_unstable();
        for header in &headers {
            w.writeln(&format!("#include \"{}\"", self.config.header_path(header)));
        }
        w.newline();
    }

    /// Only wrapped versions get a table. Slots without a shim stay NULL
    /// until the real interface is looked up.
    fn write_wrapper_table(&self, w: &mut CodeWriter, version: &InterfaceVersion<'_>) {
        let WrapperTableEntry::Shim(table) = self.table_entry(version) else {
            return;
        };
        let analyzer = self.analyzer();
        let emitter = self.emitter();
        let target = version.target();
        let style = SignatureStyle {
            func_as_ptr: true,
            include_name: false,
            ret_mode: TypeMode::Return,
            ..SignatureStyle::default()
        };
        w.writeln(&format!("static struct {} {table} = {{", version.struct_name));
        w.indent();
        for member in version.iface.members_at(&version.release) {
            let cast = self.cgen.signature(member, &version.release, &style);
            match cast {
                Some(cast) if analyzer.member_needs_wrapping(member, &version.release) => {
                    w.writeln(&format!(
                        ".{} = ({cast})&{},",
                        member.name,
                        emitter.shim_name(&target, member)
                    ));
                }
                _ => w.writeln(&format!(".{} = NULL,", member.name)),
            }
        }
        w.dedent();
        w.writeln("};");
        w.newline();
    }

    fn write_wrapper_info(&self, w: &mut CodeWriter, version: &InterfaceVersion<'_>) {
        let names = self.emitter().names().clone();
        w.writeln(&format!(
            "static struct {} {} = {{",
            names.info_struct(),
            names.wrapper_info(&version.struct_name)
        ));
        w.indent();
        w.writeln(&format!("{},", version.interface_macro));
        match self.table_entry(version) {
            WrapperTableEntry::Shim(table) => {
                w.writeln(&format!("(void *) &{table},"));
                w.writeln("NULL,");
                w.writeln(&format!(
                    "sizeof(struct {}) / sizeof({})",
                    version.struct_name,
                    names.slot_type()
                ));
            }
            WrapperTableEntry::Real => {
                w.writeln("NULL,");
                w.writeln("NULL,");
                w.writeln("0");
            }
        }
        w.dedent();
        w.writeln("};");
        w.newline();
    }
}

/// Requested names that no file's label defines.
pub fn unknown_releases<S: AsRef<str>>(ast: &Ast, release_names: &[S]) -> Vec<String> {
    release_names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| ast.files.iter().all(|f| f.releases.get(name).is_none()))
        .map(str::to_string)
        .collect()
}

/// Generate the shim file for `release_names` and write it to
/// `config.output_path`.
#[tracing::instrument(level = "debug", skip_all, fields(output = %config.output_path.display()))]
pub fn generate_range<S: AsRef<str>>(
    ast: &Ast,
    release_names: &[S],
    config: &GenConfig,
) -> Result<GenSummary, GenError> {
    if config.output_path.as_os_str().is_empty() {
        return Err(GenError::MissingOutputPath);
    }
    tracing::info!(
        "Generating {} for {}",
        config.output_path.display(),
        config.wrapper_prefix
    );
    let unknown = unknown_releases(ast, release_names);
    for name in &unknown {
        tracing::warn!(release = %name, "release is not defined by any label");
    }

    let generator = ShimGenerator::new(ast, config);
    let versions = generator.determine_interfaces(release_names);
    let (text, shims) = generator.generate_artifact(&versions);
    std::fs::write(&config.output_path, text).map_err(|source| GenError::Write {
        path: config.output_path.clone(),
        source,
    })?;

    let summary = GenSummary {
        output_path: config.output_path.clone(),
        interface_versions: versions.len(),
        wrapped_versions: versions.iter().filter(|v| v.needs_wrapping).count(),
        shims,
        unknown_releases: unknown,
    };
    tracing::debug!(?summary, "shim file written");
    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests use unwrap for brevity")]
mod tests;
