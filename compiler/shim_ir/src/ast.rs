//! IDL syntax tree.
//!
//! Produced by `shim_parse`, read by everything downstream. Nothing here is
//! mutated after parsing; every per-release question is answered by
//! recomputing from the tree.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Availability, Release, ReleaseTable, Span, Version};

/// Which side of the ABI boundary implements an interface.
///
/// `PPB_*` interfaces are provided by the browser and called by the plugin;
/// `PPP_*` interfaces are provided by the plugin as tables of callbacks.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Directionality {
    Provider,
    Consumer,
}

impl Directionality {
    /// Classify an interface by its name prefix.
    pub fn from_interface_name(name: &str) -> Option<Self> {
        if name.starts_with("PPB") {
            Some(Directionality::Provider)
        } else if name.starts_with("PPP") {
            Some(Directionality::Consumer)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Directionality::Provider => "provider",
            Directionality::Consumer => "consumer",
        }
    }
}

impl fmt::Display for Directionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter passing mode (`[in]`, `[out]`, `[inout]`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParamMode {
    #[default]
    In,
    Out,
    InOut,
}

/// One array dimension: `[4]`, `[PP_MAX]` or unsized `[]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArrayDim(pub Option<String>);

impl fmt::Display for ArrayDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(size) => write!(f, "[{size}]"),
            None => f.write_str("[]"),
        }
    }
}

/// A method or function-typedef parameter.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Param {
    pub name: String,
    /// IDL type name.
    pub ty: String,
    pub mode: ParamMode,
    pub array: Vec<ArrayDim>,
    pub availability: Availability,
    pub span: Span,
}

impl Param {
    pub fn is_available_at(&self, release: &Release) -> bool {
        self.availability.is_available_at(release)
    }
}

/// One interface method.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Member {
    pub name: String,
    /// IDL return type name.
    pub ret: String,
    pub params: Vec<Param>,
    pub availability: Availability,
    pub span: Span,
}

impl Member {
    pub fn is_available_at(&self, release: &Release) -> bool {
        self.availability.is_available_at(release)
    }

    /// Parameters present in `release`, in declaration order.
    pub fn params_at<'a>(&'a self, release: &'a Release) -> impl Iterator<Item = &'a Param> {
        self.params.iter().filter(move |p| p.is_available_at(release))
    }

    fn change_points(&self) -> impl Iterator<Item = Version> + '_ {
        self.availability
            .change_points()
            .chain(self.params.iter().flat_map(|p| p.availability.change_points()))
    }
}

/// A versioned interface: a table of function pointers.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Interface {
    pub name: String,
    pub direction: Directionality,
    /// `[macro="..."]` override for the interface-name macro.
    pub macro_name: Option<String>,
    pub members: Vec<Member>,
    pub availability: Availability,
    pub span: Span,
}

impl Interface {
    /// Members present in `release`, in declaration order.
    pub fn members_at<'a>(&'a self, release: &'a Release) -> impl Iterator<Item = &'a Member> {
        self.members.iter().filter(move |m| m.is_available_at(release))
    }

    /// The interface version in effect at `release`.
    ///
    /// `None` when the interface is unavailable there or has no available
    /// member. Otherwise the latest change point (the interface's own start,
    /// or any member or parameter appearing or disappearing) that does not
    /// exceed the release's version.
    pub fn version_at(&self, release: &Release) -> Option<Version> {
        if !self.availability.is_available_at(release) {
            return None;
        }
        if !self.members.iter().any(|m| m.is_available_at(release)) {
            return None;
        }
        let version = self
            .availability
            .change_points()
            .chain(self.members.iter().flat_map(Member::change_points))
            .filter(|v| *v <= release.version)
            .max()
            .unwrap_or(Version::ZERO);
        Some(version)
    }

    /// Distinct interface versions across `releases`.
    ///
    /// Returns the first release, in request order, at which each version
    /// is in effect. Releases where the interface does not exist are skipped.
    pub fn unique_releases(&self, releases: &[Release]) -> Vec<Release> {
        let mut seen = FxHashSet::default();
        releases
            .iter()
            .filter(|release| {
                self.version_at(release)
                    .is_some_and(|version| seen.insert(version))
            })
            .cloned()
            .collect()
    }

    /// Versioned C struct name: `PPB_Foo` at 1.0 → `PPB_Foo_1_0`.
    pub fn struct_name(&self, version: Version) -> String {
        format!("{}_{}", self.name, version.to_ident())
    }

    /// Versioned interface-name macro: `PPB_FOO_INTERFACE_1_0`.
    pub fn interface_macro(&self, version: Version) -> String {
        let base = match &self.macro_name {
            Some(name) => name.clone(),
            None => format!("{}_INTERFACE", self.name.to_ascii_uppercase()),
        };
        format!("{base}_{}", version.to_ident())
    }
}

/// `struct` or `union`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AggregateKind {
    Struct,
    Union,
}

impl AggregateKind {
    pub fn keyword(self) -> &'static str {
        match self {
            AggregateKind::Struct => "struct",
            AggregateKind::Union => "union",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub array: Vec<ArrayDim>,
    pub span: Span,
}

/// A struct or union declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StructDef {
    pub name: String,
    pub kind: AggregateKind,
    /// `[passByValue]`: `in` parameters take the aggregate itself.
    pub pass_by_value: bool,
    pub fields: Vec<Field>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumVariant {
    pub name: String,
    /// Initializer text, if any (`1 << 2`).
    pub value: Option<String>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumDef {
    pub name: String,
    pub variants: Vec<EnumVariant>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypedefKind {
    /// `typedef int32_t PP_Instance;`
    Alias { target: String },
    /// `typedef void PP_Func([in] int32_t result);`
    Function { ret: String, params: Vec<Param> },
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Typedef {
    pub name: String,
    pub kind: TypedefKind,
    pub span: Span,
}

/// A declared IDL type, as seen by name lookup.
#[derive(Copy, Clone, Debug)]
pub enum TypeDecl<'a> {
    Struct(&'a StructDef),
    Enum(&'a EnumDef),
    Typedef(&'a Typedef),
    Interface(&'a Interface),
}

/// One parsed IDL file.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct SourceFile {
    /// Path as given to the parser.
    pub path: String,
    pub releases: ReleaseTable,
    pub interfaces: Vec<Interface>,
    pub structs: Vec<StructDef>,
    pub enums: Vec<EnumDef>,
    pub typedefs: Vec<Typedef>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            ..SourceFile::default()
        }
    }

    /// Final path component (`ppb_foo.idl`).
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path.as_str())
    }

    /// File name without the `.idl` extension.
    pub fn stem(&self) -> &str {
        let name = self.file_name();
        name.strip_suffix(".idl").unwrap_or(name)
    }
}

/// All parsed files, in the order they were given.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Ast {
    pub files: Vec<SourceFile>,
}

impl Ast {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Ast { files }
    }

    /// Every interface paired with its file, in file-then-declaration order.
    pub fn interfaces(&self) -> impl Iterator<Item = (&SourceFile, &Interface)> {
        self.files
            .iter()
            .flat_map(|file| file.interfaces.iter().map(move |iface| (file, iface)))
    }

    /// Name table over all declared types. The first declaration wins.
    pub fn type_decls(&self) -> FxHashMap<&str, TypeDecl<'_>> {
        let mut decls = FxHashMap::default();
        for file in &self.files {
            for s in &file.structs {
                decls.entry(s.name.as_str()).or_insert(TypeDecl::Struct(s));
            }
            for e in &file.enums {
                decls.entry(e.name.as_str()).or_insert(TypeDecl::Enum(e));
            }
            for t in &file.typedefs {
                decls.entry(t.name.as_str()).or_insert(TypeDecl::Typedef(t));
            }
            for i in &file.interfaces {
                decls.entry(i.name.as_str()).or_insert(TypeDecl::Interface(i));
            }
        }
        decls
    }
}
