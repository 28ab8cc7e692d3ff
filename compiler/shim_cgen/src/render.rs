use std::fmt::Write;

use rustc_hash::FxHashMap;
use shim_ir::{lookup_builtin, ArrayDim, Ast, Member, Release, TypeDecl, TypedefKind};

use crate::{TypeCategory, TypeMode};

/// One rendered parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Arg {
    /// C type text, e.g. `const struct PP_Var*`.
    pub ty: String,
    pub name: String,
    pub array: Vec<ArrayDim>,
}

impl Arg {
    /// `ty name[dims]`.
    pub fn declaration(&self) -> String {
        let mut out = format!("{} {}", self.ty, self.name);
        for dim in &self.array {
            let _ = write!(out, "{dim}");
        }
        out
    }
}

/// A member's signature at one release.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Components {
    /// C return type text.
    pub ret: String,
    pub name: String,
    pub args: Vec<Arg>,
}

/// How `CGen::signature` composes a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SignatureStyle<'a> {
    /// Prepended to the member name; used alone when `include_name` is off.
    pub prefix: &'a str,
    /// Render `ret (ptr_prefix*name)(params)` instead of `ret name(params)`.
    pub func_as_ptr: bool,
    /// Text placed before the `*` of a function pointer, e.g. an ABI
    /// attribute followed by a space.
    pub ptr_prefix: &'a str,
    pub include_name: bool,
    pub ret_mode: TypeMode,
}

impl Default for SignatureStyle<'_> {
    fn default() -> Self {
        SignatureStyle {
            prefix: "",
            func_as_ptr: false,
            ptr_prefix: "",
            include_name: true,
            ret_mode: TypeMode::Store,
        }
    }
}

/// C renderer over one parsed file set.
pub struct CGen {
    categories: FxHashMap<String, TypeCategory>,
}

impl CGen {
    pub fn new(ast: &Ast) -> Self {
        let mut categories = FxHashMap::default();
        for (name, decl) in ast.type_decls() {
            let category = match decl {
                TypeDecl::Struct(def) => TypeCategory::Aggregate {
                    c: format!("{} {}", def.kind.keyword(), def.name),
                    by_value: def.pass_by_value,
                },
                TypeDecl::Typedef(def) => match def.kind {
                    TypedefKind::Function { .. } => TypeCategory::Function(def.name.clone()),
                    TypedefKind::Alias { .. } => TypeCategory::Value(def.name.clone()),
                },
                TypeDecl::Enum(def) => TypeCategory::Value(def.name.clone()),
                TypeDecl::Interface(iface) => TypeCategory::Aggregate {
                    c: format!("struct {}", iface.name),
                    by_value: false,
                },
            };
            categories.insert(name.to_string(), category);
        }
        CGen { categories }
    }

    /// Category of an IDL type name. Builtins take precedence; names the
    /// parser would have rejected fall back to plain values.
    pub fn category(&self, ty: &str) -> TypeCategory {
        if let Some(builtin) = lookup_builtin(ty) {
            return TypeCategory::from_builtin(builtin.kind, builtin.c);
        }
        self.categories
            .get(ty)
            .cloned()
            .unwrap_or_else(|| TypeCategory::Value(ty.to_string()))
    }

    pub fn map_type(&self, ty: &str, mode: TypeMode) -> String {
        self.category(ty).render(mode)
    }

    /// Decompose `member` at `release`, or `None` if it does not exist
    /// there. Parameters absent at `release` are dropped.
    pub fn components(&self, member: &Member, release: &Release) -> Option<Components> {
        self.components_with(member, release, TypeMode::Store)
    }

    fn components_with(
        &self,
        member: &Member,
        release: &Release,
        ret_mode: TypeMode,
    ) -> Option<Components> {
        if !member.is_available_at(release) {
            return None;
        }
        let args = member
            .params_at(release)
            .map(|param| {
                let category = self.category(&param.ty);
                let mode = TypeMode::from(param.mode);
                let ty = if param.array.is_empty() {
                    category.render(mode)
                } else {
                    category.render_array(mode)
                };
                Arg {
                    ty,
                    name: param.name.clone(),
                    array: param.array.clone(),
                }
            })
            .collect();
        Some(Components {
            ret: self.map_type(&member.ret, ret_mode),
            name: member.name.clone(),
            args,
        })
    }

    /// Render `member` at `release` as a declaration or function-pointer
    /// type. `None` if the member does not exist at `release`.
    pub fn signature(
        &self,
        member: &Member,
        release: &Release,
        style: &SignatureStyle<'_>,
    ) -> Option<String> {
        let components = self.components_with(member, release, style.ret_mode)?;
        Some(compose(&components, style))
    }
}

/// Compose components into C text.
pub fn compose(components: &Components, style: &SignatureStyle<'_>) -> String {
    let params = if components.args.is_empty() {
        "void".to_string()
    } else {
        components
            .args
            .iter()
            .map(Arg::declaration)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let name = if style.include_name {
        format!("{}{}", style.prefix, components.name)
    } else {
        style.prefix.to_string()
    };
    if style.func_as_ptr {
        format!(
            "{} ({}*{name})({params})",
            components.ret, style.ptr_prefix
        )
    } else {
        format!("{} {name}({params})", components.ret)
    }
}
