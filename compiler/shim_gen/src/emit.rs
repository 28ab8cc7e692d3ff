//! Shim function text.
//!
//! A provider shim is what restricted-ABI code calls in place of a browser
//! function; it forwards straight into the real table. A consumer shim is
//! what the browser calls in place of a plugin callback; it reaches the
//! callback through a function-pointer cast that carries the ABI tag.
//!
//! ```text
//! provider                                consumer
//! static ATTR                             static RET NAME(ARGS) {
//! RET NAME(ARGS) {                          const struct X *iface = I.real_iface;
//!   const struct X *iface = I.real_iface;   RET (ATTR *temp_fp)(ARGS) =
//!   return iface->M(a, b);                      ((RET (ATTR *)(ARGS))iface->M);
//! }                                         return temp_fp(a, b);
//!                                         }
//! ```

use shim_cgen::{CGen, Components, SignatureStyle, TypeMode};
use shim_ir::{Directionality, Interface, Member, Release};

use crate::config::GenConfig;
use crate::names::ShimNames;

/// The interface version a shim belongs to.
#[derive(Copy, Clone, Debug)]
pub struct ShimTarget<'a> {
    pub iface: &'a Interface,
    pub release: &'a Release,
    /// Versioned struct name (`PPB_Foo_1_0`).
    pub struct_name: &'a str,
}

pub struct ShimEmitter<'a> {
    cgen: &'a CGen,
    abi_attribute: &'a str,
    names: ShimNames,
}

impl<'a> ShimEmitter<'a> {
    pub fn new(cgen: &'a CGen, config: &'a GenConfig) -> Self {
        ShimEmitter {
            cgen,
            abi_attribute: &config.abi_attribute,
            names: ShimNames::new(config.wrapper_prefix.as_str()),
        }
    }

    pub fn names(&self) -> &ShimNames {
        &self.names
    }

    /// Shim name for `member` in `target` (`Pnacl_M14_PPB_Foo_Create`).
    pub fn shim_name(&self, target: &ShimTarget<'_>, member: &Member) -> String {
        format!(
            "{}{}",
            self.names.method_prefix(target.iface, target.release),
            member.name
        )
    }

    /// Emit the shim for `member`, or `None` if it does not exist at the
    /// target's release.
    pub fn emit_shim(&self, target: &ShimTarget<'_>, member: &Member) -> Option<String> {
        match target.iface.direction {
            Directionality::Provider => self.emit_provider(target, member),
            Directionality::Consumer => self.emit_consumer(target, member),
        }
    }

    fn emit_provider(&self, target: &ShimTarget<'_>, member: &Member) -> Option<String> {
        let prefix = self.names.method_prefix(target.iface, target.release);
        let signature = self.cgen.signature(
            member,
            target.release,
            &SignatureStyle {
                prefix: &prefix,
                ..SignatureStyle::default()
            },
        )?;
        let components = self.cgen.components(member, target.release)?;
        let (ret, args) = return_args(&components);
        Some(format!(
            "static {attr}\n{signature} {{\n{load}  {ret}iface->{name}({args});\n}}\n\n",
            attr = self.abi_attribute,
            load = self.load_real_iface(target),
            name = member.name,
        ))
    }

    fn emit_consumer(&self, target: &ShimTarget<'_>, member: &Member) -> Option<String> {
        let prefix = self.names.method_prefix(target.iface, target.release);
        let signature = self.cgen.signature(
            member,
            target.release,
            &SignatureStyle {
                prefix: &prefix,
                ..SignatureStyle::default()
            },
        )?;
        let ptr_prefix = format!("{} ", self.abi_attribute);
        let temp_fp = self.cgen.signature(
            member,
            target.release,
            &callback_style("temp_fp", &ptr_prefix),
        )?;
        let cast = self
            .cgen
            .signature(member, target.release, &callback_style("", &ptr_prefix))?;
        let components = self.cgen.components(member, target.release)?;
        let (ret, args) = return_args(&components);
        Some(format!(
            "static {signature} {{\n{load}  {temp_fp} = (({cast})iface->{name});\n  {ret}temp_fp({args});\n}}\n\n",
            load = self.load_real_iface(target),
            name = member.name,
        ))
    }

    fn load_real_iface(&self, target: &ShimTarget<'_>) -> String {
        format!(
            "  const struct {} *iface = {}.real_iface;\n",
            target.struct_name,
            self.names.wrapper_info(target.struct_name)
        )
    }
}

/// Function-pointer style for the ABI-tagged callback type.
fn callback_style<'s>(prefix: &'s str, ptr_prefix: &'s str) -> SignatureStyle<'s> {
    SignatureStyle {
        prefix,
        func_as_ptr: true,
        ptr_prefix,
        include_name: false,
        ret_mode: TypeMode::Return,
    }
}

/// `("return ", "a, b")`, or an empty return prefix for `void`.
pub fn return_args(components: &Components) -> (&'static str, String) {
    let ret = if components.ret == "void" { "" } else { "return " };
    let args = components
        .args
        .iter()
        .map(|arg| arg.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    (ret, args)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests use unwrap for brevity")]
mod tests;
