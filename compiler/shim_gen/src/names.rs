//! Identifiers of generated C objects.
//!
//! Every generated name derives from the configured prefix, so two shim
//! files built with different prefixes can link together.

use shim_ir::{Interface, Release};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShimNames {
    prefix: String,
}

impl ShimNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        ShimNames {
            prefix: prefix.into(),
        }
    }

    /// `Pnacl_M14_PPB_Foo_`, prepended to member names.
    pub fn method_prefix(&self, iface: &Interface, release: &Release) -> String {
        format!("{}_{}_{}_", self.prefix, release.name, iface.name)
    }

    /// Per-interface-version metadata object.
    pub fn wrapper_info(&self, struct_name: &str) -> String {
        format!("{}_WrapperInfo_{struct_name}", self.prefix)
    }

    /// Per-interface-version table of shim pointers.
    pub fn wrapper_table(&self, struct_name: &str) -> String {
        format!("{}_Wrappers_{struct_name}", self.prefix)
    }

    /// Metadata struct tag.
    pub fn info_struct(&self) -> String {
        format!("__{}WrapperInfo", self.prefix)
    }

    /// Generic function-pointer type of one table slot.
    pub fn slot_type(&self) -> String {
        format!("__{}Slot", self.prefix)
    }

    pub fn lookup_fn(&self) -> String {
        format!("{}_LookupWrapperInfo", self.prefix)
    }

    pub fn fill_fn(&self) -> String {
        format!("{}_FillRealSlots", self.prefix)
    }

    /// `__set_real_Pnacl_PPBGetInterface` for `kind = "PPB"`.
    pub fn set_real_fn(&self, kind: &str) -> String {
        format!("__set_real_{}_{kind}GetInterface", self.prefix)
    }

    /// `__Pnacl_PPBGetInterface` for `kind = "PPB"`.
    pub fn get_interface_fn(&self, kind: &str) -> String {
        format!("__{}_{kind}GetInterface", self.prefix)
    }
}
