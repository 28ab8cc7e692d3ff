//! Wrapping-necessity analysis.
//!
//! Four queries of increasing granularity, each an OR over the one below
//! and each answering `true` outright when every member is forced to be
//! shimmed. Verdicts are recomputed on every call; nothing is cached.

use shim_cgen::{Arg, CGen};
use shim_ir::{Interface, Member, Release};

use crate::classify::type_needs_wrapping;

pub struct WrapAnalyzer<'a> {
    cgen: &'a CGen,
    force_all: bool,
}

impl<'a> WrapAnalyzer<'a> {
    pub fn new(cgen: &'a CGen, force_all: bool) -> Self {
        WrapAnalyzer { cgen, force_all }
    }

    pub fn args_need_wrapping(&self, args: &[Arg]) -> bool {
        if self.force_all {
            return true;
        }
        args.iter().any(|arg| type_needs_wrapping(&arg.ty, &arg.array))
    }

    /// A member absent at `release` never needs a shim there.
    pub fn member_needs_wrapping(&self, member: &Member, release: &Release) -> bool {
        if self.force_all {
            return true;
        }
        if !member.is_available_at(release) {
            return false;
        }
        let Some(components) = self.cgen.components(member, release) else {
            tracing::debug!(member = %member.name, release = %release.name, "no signature");
            return false;
        };
        type_needs_wrapping(&components.ret, &[]) || self.args_need_wrapping(&components.args)
    }

    /// The interface at the version in effect at `release`.
    pub fn interface_version_needs_wrapping(&self, iface: &Interface, release: &Release) -> bool {
        if self.force_all {
            return true;
        }
        iface
            .members
            .iter()
            .any(|member| self.member_needs_wrapping(member, release))
    }

    /// Any distinct version of the interface across `releases`.
    pub fn interface_needs_wrapping(&self, iface: &Interface, releases: &[Release]) -> bool {
        if self.force_all {
            return true;
        }
        iface
            .unique_releases(releases)
            .iter()
            .any(|release| self.interface_version_needs_wrapping(iface, release))
    }
}
