//! Property-based tests over generated interfaces.
//!
//! Random interfaces mixing by-value aggregates, by-reference aggregates
//! and scalars, with members appearing and disappearing across releases.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use shim_gen::{GenConfig, ShimGenerator};
use shim_ir::Ast;

const RELEASES: [&str; 3] = ["M13", "M14", "M15"];

const PRELUDE: &str = "
label Chrome { M13 = 0.5, M14 = 1.0, M15 = 1.1 };
[passByValue] struct PP_Point { int32_t x; int32_t y; };
struct PP_Var { int32_t type; };
";

fn ret_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["void", "int32_t", "PP_Point", "PP_Var", "mem_t"])
}

fn param() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["in", "out"]),
        prop::sample::select(vec!["int32_t", "PP_Point", "PP_Var", "cstr_t"]),
        any::<bool>(),
    )
        .prop_map(|(mode, ty, array)| {
            let dims = if array { "[4]" } else { "" };
            format!("[{mode}] {ty} NAME{dims}")
        })
}

fn availability() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "[version=1.0] ", "[version=1.1] ", "[deprecate=1.0] "])
}

fn member() -> impl Strategy<Value = (&'static str, &'static str, Vec<String>)> {
    (availability(), ret_type(), prop::collection::vec(param(), 0..4))
}

fn interface_source() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(member(), 1..6)).prop_map(|(provider, members)| {
        let name = if provider { "PPB_Gen" } else { "PPP_Gen" };
        let mut source = format!("{PRELUDE}\ninterface {name} {{\n");
        for (i, (attrs, ret, params)) in members.iter().enumerate() {
            let params: Vec<String> = params
                .iter()
                .enumerate()
                .map(|(j, p)| p.replace("NAME", &format!("a{j}")))
                .collect();
            source.push_str(&format!("  {attrs}{ret} M{i}({});\n", params.join(", ")));
        }
        source.push_str("};\n");
        source
    })
}

fn parse(source: &str) -> Ast {
    shim_parse::parse_sources(&[("ppb_gen.idl", source)]).unwrap()
}

fn shim_count(text: &str) -> usize {
    text.lines().filter(|line| line.starts_with("static ")).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_deterministic(source in interface_source()) {
        let config = GenConfig::default();
        let first_ast = parse(&source);
        let second_ast = parse(&source);
        let first = ShimGenerator::new(&first_ast, &config);
        let second = ShimGenerator::new(&second_ast, &config);
        let (a, _) = first.generate_artifact(&first.determine_interfaces(&RELEASES));
        let (b, _) = second.generate_artifact(&second.determine_interfaces(&RELEASES));
        let (c, _) = first.generate_artifact(&first.determine_interfaces(&RELEASES));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }

    #[test]
    fn one_shim_per_wrapped_member(source in interface_source()) {
        let ast = parse(&source);
        let config = GenConfig::default();
        let generator = ShimGenerator::new(&ast, &config);
        let analyzer = generator.analyzer();
        let versions = generator.determine_interfaces(&RELEASES);

        let mut expected = 0;
        for version in &versions {
            let wrapped = version
                .iface
                .members_at(&version.release)
                .filter(|m| analyzer.member_needs_wrapping(m, &version.release))
                .count();
            // A version needs wrapping exactly when one of its members does.
            prop_assert_eq!(version.needs_wrapping, wrapped > 0);
            expected += wrapped;
        }

        let methods = generator.generate_wrapper_methods(&versions, false);
        prop_assert_eq!(shim_count(&methods), expected);
        let (_, shims) = generator.generate_artifact(&versions);
        prop_assert_eq!(shims, expected);
    }

    #[test]
    fn shim_shape_follows_direction(source in interface_source()) {
        let ast = parse(&source);
        let config = GenConfig::default().with_force_all_wrapping(true);
        let generator = ShimGenerator::new(&ast, &config);
        let versions = generator.determine_interfaces(&RELEASES);
        let methods = generator.generate_wrapper_methods(&versions, false);
        if source.contains("interface PPB_Gen") {
            prop_assert!(!methods.contains("temp_fp"));
            prop_assert!(methods
                .lines()
                .filter(|l| l.starts_with("static "))
                .all(|l| l == "static __attribute__((pnaclcall))"));
        } else {
            prop_assert!(!methods.contains("static __attribute__"));
            prop_assert_eq!(methods.matches("temp_fp(").count(), shim_count(&methods));
        }
    }

    #[test]
    fn force_all_wraps_every_version(source in interface_source()) {
        let ast = parse(&source);
        let config = GenConfig::default().with_force_all_wrapping(true);
        let generator = ShimGenerator::new(&ast, &config);
        let analyzer = generator.analyzer();
        let versions = generator.determine_interfaces(&RELEASES);
        prop_assert!(versions.iter().all(|v| v.needs_wrapping));
        for (_, iface) in ast.interfaces() {
            prop_assert!(analyzer.interface_needs_wrapping(iface, &[]));
            for member in &iface.members {
                for version in &versions {
                    prop_assert!(analyzer.member_needs_wrapping(member, &version.release));
                }
            }
        }
    }
}
