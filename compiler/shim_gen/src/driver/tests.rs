use pretty_assertions::assert_eq;
use shim_ir::Ast;

use super::*;

const SOURCE: &str = "
label Chrome { M13 = 0.5, M14 = 1.0, M15 = 1.1 };
[passByValue] struct PP_Point { int32_t x; int32_t y; };
struct PP_Var { int32_t type; };

interface PPB_Foo {
  void Plain([in] PP_Var v);
  [version=1.0] PP_Point Where();
};

interface PPB_Ref {
  void Take([in] PP_Var v);
};

interface PPP_Cb {
  void Moved([in] PP_Point p);
  void Closed();
};
";

const RELEASES: [&str; 3] = ["M13", "M14", "M15"];

fn ast() -> Ast {
    shim_parse::parse_sources(&[("api/ppb_foo.idl", SOURCE)]).unwrap()
}

fn summary(versions: &[InterfaceVersion<'_>]) -> Vec<(String, bool)> {
    versions
        .iter()
        .map(|v| (format!("{}@{}", v.struct_name, v.release.name), v.needs_wrapping))
        .collect()
}

#[test]
fn test_determine_interfaces() {
    let ast = ast();
    let config = GenConfig::default();
    let generator = ShimGenerator::new(&ast, &config);
    let versions = generator.determine_interfaces(&RELEASES);
    assert_eq!(
        summary(&versions),
        vec![
            ("PPB_Foo_0_5@M13".to_string(), false),
            ("PPB_Foo_1_0@M14".to_string(), true),
            ("PPB_Ref_0_5@M13".to_string(), false),
            ("PPP_Cb_0_5@M13".to_string(), true),
        ]
    );
    assert_eq!(versions[0].header(), "ppb_foo.h");
    assert_eq!(versions[1].interface_macro, "PPB_FOO_INTERFACE_1_0");
}

#[test]
fn test_unknown_release_names_are_skipped() {
    let ast = ast();
    let config = GenConfig::default();
    let generator = ShimGenerator::new(&ast, &config);
    let versions = generator.determine_interfaces(&["M14", "M99"]);
    assert_eq!(
        summary(&versions),
        vec![
            ("PPB_Foo_1_0@M14".to_string(), true),
            ("PPB_Ref_0_5@M14".to_string(), false),
            ("PPP_Cb_0_5@M14".to_string(), true),
        ]
    );
    assert_eq!(unknown_releases(&ast, &["M14", "M99"]), vec!["M99".to_string()]);
}

#[test]
fn test_repeated_release_names_emit_each_version_once() {
    let ast = ast();
    let config = GenConfig::default();
    let generator = ShimGenerator::new(&ast, &config);
    let versions = generator.determine_interfaces(&["M13", "M14", "M13"]);
    assert_eq!(
        summary(&versions),
        vec![
            ("PPB_Foo_0_5@M13".to_string(), false),
            ("PPB_Foo_1_0@M14".to_string(), true),
            ("PPB_Ref_0_5@M13".to_string(), false),
            ("PPP_Cb_0_5@M13".to_string(), true),
        ]
    );
    let (text, _) = generator.generate_artifact(&versions);
    let definition = "static struct __PnaclWrapperInfo Pnacl_WrapperInfo_PPB_Foo_0_5 = {";
    assert_eq!(text.matches(definition).count(), 1);
}

#[test]
fn test_force_all_wraps_everything() {
    let ast = ast();
    let config = GenConfig::default().with_force_all_wrapping(true);
    let generator = ShimGenerator::new(&ast, &config);
    let versions = generator.determine_interfaces(&RELEASES);
    assert!(versions.iter().all(|v| v.needs_wrapping));
    let methods = generator.generate_wrapper_methods(&versions, false);
    assert!(methods.contains("Pnacl_M13_PPB_Ref_Take("));
    assert!(methods.contains("Pnacl_M13_PPB_Foo_Plain("));
}

#[test]
fn test_wrapper_methods_with_comments() {
    let ast = ast();
    let config = GenConfig::default();
    let generator = ShimGenerator::new(&ast, &config);
    let versions = generator.determine_interfaces(&RELEASES);
    let methods = generator.generate_wrapper_methods(&versions, true);
    assert!(methods.starts_with("/* Not generating wrapper methods for PPB_Foo_0_5 */\n\n"));
    assert!(methods.contains("/* Begin wrapper methods for PPB_Foo_1_0 */\n\n"));
    assert!(methods.contains("/* End wrapper methods for PPP_Cb_0_5 */\n\n"));
    // Only the member that needs it gets a shim.
    assert!(methods.contains("Pnacl_M14_PPB_Foo_Where("));
    assert!(!methods.contains("Pnacl_M14_PPB_Foo_Plain("));
    assert!(methods.contains("Pnacl_M13_PPP_Cb_Moved("));
    assert!(!methods.contains("Pnacl_M13_PPP_Cb_Closed("));
}

#[test]
fn test_table_entries() {
    let ast = ast();
    let config = GenConfig::default();
    let generator = ShimGenerator::new(&ast, &config);
    let versions = generator.determine_interfaces(&RELEASES);
    assert_eq!(generator.table_entry(&versions[0]), WrapperTableEntry::Real);
    assert_eq!(
        generator.table_entry(&versions[1]),
        WrapperTableEntry::Shim("Pnacl_Wrappers_PPB_Foo_1_0".to_string())
    );
}

#[test]
fn test_artifact_layout() {
    let ast = ast();
    let config = GenConfig::default();
    let generator = ShimGenerator::new(&ast, &config);
    let versions = generator.determine_interfaces(&RELEASES);
    let (text, shims) = generator.generate_artifact(&versions);
    assert_eq!(shims, 2);
    assert!(text.starts_with(
        "/* Generated from ppb_foo.idl. DO NOT EDIT. */\n\n\
         #include \"ppapi/generators/pnacl_shim.h\"\n\
         #include <stddef.h>\n\
         #include \"ppapi/c/ppb.h\"\n\
         #include \"ppapi/c/ppp.h\"\n\
         #include \"ppapi/c/ppb_foo.h\"\n\n"
    ));
    assert!(text.contains(
        "static struct PPB_Foo_1_0 Pnacl_Wrappers_PPB_Foo_1_0 = {\n\
         \x20 .Plain = NULL,\n\
         \x20 .Where = (struct PP_Point (*)(void))&Pnacl_M14_PPB_Foo_Where,\n\
         };\n"
    ));
    assert!(!text.contains("Pnacl_Wrappers_PPB_Ref_0_5 ="));
    assert!(text.contains(
        "static struct __PnaclWrapperInfo Pnacl_WrapperInfo_PPB_Ref_0_5 = {\n\
         \x20 PPB_REF_INTERFACE_0_5,\n\
         \x20 NULL,\n\
         \x20 NULL,\n\
         \x20 0\n\
         };\n"
    ));
    assert!(text.contains(
        "  (void *) &Pnacl_Wrappers_PPP_Cb_0_5,\n\
         \x20 NULL,\n\
         \x20 sizeof(struct PPP_Cb_0_5) / sizeof(__PnaclSlot)\n"
    ));
    assert!(text.contains(
        "static struct __PnaclWrapperInfo *s_ppb_wrappers[] = {\n\
         \x20 &Pnacl_WrapperInfo_PPB_Foo_0_5,\n\
         \x20 &Pnacl_WrapperInfo_PPB_Foo_1_0,\n\
         \x20 &Pnacl_WrapperInfo_PPB_Ref_0_5,\n\
         \x20 NULL\n\
         };\n"
    ));
    assert!(text.contains(
        "static struct __PnaclWrapperInfo *s_ppp_wrappers[] = {\n\
         \x20 &Pnacl_WrapperInfo_PPP_Cb_0_5,\n\
         \x20 NULL\n\
         };\n"
    ));
}

#[test]
fn test_shims_precede_tables() {
    let ast = ast();
    let config = GenConfig::default();
    let generator = ShimGenerator::new(&ast, &config);
    let versions = generator.determine_interfaces(&RELEASES);
    let (text, _) = generator.generate_artifact(&versions);
    let forward = text
        .find("static struct __PnaclWrapperInfo Pnacl_WrapperInfo_PPB_Foo_1_0;")
        .unwrap();
    let shim = text.find("Pnacl_M14_PPB_Foo_Where(void) {").unwrap();
    let table = text.find("Pnacl_Wrappers_PPB_Foo_1_0 = {").unwrap();
    let lookup = text.find("const void *__Pnacl_PPBGetInterface").unwrap();
    assert!(forward < shim && shim < table && table < lookup);
}

#[test]
fn test_generate_range_writes_file() {
    let ast = ast();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pnacl_shim.c");
    let config = GenConfig::default().with_output_path(&path);
    let summary = generate_range(&ast, &["M13", "M14", "M15", "M99"], &config).unwrap();
    assert_eq!(summary.interface_versions, 4);
    assert_eq!(summary.wrapped_versions, 2);
    assert_eq!(summary.shims, 2);
    assert_eq!(summary.unknown_releases, vec!["M99".to_string()]);
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Pnacl_M14_PPB_Foo_Where"));
}

#[test]
fn test_generate_range_requires_output_path() {
    let ast = ast();
    let config = GenConfig::default().with_output_path("");
    let err = generate_range(&ast, &RELEASES, &config).unwrap_err();
    assert!(matches!(err, GenError::MissingOutputPath));
}
