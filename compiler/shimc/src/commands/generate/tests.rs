use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_defaults() {
    let options = parse_generate_options(&args(&["b.idl", "a.idl"])).unwrap();
    assert_eq!(options.files, vec![PathBuf::from("a.idl"), PathBuf::from("b.idl")]);
    assert_eq!(options.releases, vec!["M13", "M14", "M15"]);
    assert_eq!(options.config, GenConfig::default());
}

#[test]
fn test_flags() {
    let options = parse_generate_options(&args(&[
        "--pnaclshim=out/shim.c",
        "--disable-pnacl-opt",
        "--releases=M14, M15",
        "ppb_foo.idl",
    ]))
    .unwrap();
    assert_eq!(options.config.output_path, PathBuf::from("out/shim.c"));
    assert!(options.config.force_all_wrapping);
    assert_eq!(options.releases, vec!["M14", "M15"]);

    let options = parse_generate_options(&args(&["--output=x.c", "a.idl"])).unwrap();
    assert_eq!(options.config.output_path, PathBuf::from("x.c"));
}

#[test]
fn test_errors() {
    assert_eq!(
        parse_generate_options(&args(&[])).unwrap_err(),
        "no input files"
    );
    assert_eq!(
        parse_generate_options(&args(&["--bogus", "a.idl"])).unwrap_err(),
        "unknown option `--bogus`"
    );
    assert!(parse_generate_options(&args(&["--releases=", "a.idl"])).is_err());
    assert!(parse_generate_options(&args(&["--output=", "a.idl"])).is_err());
}

#[test]
fn test_generate_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let idl = dir.path().join("ppb_point.idl");
    std::fs::write(
        &idl,
        "label Chrome { M13 = 0.5 };\n\
         [passByValue] struct PP_Point { int32_t x; int32_t y; };\n\
         interface PPB_Point { PP_Point Get(); };\n",
    )
    .unwrap();
    let out = dir.path().join("shim.c");
    let mut options = GenerateOptions {
        files: vec![idl],
        ..GenerateOptions::default()
    };
    options.config.output_path = out.clone();
    assert_eq!(generate_shims(&options), 0);
    let text = std::fs::read_to_string(out).unwrap();
    assert!(text.contains("Pnacl_M13_PPB_Point_Get(void)"));
}

#[test]
fn test_generate_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let idl = dir.path().join("bad.idl");
    std::fs::write(&idl, "interface Foo { void A(); };\n").unwrap();
    let mut options = GenerateOptions {
        files: vec![idl],
        ..GenerateOptions::default()
    };
    options.config.output_path = dir.path().join("shim.c");
    assert_eq!(generate_shims(&options), 1);
    assert!(!dir.path().join("shim.c").exists());
}
