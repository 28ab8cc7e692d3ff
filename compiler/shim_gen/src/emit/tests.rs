use pretty_assertions::assert_eq;
use shim_cgen::CGen;
use shim_ir::{Ast, Release};

use super::*;

const SOURCE: &str = "
label Chrome { M13 = 0.5, M14 = 1.0 };
[passByValue] struct PP_Point { int32_t x; int32_t y; };

interface PPB_Foo {
  PP_Point Move([in] PP_Point p, [in] int32_t dx);
  void Reset();
  [version=1.0] void Late();
};

interface PPP_Bar {
  PP_Point Pick([in] PP_Point p);
  void Done([in] int32_t code);
};
";

fn ast() -> Ast {
    shim_parse::parse_sources(&[("emit.idl", SOURCE)]).unwrap()
}

fn release(ast: &Ast, name: &str) -> Release {
    ast.files[0].releases.get(name).cloned().unwrap()
}

fn emit(iface: &str, member: &str, release_name: &str) -> Option<String> {
    let ast = ast();
    let cgen = CGen::new(&ast);
    let config = GenConfig::default();
    let emitter = ShimEmitter::new(&cgen, &config);
    let release = release(&ast, release_name);
    let iface = ast
        .interfaces()
        .map(|(_, i)| i)
        .find(|i| i.name == iface)
        .unwrap();
    let member = iface.members.iter().find(|m| m.name == member).unwrap();
    let struct_name = iface.struct_name(iface.version_at(&release).unwrap());
    let target = ShimTarget {
        iface,
        release: &release,
        struct_name: &struct_name,
    };
    emitter.emit_shim(&target, member)
}

#[test]
fn test_provider_shim_returns_aggregate() {
    assert_eq!(
        emit("PPB_Foo", "Move", "M13").unwrap(),
        "static __attribute__((pnaclcall))\n\
         struct PP_Point Pnacl_M13_PPB_Foo_Move(struct PP_Point p, int32_t dx) {\n\
         \x20 const struct PPB_Foo_0_5 *iface = Pnacl_WrapperInfo_PPB_Foo_0_5.real_iface;\n\
         \x20 return iface->Move(p, dx);\n\
         }\n\n"
    );
}

#[test]
fn test_provider_shim_void_no_params() {
    assert_eq!(
        emit("PPB_Foo", "Reset", "M14").unwrap(),
        "static __attribute__((pnaclcall))\n\
         void Pnacl_M14_PPB_Foo_Reset(void) {\n\
         \x20 const struct PPB_Foo_1_0 *iface = Pnacl_WrapperInfo_PPB_Foo_1_0.real_iface;\n\
         \x20 iface->Reset();\n\
         }\n\n"
    );
}

#[test]
fn test_consumer_shim_calls_through_tagged_pointer() {
    assert_eq!(
        emit("PPP_Bar", "Pick", "M13").unwrap(),
        "static struct PP_Point Pnacl_M13_PPP_Bar_Pick(struct PP_Point p) {\n\
         \x20 const struct PPP_Bar_0_5 *iface = Pnacl_WrapperInfo_PPP_Bar_0_5.real_iface;\n\
         \x20 struct PP_Point (__attribute__((pnaclcall)) *temp_fp)(struct PP_Point p) = \
         ((struct PP_Point (__attribute__((pnaclcall)) *)(struct PP_Point p))iface->Pick);\n\
         \x20 return temp_fp(p);\n\
         }\n\n"
    );
}

#[test]
fn test_consumer_shim_void() {
    assert_eq!(
        emit("PPP_Bar", "Done", "M14").unwrap(),
        "static void Pnacl_M14_PPP_Bar_Done(int32_t code) {\n\
         \x20 const struct PPP_Bar_0_5 *iface = Pnacl_WrapperInfo_PPP_Bar_0_5.real_iface;\n\
         \x20 void (__attribute__((pnaclcall)) *temp_fp)(int32_t code) = \
         ((void (__attribute__((pnaclcall)) *)(int32_t code))iface->Done);\n\
         \x20 temp_fp(code);\n\
         }\n\n"
    );
}

#[test]
fn test_absent_member_emits_nothing() {
    assert_eq!(emit("PPB_Foo", "Late", "M13"), None);
    assert!(emit("PPB_Foo", "Late", "M14").is_some());
}

#[test]
fn test_custom_prefix_and_attribute() {
    let ast = ast();
    let cgen = CGen::new(&ast);
    let config = GenConfig {
        wrapper_prefix: "Shim".to_string(),
        abi_attribute: "__attribute__((cdecl))".to_string(),
        ..GenConfig::default()
    };
    let emitter = ShimEmitter::new(&cgen, &config);
    let release = release(&ast, "M14");
    let (_, iface) = ast.interfaces().next().unwrap();
    let target = ShimTarget {
        iface,
        release: &release,
        struct_name: "PPB_Foo_1_0",
    };
    let text = emitter.emit_shim(&target, &iface.members[1]).unwrap();
    assert!(text.starts_with("static __attribute__((cdecl))\nvoid Shim_M14_PPB_Foo_Reset(void)"));
    assert!(text.contains("Shim_WrapperInfo_PPB_Foo_1_0.real_iface"));
    assert_eq!(emitter.shim_name(&target, &iface.members[1]), "Shim_M14_PPB_Foo_Reset");
}

#[test]
fn test_return_args() {
    let ast = ast();
    let cgen = CGen::new(&ast);
    let release = release(&ast, "M14");
    let (_, iface) = ast.interfaces().next().unwrap();
    let move_components = cgen.components(&iface.members[0], &release).unwrap();
    assert_eq!(
        return_args(&move_components),
        ("return ", "p, dx".to_string())
    );
    let reset_components = cgen.components(&iface.members[1], &release).unwrap();
    assert_eq!(return_args(&reset_components), ("", String::new()));
}
