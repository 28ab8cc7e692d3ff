//! Fixed C support code around the generated shims.
//!
//! The metadata struct, the lookup arrays' consumers, and the two
//! `GetInterface` entry points do not depend on the IDL; only their
//! identifiers do.

use crate::names::ShimNames;
use crate::writer::CodeWriter;

/// Local `strcmp`; the shim must not depend on libc.
pub fn emit_strcmp(w: &mut CodeWriter) {
    w.writeln("/* Use local strcmp to avoid dependency on libc. */");
    w.writeln("static int mystrcmp(const char* s1, const char *s2) {");
    w.indent();
    w.writeln("while (1) {");
    w.indent();
    w.writeln("if (*s1 != *s2) break;");
    w.writeln("if (0 == *s1) return 0;");
    w.writeln("s1++;");
    w.writeln("s2++;");
    w.dedent();
    w.writeln("}");
    w.writeln("return (int)(*(const unsigned char*)s1) - (int)(*(const unsigned char*)s2);");
    w.dedent();
    w.writeln("}");
    w.newline();
}

/// Per-interface-version metadata and the types the lookup code needs.
pub fn emit_info_struct(w: &mut CodeWriter, names: &ShimNames) {
    let info = names.info_struct();
    w.writeln(&format!("struct {info} {{"));
    w.indent();
    w.writeln("const char* iface_macro;");
    w.writeln("void* wrapped_iface;");
    w.writeln("const void* real_iface;");
    // Number of function-pointer slots in the interface struct.
    w.writeln("size_t slot_count;");
    w.dedent();
    w.writeln("};");
    w.newline();
    w.writeln("typedef const void *(*PPP_GetInterface_Type)(const char *interface_name);");
    w.writeln(&format!("typedef void (*{})(void);", names.slot_type()));
    w.newline();
}

/// The real-getter setters, wrapper lookup, and both `GetInterface` entry
/// points. Expects `s_ppb_wrappers` and `s_ppp_wrappers` to be defined.
pub fn emit_lookup_functions(w: &mut CodeWriter, names: &ShimNames) {
    let info = names.info_struct();
    let slot = names.slot_type();
    let lookup = names.lookup_fn();
    let fill = names.fill_fn();

    w.writeln("static PPB_GetInterface __real_PPBGetInterface;");
    w.writeln("static PPP_GetInterface_Type __real_PPPGetInterface;");
    w.newline();
    for (kind, ty) in [("PPB", "PPB_GetInterface"), ("PPP", "PPP_GetInterface_Type")] {
        w.writeln(&format!("void {}({ty} real) {{", names.set_real_fn(kind)));
        w.indent();
        w.writeln(&format!("__real_{kind}GetInterface = real;"));
        w.dedent();
        w.writeln("}");
        w.newline();
    }

    w.writeln("/* Map interface string -> wrapper metadata */");
    w.writeln(&format!("static struct {info} *{lookup}("));
    w.writeln(&format!("    struct {info} *array[], const char *name) {{"));
    w.indent();
    w.writeln("int i;");
    w.writeln("for (i = 0; array[i] != NULL; ++i) {");
    w.indent();
    w.writeln("if (mystrcmp(name, array[i]->iface_macro) == 0) {");
    w.indent();
    w.writeln("return array[i];");
    w.dedent();
    w.writeln("}");
    w.dedent();
    w.writeln("}");
    w.writeln("return NULL;");
    w.dedent();
    w.writeln("}");
    w.newline();

    w.writeln("/* Point every slot without a shim at the real implementation. */");
    w.writeln(&format!("static void {fill}(struct {info} *wrapper) {{"));
    w.indent();
    w.writeln("size_t i;");
    w.writeln(&format!("{slot} *wrapped = ({slot} *) wrapper->wrapped_iface;"));
    w.writeln(&format!("const {slot} *real = (const {slot} *) wrapper->real_iface;"));
    w.writeln("if (wrapped == NULL) return;");
    w.writeln("for (i = 0; i < wrapper->slot_count; ++i) {");
    w.indent();
    w.writeln("if (wrapped[i] == NULL) wrapped[i] = real[i];");
    w.dedent();
    w.writeln("}");
    w.dedent();
    w.writeln("}");
    w.newline();

    for (kind, array) in [("PPB", "s_ppb_wrappers"), ("PPP", "s_ppp_wrappers")] {
        emit_get_interface(w, names, kind, array);
    }
}

fn emit_get_interface(w: &mut CodeWriter, names: &ShimNames, kind: &str, array: &str) {
    let real = format!("__real_{kind}GetInterface");
    w.writeln(&format!(
        "const void *{}(const char *name) {{",
        names.get_interface_fn(kind)
    ));
    w.indent();
    w.writeln(&format!(
        "struct {} *wrapper = {}({array}, name);",
        names.info_struct(),
        names.lookup_fn()
    ));
    w.writeln("if (wrapper == NULL) {");
    w.indent();
    w.writeln("/* We did not generate a wrapper for this, so return the real interface. */");
    w.writeln(&format!("return (*{real})(name);"));
    w.dedent();
    w.writeln("}");
    w.newline();
    w.writeln("/* Initialize the real_iface if it hasn't been. The wrapper depends on it. */");
    w.writeln("if (wrapper->real_iface == NULL) {");
    w.indent();
    w.writeln(&format!("const void *iface = (*{real})(name);"));
    w.writeln("if (NULL == iface) return NULL;");
    w.writeln("wrapper->real_iface = iface;");
    w.writeln(&format!("{}(wrapper);", names.fill_fn()));
    w.dedent();
    w.writeln("}");
    w.newline();
    w.writeln("if (wrapper->wrapped_iface) {");
    w.indent();
    w.writeln("return wrapper->wrapped_iface;");
    w.dedent();
    w.writeln("} else {");
    w.indent();
    w.writeln("return wrapper->real_iface;");
    w.dedent();
    w.writeln("}");
    w.dedent();
    w.writeln("}");
    w.newline();
}
