//! The `explain` command: describe an error code.

use shim_diagnostic::ErrorCode;

pub fn explain_error(code_str: &str) -> i32 {
    let Some(code) = ErrorCode::parse(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1004, E3001");
        return 1;
    };
    println!("{code}: {}", code.description());
    0
}
