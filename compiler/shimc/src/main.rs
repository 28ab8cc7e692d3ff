//! `shimc`: generate PNaCl calling-convention shims from PPAPI IDL.

use shimc::commands::{
    explain_error, generate_shims, parse_generate_options, run_self_tests_command,
};

fn main() {
    shimc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "generate" => match parse_generate_options(&args[2..]) {
            Ok(options) => generate_shims(&options),
            Err(message) => {
                eprintln!("error: {message}");
                eprintln!();
                eprintln!("Usage: shimc generate <files.idl...> [options]");
                eprintln!("Run `shimc help` for the list of options.");
                1
            }
        },
        "test" => run_self_tests_command(&args[2..]),
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: shimc explain <ERROR_CODE>");
                eprintln!("Example: shimc explain E1004");
                1
            } else {
                explain_error(&args[2])
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("shimc {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("PNaCl shim generator");
    println!();
    println!("Usage: shimc <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <files.idl...>  Write the shim file for the given IDL sources");
    println!("  test [paths...]          Run golden-file self-tests (default: bundled fixtures)");
    println!("  explain <code>           Explain an error code (e.g., E1004)");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Generate options:");
    println!("  --output=<path>          Output file (default: temp_pnacl_shim.c)");
    println!("  --pnaclshim=<path>       Same as --output");
    println!("  --disable-pnacl-opt      Shim every member, even when not needed");
    println!("  --releases=<a,b,...>     Releases to cover (default: M13,M14,M15)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=info            Log skipped interfaces and test results");
    println!("  SHIMC_LOG_TREE=1         Render log events as a span tree");
    println!();
    println!("Examples:");
    println!("  shimc generate api/*.idl --output=out/pnacl_shim.c");
    println!("  shimc generate ppb_foo.idl --disable-pnacl-opt");
    println!("  shimc test");
    println!("  shimc explain E2001");
}
