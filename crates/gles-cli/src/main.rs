use std::process::ExitCode;

use gles_compat::{InitReport, ProviderManifest, ShimConfig, initialize};

fn usage() {
    eprintln!("usage: gles-cli audit <provider.json> [--quiet] [--json]");
}

fn print_report(report: &InitReport) {
    println!("core_total: {}", gles_catalog::CORE_FUNCTIONS.len());
    println!("core_bound: {}", report.core.bound);
    println!("core_stubbed: {}", report.core.stubbed.len());
    println!("ext_total: {}", gles_catalog::EXT_FUNCTIONS.len());
    println!("ext_bound: {}", report.ext.bound);
    println!("ext_stubbed: {}", report.ext.stubbed.len());
    if !report.core.stubbed.is_empty() {
        println!("core_missing: {}", report.core.stubbed.join(", "));
    }
    if !report.ext.stubbed.is_empty() {
        println!("ext_missing: {}", report.ext.stubbed.join(", "));
    }
    if !report.patched.is_empty() {
        println!("patched: {}", report.patched.join(", "));
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args[1] != "audit" {
        usage();
        return ExitCode::from(2);
    }

    let mut quiet = false;
    let mut json = false;
    for flag in &args[3..] {
        match flag.as_str() {
            "--quiet" => quiet = true,
            "--json" => json = true,
            _ => {
                usage();
                return ExitCode::from(2);
            }
        }
    }

    let manifest = match ProviderManifest::parse_file(&args[2]) {
        Ok(manifest) => manifest,
        Err(err) => {
            eprintln!("manifest error: {err}");
            return ExitCode::from(1);
        }
    };

    let provider = manifest.build_provider();
    let config = ShimConfig {
        show_warnings: !quiet,
    };
    let namespaces = initialize(&provider, &config);

    if json {
        match serde_json::to_string_pretty(&namespaces.report) {
            Ok(body) => println!("{body}"),
            Err(err) => {
                eprintln!("report error: {err}");
                return ExitCode::from(1);
            }
        }
    } else {
        print_report(&namespaces.report);
    }
    ExitCode::SUCCESS
}
