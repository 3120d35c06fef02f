use bounce_core::Preset;
use host::cli::{parse_options, verify_target, Options};
use host::{
    build_report, default_report_filename, load_report, resolve_params, save_report,
    verify_report, ParamsReport,
};
use std::env;
use std::path::Path;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "show" => {
            let opts = parse_or_exit(&args[2..]);
            opts.at_most(0).unwrap_or_else(|e| exit_with(&e));
            show_command(opts.preset, opts.config.as_deref());
        }

        "check" => {
            let opts = parse_or_exit(&args[2..]);
            let config_file = opts.check_target().unwrap_or_else(|e| {
                eprintln!("Usage: {} check <config_file> [--preset <p>]", args[0]);
                exit_with(&e)
            });
            check_command(opts.preset, &config_file);
        }

        "export" => {
            let opts = parse_or_exit(&args[2..]);
            opts.at_most(1).unwrap_or_else(|e| exit_with(&e));
            let output_file = opts.positional.first().map(|s| s.as_str());
            export_command(opts.preset, opts.config.as_deref(), output_file);
        }

        "verify" => {
            let report_file = verify_target(&args[2..]).unwrap_or_else(|e| {
                eprintln!("Usage: {} verify <report_file>", args[0]);
                exit_with(&e)
            });
            verify_command(&report_file);
        }

        "--help" | "-h" => {
            print_usage(&args[0]);
            std::process::exit(0);
        }

        _ => {
            eprintln!("❌ Unknown command: {}", command);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn exit_with(msg: &str) -> ! {
    eprintln!("❌ Error: {}", msg);
    std::process::exit(1);
}

fn parse_or_exit(args: &[String]) -> Options {
    parse_options(args).unwrap_or_else(|e| exit_with(&e))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  show [--preset <p>] [--config <file>]");
    eprintln!("      Print the resolved simulation parameters");
    eprintln!();
    eprintln!("  check <config_file> [--preset <p>]");
    eprintln!("      Apply a JSON override file to a preset and validate the result");
    eprintln!();
    eprintln!("  export [--preset <p>] [--config <file>] [output_file]");
    eprintln!("      Save a parameter report (JSON) with derived, fixed-point and");
    eprintln!("      fingerprint values");
    eprintln!("      Defaults to: bounce-params_<preset>_<timestamp>.json");
    eprintln!();
    eprintln!("  verify <report_file>");
    eprintln!("      Recompute a saved report's fingerprint and derived values");
    eprintln!();
    eprintln!("Presets:");
    eprintln!("  classic: 800x600, 5px balls (default)");
    eprintln!("  wide:    1366x768, 2px balls");
    eprintln!();
    eprintln!("Set RUST_LOG=info for diagnostic logging.");
}

fn print_report(report: &ParamsReport) {
    let p = &report.params;
    let d = &report.derived;
    println!("  Preset:        {}", report.preset);
    println!("  Bounds:        {} x {}", p.width, p.height);
    println!("  Ball diameter: {} (radius {})", p.ball_diam, d.ball_rad);
    println!("  Usable bound:  {} x {}", d.max_x, d.max_y);
    println!("  Gravity:       {}", p.gravity);
    println!("  Friction:      {}", p.friction);
    println!("  Wall force:    {}", p.wall_force);
    println!("  Coll force:    {}", p.coll_force);
    println!("  Coll friction: {}", p.coll_friction);
    println!("  Ball speed:    {}", p.ball_speed);
    println!(
        "  Tile slots:    {} ({} x {} per tile)",
        p.tile_slots, d.tile_width, d.tile_height
    );
    println!("  Target balls:  {}", p.target_ball_c);
    println!("  Fingerprint:   0x{}", report.fingerprint);
}

fn show_command(preset: Preset, config: Option<&str>) {
    let params = resolve_params(preset, config.map(Path::new)).unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    });

    println!("🎱 Bounce simulation parameters");
    println!("{}", "=".repeat(70));
    print_report(&build_report(preset, &params));
    println!("{}", "=".repeat(70));
}

fn check_command(preset: Preset, config_file: &str) {
    println!("📋 Checking config");
    println!("  Config file: {}", config_file);
    println!("  Base preset: {}", preset);
    println!();

    match resolve_params(preset, Some(Path::new(config_file))) {
        Ok(params) => {
            println!("✅ Parameters are valid");
            print_report(&build_report(preset, &params));
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn export_command(preset: Preset, config: Option<&str>, output_file: Option<&str>) {
    let params = resolve_params(preset, config.map(Path::new)).unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    });

    let report = build_report(preset, &params);

    let default_filename = default_report_filename(preset, chrono::Utc::now().timestamp());
    let file_to_save = output_file.unwrap_or(&default_filename);

    match save_report(&report, Path::new(file_to_save)) {
        Ok(()) => {
            println!("✅ Report exported");
            print_report(&report);
            println!();
            println!("💾 Report saved to: {}", file_to_save);
            println!("   Use 'verify {}' to check it later", file_to_save);
        }
        Err(e) => {
            eprintln!("❌ Error saving report: {}", e);
            std::process::exit(1);
        }
    }
}

fn verify_command(report_file: &str) {
    println!("📋 Verifying report");
    println!("  Report file: {}", report_file);
    println!();

    let report = match load_report(Path::new(report_file)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("❌ Error loading report: {}", e);
            std::process::exit(1);
        }
    };

    match verify_report(&report) {
        Ok(()) => {
            println!("✅ Report matches its parameters");
            print_report(&report);
            println!("  Generated at:  {}", report.generated_at);
        }
        Err(e) => {
            eprintln!("❌ Report verification failed: {}", e);
            eprintln!("   The report was edited after export or is corrupted");
            std::process::exit(1);
        }
    }
}
