use clap::{Parser, Subcommand};
use sketchflow::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Parses Arduino library headers and compiles visual sketches
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a C/C++ header into a library descriptor
    Parse {
        /// Path to the header file, e.g. `Servo.h`
        header_path: String,
        /// Print the library as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Compile an editor sketch export into Arduino source
    Compile {
        /// Path to the sketch JSON exported by the editor
        sketch_path: String,
        /// Write the sketch to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Parse { header_path, json } => run_parse(&header_path, json),
        Command::Compile {
            sketch_path,
            output,
        } => run_compile(&sketch_path, output.as_deref()),
    }
}

fn run_parse(header_path: &str, json: bool) {
    let content = fs::read_to_string(header_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read header '{}': {}", header_path, e))
    });
    let source_id = Path::new(header_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(header_path);

    let parsed = parse_header(&content, source_id)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    for warning in &parsed.warnings {
        eprintln!("warning: {}", warning);
    }

    if json {
        let text = parsed
            .library
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize library: {}", e)));
        println!("{}", text);
        return;
    }

    let library = &parsed.library;
    println!("Library: {} ({})", library.name, library.include_statement);
    println!("\nConstants ({}):", library.constants.len());
    for constant in &library.constants {
        println!("  {} {} = {}", constant.value_type, constant.name, constant.value);
    }
    println!("\nFunctions ({}):", library.functions.len());
    for function in &library.functions {
        println!("  {}", signature(function));
    }
    println!("\nClasses ({}):", library.classes.len());
    for class in &library.classes {
        println!(
            "  {} ({} constructors, {} methods)",
            class.name,
            class.constructors.len(),
            class.methods.len()
        );
        for method in &class.methods {
            println!("    {}", signature(method));
        }
    }
}

fn signature(function: &FunctionDef) -> String {
    let params = function
        .parameters
        .iter()
        .map(|p| match &p.default_value {
            Some(default) => format!("{} {} = {}", p.value_type, p.name, default),
            None => format!("{} {}", p.value_type, p.name),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} {}({})", function.return_type, function.call_name(), params)
}

fn run_compile(sketch_path: &str, output: Option<&str>) {
    let start = Instant::now();

    let json = fs::read_to_string(sketch_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read sketch '{}': {}", sketch_path, e))
    });
    let export = UiSketch::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse sketch JSON: {}", e)));
    let graph = export
        .into_sketch()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert sketch: {}", e)));

    let source = compile_sketch(&graph);
    log::info!("Compiled '{}' in {:?}", sketch_path, start.elapsed());

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", source)).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            eprintln!("Wrote {}", path);
        }
        None => println!("{}", source),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
