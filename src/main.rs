use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use graql_lang::parse;
use tracing_subscriber::EnvFilter;

/// Parse Graql patterns and print them back in canonical form
#[derive(Parser, Debug)]
#[command(name = "graql-fmt", version)]
struct Args {
    /// File holding the pattern, or `-` to read stdin
    input: PathBuf,

    /// List every statement referenced by the pattern
    #[arg(long)]
    statements: bool,

    /// List the named variables of the pattern
    #[arg(long)]
    variables: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Read from file or stdin
    let source = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        buffer
    } else {
        std::fs::read_to_string(&args.input).unwrap_or_else(|e| {
            eprintln!("Error reading file '{}': {}", args.input.display(), e);
            std::process::exit(1);
        })
    };

    let pattern = match parse(&source) {
        Ok(pattern) => pattern,
        Err(e) => {
            let pos = match e.get_span().and_then(|s| s.to_pos(&source)) {
                Some((start, _)) => format!("{}:{}", start.line, start.column),
                None => "unknown position".to_string(),
            };
            eprintln!("{}: {}", pos, e);
            std::process::exit(1);
        }
    };

    println!("{}", pattern);

    if args.statements {
        println!("\nStatements:");
        for (i, statement) in pattern.inner_statements().iter().enumerate() {
            println!("{:4}: {}", i, statement);
        }
    }

    if args.variables {
        println!("\nVariables:");
        for var in pattern.variables() {
            println!("  {}", var);
        }
    }
}
