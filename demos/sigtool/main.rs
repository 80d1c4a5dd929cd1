use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sigtext::{
    MethodRenderOptions, RenderFlags, SignatureDescriptor, SignatureKind, SyntaxError,
    create_type_signature, decode_method, decode_with, get_array_count, get_parameter_types,
    get_return_type, get_signature_kind, get_thrown_exception_types, get_type_arguments,
    get_type_erasure, get_type_parameters,
};
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Parser)]
#[command(name = "sigtool")]
#[command(about = "Decodes, encodes and inspects type signatures", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Renders signatures as readable type names
    Decode {
        /// Signatures to decode
        #[arg(required = true)]
        signatures: Vec<String>,
        /// Drop the packages of resolved class names
        #[arg(short, long)]
        simple: bool,
        /// Keep `$` between nested classes
        #[arg(short, long)]
        preserve_nesting: bool,
        /// Omit type arguments
        #[arg(short, long)]
        erased: bool,
        /// Method name used when decoding method signatures
        #[arg(long)]
        name: Option<String>,
        /// Render the last array parameter of a method as variadic
        #[arg(long)]
        var_args: bool,
    },
    /// Encodes readable type names as signatures
    Encode {
        /// Type names to encode
        #[arg(required = true)]
        names: Vec<String>,
        /// Encode class names as unresolved
        #[arg(short, long)]
        unresolved: bool,
    },
    /// Prints the structure of signatures
    Inspect {
        /// Signatures to inspect
        #[arg(required = true)]
        signatures: Vec<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let result = match args.command {
        Command::Decode {
            signatures,
            simple,
            preserve_nesting,
            erased,
            name,
            var_args,
        } => {
            let mut flags = RenderFlags::empty();
            flags.set(RenderFlags::FULLY_QUALIFIED, !simple);
            flags.set(RenderFlags::PRESERVE_NESTING, preserve_nesting);
            flags.set(RenderFlags::ERASED, erased);
            let options = MethodRenderOptions {
                name: name.as_deref(),
                flags,
                is_var_args: var_args,
                ..MethodRenderOptions::default()
            };
            for_each(&signatures, |sig| {
                if sig.starts_with(['(', '<']) {
                    decode_method(sig, &options)
                } else {
                    decode_with(sig, flags)
                }
            })
        }
        Command::Encode { names, unresolved } => {
            for_each(&names, |name| create_type_signature(name, !unresolved))
        }
        Command::Inspect { signatures } => for_each(&signatures, inspect),
    };
    if result { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Prints the result of `action` for every input. Returns whether all of them succeeded.
fn for_each(inputs: &[String], action: impl Fn(&str) -> Result<String, SyntaxError>) -> bool {
    let mut all_ok = true;
    for input in inputs {
        match action(input) {
            Ok(output) => println!("{output}"),
            Err(err) => {
                eprintln!("{err}");
                eprintln!("  near: {}", err.fragment());
                all_ok = false;
            }
        }
    }
    all_ok
}

fn inspect(signature: &str) -> Result<String, SyntaxError> {
    let mut lines = vec![signature.to_owned()];
    if signature.starts_with(['(', '<']) {
        lines.push(format!("  type parameters: {:?}", get_type_parameters(signature)?));
        lines.push(format!("  parameters: {:?}", get_parameter_types(signature)?));
        lines.push(format!("  return type: {}", get_return_type(signature)?));
        lines.push(format!("  throws: {:?}", get_thrown_exception_types(signature)?));
    } else {
        let kind = get_signature_kind(signature)?;
        lines.push(format!("  kind: {kind}"));
        if kind == SignatureKind::Array {
            lines.push(format!("  dimensions: {}", get_array_count(signature)?));
        }
        lines.push(format!("  type arguments: {:?}", get_type_arguments(signature)?));
        let descriptor = SignatureDescriptor::new(signature)?;
        lines.push(format!("  qualified name: {}", descriptor.qualified_name));
        if let Some(package) = descriptor.package_name {
            lines.push(format!("  package: {package}"));
        }
        lines.push(format!("  unresolved: {}", descriptor.is_unresolved));
    }
    lines.push(format!("  erasure: {}", get_type_erasure(signature)?));
    Ok(lines.join("\n"))
}
