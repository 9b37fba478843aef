//! IR to Lua translator driver
//!
//! Reads a whole IR module (JSON form) from a file or standard input,
//! translates it and writes the Lua text to standard output or a file.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use luagen_backend::{translate, ErrorPolicy, TranslateOptions};
use luagen_common::ErrorReporter;
use luagen_ir::Module;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "luagen", version, about = "Translate IR modules to Lua source")]
struct Args {
    /// Input IR module in JSON form (reads stdin when absent or "-")
    input: Option<PathBuf>,

    /// Output Lua file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 4, value_name = "N")]
    indent: usize,

    /// Skip instructions that cannot be translated instead of stopping
    #[arg(long)]
    keep_going: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> TranslateOptions {
        TranslateOptions {
            indent: " ".repeat(self.indent),
            error_policy: if self.keep_going {
                ErrorPolicy::Continue
            } else {
                ErrorPolicy::Abort
            },
        }
    }

    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let source = read_input(args.input_path())?;
    let module: Module = serde_json::from_str(&source).with_context(|| {
        format!("invalid IR module in {}", describe(args.input_path()))
    })?;
    info!("Loaded module '{}' with {} items", module.name, module.items.len());

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut reporter = ErrorReporter::new();
    let result = translate(&module, &mut *out, &mut reporter, &args.options());
    out.flush()?;
    reporter.print_diagnostics();

    match result {
        Err(err) if err.kind().is_none() => Err(err.into()),
        Err(_) => {
            eprintln!("luagen: translation aborted: {}", reporter.summary());
            Ok(ExitCode::FAILURE)
        }
        Ok(()) if reporter.has_errors() => {
            eprintln!("luagen: {}", reporter.summary());
            Ok(ExitCode::FAILURE)
        }
        Ok(()) => Ok(ExitCode::SUCCESS),
    }
}

/// Read the whole input into memory
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot open file {}", path.display()))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("error in reading standard input")?;
            Ok(source)
        }
    }
}

fn describe(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let args = Args::try_parse_from(["luagen"]).unwrap();
        let options = args.options();
        assert_eq!(options.indent, "    ");
        assert_eq!(options.error_policy, ErrorPolicy::Abort);
        assert_eq!(args.input_path(), None);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "luagen", "mod.json", "-o", "out.lua", "--indent", "2", "--keep-going",
        ])
        .unwrap();
        let options = args.options();
        assert_eq!(options.indent, "  ");
        assert_eq!(options.error_policy, ErrorPolicy::Continue);
        assert_eq!(args.input_path(), Some(Path::new("mod.json")));
        assert_eq!(args.output.as_deref(), Some(Path::new("out.lua")));
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = Args::try_parse_from(["luagen", "-"]).unwrap();
        assert_eq!(args.input_path(), None);
        assert_eq!(describe(args.input_path()), "<stdin>");
    }

    #[test]
    fn test_too_many_inputs_is_usage_error() {
        assert!(Args::try_parse_from(["luagen", "a.json", "b.json"]).is_err());
    }
}
