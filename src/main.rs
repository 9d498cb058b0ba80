/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  The `gscript` command-line runner.
 *
 * License:
 * This file is part of the GScript programming language project.
 *
 * GScript is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gscript::{lexer, parse_source, Config, DiagnosticPrinter, GscriptError, GscriptResult, Interpreter};

/// gscript runs scripts written in GScript, a tiny language of numbers,
/// strings, functions and loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells gscript to read CONTENTS as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// JSON configuration file; flags below override its values.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep running later statements after a runtime error.
    #[arg(long)]
    keep_going: bool,

    /// Trace function definitions and calls on stderr.
    #[arg(long)]
    trace: bool,

    /// Maximum depth of nested function calls.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Print the token stream as JSON and exit.
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed program as JSON and exit.
    #[arg(long, conflicts_with = "dump_tokens")]
    dump_ast: bool,

    contents: String,
}

impl Args {
    fn load_config(&self) -> GscriptResult<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        config.continue_on_error |= self.keep_going;
        config.trace |= self.trace;
        if let Some(depth) = self.max_depth {
            config.max_call_depth = depth;
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (file_name, script) = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => (args.contents.clone(), script),
            Err(e) => {
                eprintln!(
                    "Failed to read the input file '{}': {}. Perhaps this file does not exist?",
                    &args.contents, e
                );
                return ExitCode::FAILURE;
            }
        }
    } else {
        ("<inline>".to_string(), args.contents.clone())
    };

    let printer = DiagnosticPrinter::new(file_name, script.as_str());

    match execute(&args, &script) {
        Ok(errors) if errors.is_empty() => ExitCode::SUCCESS,
        Ok(errors) => {
            for error in &errors {
                printer.print(error);
            }
            ExitCode::FAILURE
        }
        Err(error) => {
            printer.print(&error);
            ExitCode::FAILURE
        }
    }
}

/// Runs (or dumps) the script; the returned errors were recovered from.
fn execute(args: &Args, script: &str) -> GscriptResult<Vec<GscriptError>> {
    let config = args.load_config()?;

    if args.dump_tokens {
        print_json(&lexer::tokenize(script))?;
        return Ok(Vec::new());
    }

    let program = parse_source(script, &config)?;

    if args.dump_ast {
        print_json(&program.statements)?;
        return Ok(Vec::new());
    }

    Interpreter::new(config, io::BufWriter::new(io::stdout())).run(&program)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> GscriptResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| GscriptError::io_error(format!("cannot serialize: {}", e)))?;
    println!("{}", json);
    Ok(())
}
