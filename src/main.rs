use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use scrypt::{
    ast::Node,
    error::Error,
    interpreter::{environment::Environment, lexer::lex, parser::core::Parser as ScriptParser},
    run_source,
    util::num::{format_array, format_number},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// scrypt runs programs written in a small imperative scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What to do with the input.
    #[arg(short, long, value_enum, default_value_t = Mode::Run)]
    mode: Mode,

    /// Tells scrypt to read SOURCE as the path of a script file.
    #[arg(short, long)]
    file: bool,

    /// The script. Standard input is read when it is left out.
    source: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run the whole program; only `print` produces output.
    Run,
    /// Treat every line as a statement, echoing it and its value.
    Calc,
    /// Print every statement as parenthesized infix text.
    Parse,
    /// Print every token with its line and column.
    Lex,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = match read_script(&args) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input: {e}");
            return ExitCode::FAILURE;
        },
    };

    let outcome = match args.mode {
        Mode::Run => run_source(&script, &mut Environment::new()).map(|_| ()),
        Mode::Calc => {
            calc(&script);
            Ok(())
        },
        Mode::Parse => print_statements(&script),
        Mode::Lex => print_tokens(&script),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        },
    }
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let _ = tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                          .with(EnvFilter::from_default_env())
                                          .try_init();
}

fn read_script(args: &Args) -> io::Result<String> {
    match (&args.source, args.file) {
        (Some(path), true) => fs::read_to_string(path),
        (Some(source), false) => Ok(source.clone()),
        (None, _) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        },
    }
}

/// Evaluates the input one line at a time, echoing each statement and its
/// value. Errors are reported and the next line is processed.
fn calc(script: &str) {
    let mut env = Environment::new();
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        if let Err(e) = calc_line(line, &mut env) {
            println!("{e}");
        }
    }
}

fn calc_line(line: &str, env: &mut Environment) -> Result<(), Error> {
    let tokens = lex(line)?;
    let mut parser = ScriptParser::with_functions(tokens, env.function_names());

    while let Some(statement) = parser.parse_next()? {
        for def in parser.take_definitions() {
            env.register_function(def);
        }
        println!("{statement}");
        let value = env.evaluate(&statement)?;
        println!("{}", display_result(&statement, value, env));
    }
    Ok(())
}

/// Formats the value of a statement the way `calc` shows it.
fn display_result(statement: &Node, value: f64, env: &Environment) -> String {
    if let Node::Assignment { name, .. } = statement
       && let Some(values) = env.array(name)
       && env.variable(name).is_none()
    {
        return format_array(values);
    }
    if statement.is_boolean_shaped() {
        return (value != 0.0).to_string();
    }
    format_number(value)
}

fn print_statements(script: &str) -> Result<(), Error> {
    let mut env = Environment::new();
    let mut parser = ScriptParser::new(lex(script)?);
    while let Some(statement) = parser.parse_next()? {
        for def in parser.take_definitions() {
            env.register_function(def);
        }
        println!("{statement}");
    }
    Ok(())
}

fn print_tokens(script: &str) -> Result<(), Error> {
    for token in lex(script)? {
        println!("{:>4}{:>5}  {}", token.line, token.column, token.text);
    }
    Ok(())
}
