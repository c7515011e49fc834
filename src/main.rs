use pish::config::ShellConfig;
use pish::error::ShellError;
use pish::flags::Flags;
use pish::process::{signal, EXIT_FAILURE};
use pish::shell::Shell;
use std::{env, process};

fn main() {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("{}", e);
        process::exit(EXIT_FAILURE);
    }

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("pish {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging(flags.is_set("debug"));

    let status = run(&flags).unwrap_or_else(|e| {
        eprintln!("{}", e);
        EXIT_FAILURE
    });
    process::exit(status);
}

fn run(flags: &Flags) -> Result<i32, ShellError> {
    signal::restore_default_dispositions()?;
    let config = ShellConfig::from_flags(flags)?;
    let mut shell = Shell::new(config)?;
    shell.run()
}

fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
