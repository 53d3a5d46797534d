use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser as ClapParser;

use treelox::runner::Lox;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Script to execute; starts an interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Cli = match Cli::try_parse() {
        Ok(args) => args,

        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(64);
        }
    };

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

fn run_file(path: &Path) -> anyhow::Result<()> {
    let mut source = String::new();
    let mut reader: BufReader<File> = BufReader::new(File::open(path)?);
    reader.read_to_string(&mut source)?;

    let mut lox = Lox::new();
    lox.run(&source);

    if lox.had_compile_error {
        std::process::exit(65);
    }
    if lox.had_runtime_error {
        std::process::exit(70);
    }

    Ok(())
}

fn run_prompt() -> anyhow::Result<()> {
    let mut lox = Lox::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        lox.run(&line);
        lox.clear_errors();
    }

    Ok(())
}
