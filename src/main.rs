use std::{
    env::args_os,
    fs,
    io::{self, stdin, IsTerminal},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result};
use rustyline::{error::ReadlineError, DefaultEditor};
use schiefer::dump;
use schiefer::interpreter::{Interpreter, RunReport};

fn main() -> ExitCode {
    if args_os().len() > 2 {
        eprintln!("usage: schiefer [file]");
        return ExitCode::FAILURE;
    }

    let result = if let Some(arg) = args_os().nth(1) {
        run_file(Path::new(&arg))
    } else {
        run_prompt()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_file(path: &Path) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    fs::write("NOSPACES.TXT", dump::strip_whitespace(&source))
        .context("writing NOSPACES.TXT")?;
    fs::write("RES_SYM.TXT", dump::reserved_and_symbols(&source).join("\n"))
        .context("writing RES_SYM.TXT")?;

    report(&schiefer::run(&source));
    Ok(())
}

// A run with diagnostics still exits successfully; only usage and I/O
// problems are process failures.
fn report(report: &RunReport) {
    for line in &report.output {
        println!("{line}");
    }
    if report.is_clean() {
        println!("NO ERROR(S) FOUND");
    } else {
        println!("ERROR");
        for diag in &report.diagnostics {
            println!("{diag}");
        }
    }
}

fn run_prompt() -> Result<()> {
    if !stdin().is_terminal() {
        let source = io::read_to_string(stdin().lock())?;
        report(&schiefer::run(&source));
        return Ok(());
    }

    let mut interpreter = Interpreter::new();
    let mut rl = DefaultEditor::new()?;
    let mut line_no = 0;
    let (mut shown_output, mut shown_diags) = (0, 0);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                line_no += 1;
                interpreter.interpret_line(line_no, &line);

                for out in &interpreter.output()[shown_output..] {
                    println!("{out}");
                }
                shown_output = interpreter.output().len();
                for diag in &interpreter.diagnostics()[shown_diags..] {
                    println!("{diag}");
                }
                shown_diags = interpreter.diagnostics().len();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}
