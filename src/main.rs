//! Yambot -- a Yamb scorekeeper driven over a line protocol.
//!
//! Reads commands from stdin and writes responses to stdout. Diagnostics go
//! to stderr through `env_logger` (set `RUST_LOG=debug` for more).
//!
//! Usage:
//!   yambot [OPTIONS]
//!
//! Options:
//!   --rules FILE    Load house rules from a JSON file
//!   --seed N        Seed the dice for reproducible games
//!   --help          Print this help

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use env_logger::Env;

use yambot::config::Rules;
use yambot::engine::{reject, Engine};
use yambot::protocol::parser::{parse_command, Command};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let mut rules_path: Option<String> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rules" => {
                i += 1;
                rules_path = Some(arg_value(&args, i, "--rules").to_string());
            }
            "--seed" => {
                i += 1;
                let raw = arg_value(&args, i, "--seed");
                match raw.parse() {
                    Ok(n) => seed = Some(n),
                    Err(_) => fail(&format!("invalid --seed value: {}", raw)),
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => fail(&format!("unknown argument: {}", other)),
        }
        i += 1;
    }

    let rules = match rules_path {
        Some(path) => match Rules::load(&path) {
            Ok(rules) => {
                log::info!("loaded rules from {}: {:?}", path, rules);
                rules
            }
            Err(e) => fail(&format!("{}: {}", path, e)),
        },
        None => Rules::default(),
    };

    let mut engine = match seed {
        Some(seed) => Engine::with_seed(rules, seed),
        None => Engine::new(rules),
    };

    if let Err(e) = run(&mut engine) {
        log::error!("output failed: {}", e);
        process::exit(1);
    }
}

/// Runs the main protocol loop until `quit` or end of input.
fn run(engine: &mut Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line?;

        let cmd = match parse_command(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("malformed command '{}': {}", line.trim(), e);
                reject(&mut out, e)?;
                out.flush()?;
                continue;
            }
        };
        log::debug!("command: {:?}", cmd);

        match cmd {
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => engine.handle_setoption(&name, value.as_deref(), &mut out)?,
            Command::NewGame => {
                engine.new_game();
                writeln!(out, "ok newgame")?;
                out.flush()?;
            }
            Command::Roll { dice } => engine.handle_roll(dice, &mut out)?,
            Command::Play(action) => engine.handle_play(&action, &mut out)?,
            Command::Feasible => engine.handle_feasible(&mut out)?,
            Command::Board => engine.handle_board(&mut out)?,
            Command::Score => engine.handle_score(&mut out)?,
            Command::Status => engine.handle_status(&mut out)?,
            Command::Quit => break,
        }
    }
    Ok(())
}

fn arg_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v.as_str(),
        None => fail(&format!("{} needs a value", flag)),
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{}", msg);
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: yambot [--rules FILE] [--seed N] [--help]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --rules FILE    Load house rules from a JSON file");
    eprintln!("  --seed N        Seed the dice for reproducible games");
    eprintln!("  --help          Print this help");
}
