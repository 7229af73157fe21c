use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use ora_oracle::{OracleSession, SessionConfig};

pub fn run(seed: Option<u64>, chaos: u32, history: Option<PathBuf>) -> Result<(), String> {
    let mut config = SessionConfig::default().with_chaos(chaos);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = history {
        config = config.with_history(path);
    }

    let mut session =
        OracleSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} Oracle Session", "Starting".bold());
    match seed {
        Some(seed) => println!("  Chaos: {} | Seed: {seed}", session.chaos()),
        None => println!("  Chaos: {}", session.chaos()),
    }
    if !session.history().is_empty() {
        println!("  Loaded {} earlier rolls.", session.history().len());
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
