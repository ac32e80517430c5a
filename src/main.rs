use anyhow::Result;
use clap::Parser;
use tagnav::choose::StdinSelector;
use tagnav::config::Config;
use tagnav::error::NavError;
use tagnav::model::QueryKind;
use tagnav::navigate::{JumpOutcome, Navigator};
use tagnav::query::CscopeService;
use tagnav::{cli, context, index};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    match args.command {
        cli::Command::Update { repo } => {
            let config = Config::new(repo);
            let stats = index::update(&config)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        cli::Command::List { repo, kind, symbol } => {
            let config = Config::new(repo);
            let term = resolve_query_term(kind, symbol)?;
            let service = CscopeService::new(&config);
            let navigator = Navigator::new(&config, &service);
            let records = navigator.list_locations(kind, &term)?;
            if records.is_empty() {
                eprintln!("tagnav: no {} found for \"{term}\"", kind.describe());
                return Ok(());
            }
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        cli::Command::Jump {
            repo,
            kind,
            symbol,
            from_file,
            from_line,
            from_column,
        } => {
            let config = Config::new(repo);
            let term = resolve_query_term(kind, symbol)?;
            let current = context::current_frame(from_file, from_line, from_column)?;
            let service = CscopeService::new(&config);
            let navigator = Navigator::new(&config, &service);
            match navigator.jump_to(kind, &term, current, &mut StdinSelector)? {
                JumpOutcome::Target(target) => {
                    println!("{}", serde_json::to_string_pretty(&target)?);
                }
                // Explicit cancel ends the operation silently.
                JumpOutcome::Cancelled => {}
                JumpOutcome::NoMatches => {
                    eprintln!("tagnav: no {} found for \"{term}\"", kind.describe());
                }
            }
            Ok(())
        }
        cli::Command::Back { repo } => {
            let config = Config::new(repo);
            let service = CscopeService::new(&config);
            let navigator = Navigator::new(&config, &service);
            match navigator.jump_back() {
                Ok(frame) => {
                    println!("{}", serde_json::to_string_pretty(&frame)?);
                    Ok(())
                }
                Err(err) if err.is_informational() => {
                    eprintln!("tagnav: {err}");
                    Ok(())
                }
                Err(err) => Err(err.into()),
            }
        }
        cli::Command::Complete { repo, prefix } => {
            let config = Config::new(repo);
            let symbols = index::completions(&config, &prefix)?;
            if symbols.is_empty() {
                eprintln!("tagnav: no symbols starting with \"{prefix}\"");
                return Ok(());
            }
            for symbol in symbols {
                println!("{symbol}");
            }
            Ok(())
        }
    }
}

fn resolve_query_term(kind: QueryKind, symbol: Option<String>) -> Result<String, NavError> {
    match kind {
        QueryKind::Includers => context::resolve_file_term(symbol),
        _ => context::resolve_term(symbol),
    }
}
