use crate::model::QueryKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tagnav",
    version,
    about = "cscope-backed symbol navigation with jump history",
    after_help = r#"Examples:
  tagnav update --repo .
  tagnav list --kind definitions hal_Open
  tagnav jump --kind callers memd_FlashOpen --from-file src/main.c --from-line 120
  tagnav jump --kind includers hal.h
  tagnav back
  tagnav complete hal_

Editor integrations can export TAGNAV_CURRENT_WORD, TAGNAV_CURRENT_FILE,
TAGNAV_CURRENT_LINE and TAGNAV_CURRENT_COLUMN instead of passing the
symbol and --from-* flags."#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rebuild the cscope database and ctags file for the project.
    Update {
        #[arg(long, default_value = ".")]
        repo: PathBuf,
    },
    /// List matching locations as JSON, without jumping.
    List {
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        /// What to look up.
        #[arg(long, value_enum, default_value = "symbol")]
        kind: QueryKind,
        /// Symbol (or file name for --kind includers); defaults to the
        /// host cursor context.
        symbol: Option<String>,
    },
    /// Resolve to one location, record the current position, and print
    /// the jump target.
    Jump {
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        /// What to look up.
        #[arg(long, value_enum, default_value = "symbol")]
        kind: QueryKind,
        /// Symbol (or file name for --kind includers); defaults to the
        /// host cursor context.
        symbol: Option<String>,
        /// File the cursor is in, saved to history before jumping.
        #[arg(long)]
        from_file: Option<PathBuf>,
        /// Cursor line, 1-based; 0 or absent means unknown.
        #[arg(long)]
        from_line: Option<u32>,
        /// Cursor column; 0 or absent means unknown.
        #[arg(long)]
        from_column: Option<u32>,
    },
    /// Pop the most recent history entry and print it.
    Back {
        #[arg(long, default_value = ".")]
        repo: PathBuf,
    },
    /// Print symbols from the ctags file starting with PREFIX.
    Complete {
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        prefix: String,
    },
}
