use crate::error::{NavError, NavResult};
use crate::model::NavigationFrame;
use std::env;
use std::path::{Path, PathBuf};

/// Host-editor context. Command-line flags win; the TAGNAV_CURRENT_*
/// environment variables are the fallback so editor integrations can
/// export the cursor position instead of passing flags.
pub const ENV_CURRENT_WORD: &str = "TAGNAV_CURRENT_WORD";
pub const ENV_CURRENT_FILE: &str = "TAGNAV_CURRENT_FILE";
pub const ENV_CURRENT_LINE: &str = "TAGNAV_CURRENT_LINE";
pub const ENV_CURRENT_COLUMN: &str = "TAGNAV_CURRENT_COLUMN";

/// The symbol to query: explicit argument, else the word under the host
/// cursor.
pub fn resolve_term(arg: Option<String>) -> NavResult<String> {
    match arg.or_else(|| non_empty_env(ENV_CURRENT_WORD)) {
        Some(term) => Ok(term),
        None => Err(NavError::MissingContext(
            "no symbol given and nothing under the cursor (set TAGNAV_CURRENT_WORD or pass SYMBOL)",
        )),
    }
}

/// The file to query for `--kind includers`: explicit argument, else the
/// basename of the current file.
pub fn resolve_file_term(arg: Option<String>) -> NavResult<String> {
    if let Some(term) = arg {
        return Ok(term);
    }
    let current = current_file().ok_or(NavError::MissingContext(
        "no file given and no current file (set TAGNAV_CURRENT_FILE or pass a file name)",
    ))?;
    match Path::new(&current).file_name() {
        Some(name) => Ok(name.to_string_lossy().to_string()),
        None => Err(NavError::MissingContext("current file has no basename")),
    }
}

/// Where the user is right now, to be pushed to history before jumping
/// away. Line and column fall back to 0 ("unknown") when absent; the
/// file itself is required.
pub fn current_frame(
    file: Option<PathBuf>,
    line: Option<u32>,
    column: Option<u32>,
) -> NavResult<NavigationFrame> {
    let file = file
        .map(|p| p.to_string_lossy().to_string())
        .or_else(current_file)
        .ok_or(NavError::MissingContext(
            "current file unknown (set TAGNAV_CURRENT_FILE or pass --from-file)",
        ))?;
    let line = line.or_else(|| env_u32(ENV_CURRENT_LINE)).unwrap_or(0);
    let column = column.or_else(|| env_u32(ENV_CURRENT_COLUMN)).unwrap_or(0);
    Ok(NavigationFrame::new(file, line, column))
}

fn current_file() -> Option<String> {
    non_empty_env(ENV_CURRENT_FILE)
}

fn non_empty_env(var: &str) -> Option<String> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn env_u32(var: &str) -> Option<u32> {
    env::var(var).ok().and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var fallbacks and the MissingContext paths live in
    // tests/context.rs, which owns the process environment.

    #[test]
    fn explicit_term_wins() {
        let term = resolve_term(Some("hal_Open".to_string())).unwrap();
        assert_eq!(term, "hal_Open");
    }

    #[test]
    fn explicit_file_term_passes_through() {
        let term = resolve_file_term(Some("hal.h".to_string())).unwrap();
        assert_eq!(term, "hal.h");
    }

    #[test]
    fn frame_from_flags_defaults_line_and_column_to_zero() {
        let frame = current_frame(Some(PathBuf::from("/src/main.c")), None, None).unwrap();
        assert_eq!(frame, NavigationFrame::new("/src/main.c", 0, 0));
    }

    #[test]
    fn frame_keeps_explicit_position() {
        let frame =
            current_frame(Some(PathBuf::from("/src/main.c")), Some(10), Some(4)).unwrap();
        assert_eq!(frame, NavigationFrame::new("/src/main.c", 10, 4));
    }
}
