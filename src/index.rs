use crate::config::Config;
use crate::error::{NavError, NavResult};
use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;
use serde::Serialize;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Extensions fed to the cscope file list. cscope understands C-family
/// sources; everything else is ignored.
static SOURCE_EXTENSIONS: &[&str] = &["c", "h", "cpp", "hpp", "cc", "hh", "m", "java"];

#[derive(Debug, Serialize)]
pub struct UpdateStats {
    pub files_listed: usize,
    pub cscope_db: String,
    pub tags_file: String,
}

/// Rebuild the cscope database and the ctags file under the index
/// directory. This is a thin wrapper over the external tools; the
/// navigation core only ever reads what this produces.
pub fn update(config: &Config) -> Result<UpdateStats> {
    fs::create_dir_all(&config.index_dir)
        .with_context(|| format!("create dir {}", config.index_dir.display()))?;

    let files = collect_sources(config)?;
    let mut listing = String::new();
    for path in &files {
        listing.push_str(&path.to_string_lossy());
        listing.push('\n');
    }
    fs::write(&config.cscope_files, listing)
        .with_context(|| format!("write {}", config.cscope_files.display()))?;

    // -b build only, -q also build the inverted index for fast lookups.
    // Run in the index directory so cscope picks up cscope.files and
    // leaves cscope.out next to it.
    run_tool(
        Command::new(&config.cscope_bin)
            .arg("-b")
            .arg("-q")
            .current_dir(&config.index_dir),
        &config.cscope_bin,
    )?;

    run_tool(
        Command::new(&config.ctags_bin)
            .arg("--recurse")
            .arg("--extra=+f")
            .arg("--excmd=number")
            .arg("--c-kinds=+p+x")
            .arg("-f")
            .arg(&config.tags_file)
            .arg(&config.project_root),
        &config.ctags_bin,
    )?;

    Ok(UpdateStats {
        files_listed: files.len(),
        cscope_db: config.cscope_db.display().to_string(),
        tags_file: config.tags_file.display().to_string(),
    })
}

fn run_tool(command: &mut Command, name: &str) -> Result<()> {
    let output = command.output().with_context(|| format!("run {name}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{name} exited with {}: {}", output.status, stderr.trim());
    }
    Ok(())
}

fn collect_sources(config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkBuilder::new(&config.project_root)
        .hidden(true)
        .require_git(false)
        .build();
    for entry in walker {
        let entry = match entry {
            Ok(value) => value,
            Err(err) => {
                eprintln!("tagnav: walk error: {err}");
                continue;
            }
        };
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        let ext = path.extension().and_then(OsStr::to_str).unwrap_or("");
        if SOURCE_EXTENSIONS.contains(&ext) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Symbols in the ctags file starting with `prefix`, sorted and
/// deduplicated. The tag name is the first tab-separated field; pseudo
/// tags (`!_TAG_...`) are skipped.
pub fn completions(config: &Config, prefix: &str) -> NavResult<Vec<String>> {
    if !config.tags_file.is_file() {
        return Err(NavError::IndexNotFound(config.index_dir.clone()));
    }
    let raw = fs::read_to_string(&config.tags_file)
        .map_err(|err| NavError::storage(&config.tags_file, err))?;
    let mut symbols = BTreeSet::new();
    for line in raw.lines() {
        if line.starts_with("!_TAG_") {
            continue;
        }
        let name = line.split('\t').next().unwrap_or("");
        if !name.is_empty() && name.starts_with(prefix) {
            symbols.insert(name.to_string());
        }
    }
    Ok(symbols.into_iter().collect())
}
