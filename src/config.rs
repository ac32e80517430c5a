use std::env;
use std::path::{Path, PathBuf};

/// Everything derived from the project root, resolved once in main and
/// passed by reference into the components that need it. The index
/// directory holds all generated state: cscope database, ctags file,
/// and the jump history.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_root: PathBuf,
    pub index_dir: PathBuf,
    pub cscope_db: PathBuf,
    pub cscope_files: PathBuf,
    pub tags_file: PathBuf,
    pub history_file: PathBuf,
    /// cscope binary (TAGNAV_CSCOPE).
    pub cscope_bin: String,
    /// ctags binary (TAGNAV_CTAGS).
    pub ctags_bin: String,
}

impl Config {
    pub fn new(project_root: PathBuf) -> Self {
        let index_dir = project_root.join(".tagnav");
        Self {
            cscope_db: index_dir.join("cscope.out"),
            cscope_files: index_dir.join("cscope.files"),
            tags_file: index_dir.join("tags"),
            history_file: index_dir.join("history.yaml"),
            cscope_bin: bin_from_env("TAGNAV_CSCOPE", "cscope"),
            ctags_bin: bin_from_env("TAGNAV_CTAGS", "ctags"),
            project_root,
            index_dir,
        }
    }

    /// Queries run `cscope -q -d`, which needs the inverted-index files
    /// next to cscope.out; a partially written index reads as "no index".
    pub fn index_exists(&self) -> bool {
        self.cscope_db.is_file()
            && self.index_dir.join("cscope.in.out").is_file()
            && self.index_dir.join("cscope.po.out").is_file()
    }
}

fn bin_from_env(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Strip the project root from an absolute path for display; paths outside
/// the project are shown as-is.
pub fn display_path(project_root: &Path, path: &str) -> String {
    match Path::new(path).strip_prefix(project_root) {
        Ok(rel) => rel.to_string_lossy().to_string(),
        Err(_) => path.to_string(),
    }
}
