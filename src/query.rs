use crate::config::Config;
use crate::error::{NavError, NavResult};
use crate::model::{LocationRecord, QueryKind};
use crate::parse;
use std::process::Command;

/// Narrow seam to the external indexer: a request code plus a term in,
/// raw output lines out. Substitutable with an in-memory fake in tests.
pub trait IndexQueryService {
    fn raw_lines(&self, request_code: u32, term: &str) -> NavResult<Vec<String>>;
}

/// Production backend: one `cscope -L` invocation per query, run inside
/// the index directory so cscope finds its database files.
pub struct CscopeService<'a> {
    config: &'a Config,
}

impl<'a> CscopeService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl IndexQueryService for CscopeService<'_> {
    fn raw_lines(&self, request_code: u32, term: &str) -> NavResult<Vec<String>> {
        // -L single line-oriented search, -d do not rebuild the
        // cross-reference, -q use the inverted index.
        let output = Command::new(&self.config.cscope_bin)
            .arg("-L")
            .arg("-q")
            .arg("-d")
            .arg(format!("-{request_code}{term}"))
            .current_dir(&self.config.index_dir)
            .output()
            .map_err(|err| NavError::Query(format!("run {}: {err}", self.config.cscope_bin)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NavError::Query(format!(
                "{} exited with {}: {}",
                self.config.cscope_bin,
                output.status,
                stderr.trim()
            )));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().map(|line| line.to_string()).collect())
    }
}

/// Maps a navigation intent onto the indexer and parses the response.
/// Fails fast when the index has never been built; an empty record list
/// is a legitimate result at this layer.
pub struct QueryDispatcher<'a, S: IndexQueryService> {
    config: &'a Config,
    service: &'a S,
}

impl<'a, S: IndexQueryService> QueryDispatcher<'a, S> {
    pub fn new(config: &'a Config, service: &'a S) -> Self {
        Self { config, service }
    }

    pub fn query(&self, kind: QueryKind, term: &str) -> NavResult<Vec<LocationRecord>> {
        if !self.config.index_exists() {
            // A query against a missing index would silently return
            // nothing, indistinguishable from "no matches".
            return Err(NavError::IndexNotFound(self.config.index_dir.clone()));
        }
        let lines = self.service.raw_lines(kind.request_code(), term)?;
        Ok(parse::parse_lines(lines.iter().map(String::as_str)))
    }
}
