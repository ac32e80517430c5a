use crate::config;
use crate::model::LocationRecord;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Outcome of disambiguating a record list down to one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Chosen(LocationRecord),
    /// User declined to pick. Not an error; the operation ends silently.
    Cancelled,
    NoMatches,
}

/// Picks one index out of a candidate list, or none to cancel. The
/// production implementation prompts on the terminal; tests substitute
/// a fixed answer.
pub trait SelectionProvider {
    fn choose(&mut self, candidates: &[String]) -> Option<usize>;
}

/// Resolve a record list to a single record. Zero and one records never
/// suspend; only a genuine ambiguity consults the selection provider.
/// Candidates are labeled with their file path relative to the project
/// root and presented in parser order, unsorted and undeduplicated, so
/// the same input and the same selection always resolve identically.
pub fn resolve(
    records: Vec<LocationRecord>,
    project_root: &Path,
    selector: &mut dyn SelectionProvider,
) -> Resolution {
    match records.len() {
        0 => Resolution::NoMatches,
        1 => Resolution::Chosen(records.into_iter().next().unwrap()),
        _ => {
            let labels: Vec<String> = records
                .iter()
                .map(|record| config::display_path(project_root, &record.file_path))
                .collect();
            match selector.choose(&labels) {
                Some(index) if index < records.len() => {
                    Resolution::Chosen(records.into_iter().nth(index).unwrap())
                }
                _ => Resolution::Cancelled,
            }
        }
    }
}

/// Terminal selector: numbered candidates on stderr, one answer line on
/// stdin. Empty input, `q`, EOF, or an unparsable answer cancels. Waits
/// indefinitely; cancellation is the only way out besides an answer.
pub struct StdinSelector;

impl SelectionProvider for StdinSelector {
    fn choose(&mut self, candidates: &[String]) -> Option<usize> {
        let mut stderr = io::stderr();
        for (i, label) in candidates.iter().enumerate() {
            let _ = writeln!(stderr, "{:3}: {label}", i + 1);
        }
        let _ = write!(stderr, "pick [1-{}, empty cancels]: ", candidates.len());
        let _ = stderr.flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return None;
        }
        let answer = answer.trim();
        if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
            return None;
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=candidates.len()).contains(&n) => Some(n - 1),
            _ => None,
        }
    }
}
