use crate::choose::{self, Resolution, SelectionProvider};
use crate::config::Config;
use crate::error::NavResult;
use crate::history::HistoryStack;
use crate::model::{LocationRecord, NavigationFrame, QueryKind};
use crate::query::{IndexQueryService, QueryDispatcher};

/// Result of a jump attempt. Only `Target` changes history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Destination for the host to open; the pre-jump frame has been
    /// pushed to history.
    Target(NavigationFrame),
    Cancelled,
    NoMatches,
}

/// Ties query, disambiguation, and history together into the three
/// operations the CLI exposes.
pub struct Navigator<'a, S: IndexQueryService> {
    config: &'a Config,
    dispatcher: QueryDispatcher<'a, S>,
    history: HistoryStack,
}

impl<'a, S: IndexQueryService> Navigator<'a, S> {
    pub fn new(config: &'a Config, service: &'a S) -> Self {
        Self {
            config,
            dispatcher: QueryDispatcher::new(config, service),
            history: HistoryStack::new(&config.history_file),
        }
    }

    /// List mode: query and return the records as-is. Never touches
    /// history.
    pub fn list_locations(&self, kind: QueryKind, term: &str) -> NavResult<Vec<LocationRecord>> {
        self.dispatcher.query(kind, term)
    }

    /// Jump mode: query, disambiguate, and on a resolved target push the
    /// current position before handing back where to go. Cancellation and
    /// empty results leave history untouched. The indexer does not track
    /// columns, so targets always point at the start of the line.
    pub fn jump_to(
        &self,
        kind: QueryKind,
        term: &str,
        current: NavigationFrame,
        selector: &mut dyn SelectionProvider,
    ) -> NavResult<JumpOutcome> {
        let records = self.dispatcher.query(kind, term)?;
        match choose::resolve(records, &self.config.project_root, selector) {
            Resolution::Chosen(record) => {
                self.history.push(current)?;
                Ok(JumpOutcome::Target(NavigationFrame::new(
                    record.file_path,
                    record.line_number,
                    0,
                )))
            }
            Resolution::Cancelled => Ok(JumpOutcome::Cancelled),
            Resolution::NoMatches => Ok(JumpOutcome::NoMatches),
        }
    }

    /// Return to the most recently recorded position. Deliberately does
    /// not push the position being left, so repeated back-jumps unwind
    /// history instead of growing it.
    pub fn jump_back(&self) -> NavResult<NavigationFrame> {
        self.history.pop()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }
}
