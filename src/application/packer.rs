// Application service: parse each line, select its package, join the results

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Result, Selection, Selector};
use crate::infrastructure::LineSource;
use crate::parser::LineParser;
use crate::selector::GreedySelector;

/// Batch driver over problem lines.
///
/// Fails fast: the first line that cannot be read or parsed aborts the batch
/// and no partial output is returned.
#[derive(Clone)]
pub struct Packer {
    parser: LineParser,
    selector: Arc<dyn Selector>,
}

impl Packer {
    pub fn new(parser: LineParser, selector: Arc<dyn Selector>) -> Self {
        Self { parser, selector }
    }

    pub fn parser(&self) -> &LineParser {
        &self.parser
    }

    pub fn selector_name(&self) -> &str {
        self.selector.name()
    }

    /// Pack every line of the file at `path`, one result per line joined by `\n`
    pub fn pack_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let results = self.pack_source(LineSource::open(path)?)?;
        info!(path = %path.display(), lines = results.len(), "packed file");
        Ok(join_results(&results))
    }

    pub fn pack_line(&self, line: &str) -> Result<Selection> {
        let problem = self.parser.parse(line)?;
        Ok(self.selector.select(&problem))
    }

    pub fn pack_lines<I, S>(&self, lines: I) -> Result<Vec<Selection>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pack_source(lines.into_iter().map(Ok))
    }

    /// Pack lines coming from a fallible source such as [`LineSource`]
    pub fn pack_source<I, S>(&self, lines: I) -> Result<Vec<Selection>>
    where
        I: IntoIterator<Item = Result<S>>,
        S: AsRef<str>,
    {
        let mut results = Vec::new();

        for (number, line) in lines.into_iter().enumerate() {
            let line = line?;
            let selection = match self.pack_line(line.as_ref()) {
                Ok(selection) => selection,
                Err(e) => {
                    warn!(line = number + 1, error = %e, "rejected input line");
                    return Err(e);
                }
            };

            debug!(line = number + 1, result = %selection, "packed line");
            results.push(selection);
        }

        Ok(results)
    }
}

impl Default for Packer {
    fn default() -> Self {
        Self::new(LineParser::default(), Arc::new(GreedySelector::new()))
    }
}

pub fn join_results(results: &[Selection]) -> String {
    results
        .iter()
        .map(Selection::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
