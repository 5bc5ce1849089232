use tracing::trace;

use super::scanner::{scan_integer, scan_item};
use crate::domain::{FormatError, Item, Limits, Problem, Result};

/// Turns one raw input line into a validated [`Problem`].
///
/// Line shape: `<capacity> : (<index>,<weight>,<marker><cost>) ...` with items
/// separated by single spaces. Checks run in a fixed order so the reported
/// error is deterministic: capacity limit, item count, then each token in turn
/// (shape, weight limit, cost limit).
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    limits: Limits,
}

impl LineParser {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn parse(&self, line: &str) -> Result<Problem> {
        let malformed = || FormatError::MalformedLine(line.to_string());

        let (capacity_part, items_part) = line.split_once(':').ok_or_else(malformed)?;
        let capacity = scan_integer(capacity_part.trim()).ok_or_else(malformed)?;
        if capacity > i64::from(self.limits.max_capacity) {
            return Err(FormatError::CapacityLimit(self.limits.max_capacity));
        }

        let tokens: Vec<&str> = items_part.trim().split(' ').collect();
        if tokens.len() > self.limits.max_items {
            return Err(FormatError::ItemCountLimit(self.limits.max_items));
        }

        let items = tokens
            .into_iter()
            .map(|token| self.parse_item(token).ok_or_else(malformed)?)
            .collect::<Result<Vec<_>>>()?;

        trace!(capacity, items = items.len(), "parsed line");
        Ok(Problem::new(capacity, items))
    }

    /// `None` when the token has the wrong shape, otherwise the limit-checked item
    fn parse_item(&self, token: &str) -> Option<Result<Item>> {
        let item = scan_item(token)?;
        let max = self.limits.max_item_value;

        if item.weight.exceeds(u64::from(max)) {
            return Some(Err(FormatError::ItemWeightLimit(max)));
        }
        if item.cost.exceeds(u64::from(max)) {
            return Some(Err(FormatError::ItemCostLimit(max)));
        }

        Some(Ok(item))
    }
}
