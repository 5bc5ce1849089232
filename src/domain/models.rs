use std::fmt;

use super::value_objects::Amount;

/// Output marker for a line where nothing can be packed
pub const NOTHING_SELECTED: &str = "-";

/// Candidate item of a packing problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub index: u32,
    pub weight: Amount,
    pub cost: Amount,
}

impl Item {
    pub fn new(index: u32, weight: Amount, cost: Amount) -> Self {
        Self {
            index,
            weight,
            cost,
        }
    }
}

/// Validation limits applied while parsing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_capacity: u32,
    pub max_items: usize,
    /// Shared upper bound for item weight and item cost
    pub max_item_value: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_capacity: 100,
            max_items: 15,
            max_item_value: 100,
        }
    }
}

impl Limits {
    pub fn with_max_capacity(mut self, max_capacity: u32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_max_item_value(mut self, max_item_value: u32) -> Self {
        self.max_item_value = max_item_value;
        self
    }
}

/// One parsed input line: a weight capacity and its candidate items.
///
/// Item order follows the source line; the selector depends on it to break
/// ties between items of equal cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub capacity: i64,
    pub items: Vec<Item>,
}

impl Problem {
    pub fn new(capacity: i64, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Capacity as an amount, or `None` when it is zero or negative and no
    /// item can ever fit
    pub fn capacity_amount(&self) -> Option<Amount> {
        u64::try_from(self.capacity)
            .ok()
            .filter(|&capacity| capacity > 0)
            .map(Amount::from_whole)
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }
}

/// A candidate set of items considered as one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    items: Vec<Item>,
    total_weight: Amount,
    total_cost: Amount,
}

impl Combination {
    pub fn seeded(item: Item) -> Self {
        Self {
            items: vec![item],
            total_weight: item.weight,
            total_cost: item.cost,
        }
    }

    /// Whether adding `item` keeps the total weight within `capacity`
    pub fn fits(&self, item: &Item, capacity: Amount) -> bool {
        self.total_weight + item.weight <= capacity
    }

    pub fn push(&mut self, item: Item) {
        self.total_weight = self.total_weight + item.weight;
        self.total_cost = self.total_cost + item.cost;
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total_weight(&self) -> Amount {
        self.total_weight
    }

    pub fn total_cost(&self) -> Amount {
        self.total_cost
    }

    /// Order the items lightest first and keep only their indices.
    /// Items of equal weight stay in the order they were added.
    pub fn into_selection(mut self) -> Selection {
        self.items.sort_by_key(|item| item.weight);
        Selection::Items(self.items.iter().map(|item| item.index).collect())
    }
}

/// Outcome of selecting items for one problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Chosen item indices, lightest first
    Items(Vec<u32>),
    /// No item fits the capacity
    Nothing,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Items(indices) => {
                for (i, index) in indices.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", index)?;
                }
                Ok(())
            }
            Selection::Nothing => write!(f, "{}", NOTHING_SELECTED),
        }
    }
}
