// Selector adapters: Concrete implementations of the Selector service

pub mod greedy;

pub use greedy::GreedySelector;
