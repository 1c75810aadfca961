/// Bitset of tile ids used for candidate and permission sets
pub mod bitset;
/// Single grid cell with observation and narrowing
pub mod cell;
/// Collapse driver with minimum-entropy selection and propagation
pub mod engine;
/// Adjacency rule table and tile interning
pub mod rules;
