mod binary_search;
mod hash_table;

pub use binary_search::binary_search;
pub use hash_table::HashTable;
