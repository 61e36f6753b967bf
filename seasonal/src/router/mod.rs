pub mod load;
pub mod query;
pub mod snapshot;
pub mod symbols;

pub mod util;
