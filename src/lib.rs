pub mod array;
pub mod errors;
pub mod fibonacci;
pub mod report;
pub mod sieve;
pub mod strings;
pub mod timing;
