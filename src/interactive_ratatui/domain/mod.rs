pub mod catalogue;
pub mod classifier;
pub mod filter;
pub mod models;

#[cfg(test)]
mod catalogue_test;
