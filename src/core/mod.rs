pub mod sessions;
pub mod summary;
pub mod validate;
pub mod withdrawals;
