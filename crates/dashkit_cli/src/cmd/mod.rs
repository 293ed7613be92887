/// Path resolution commands (`get`, `at`).
pub mod get;
/// Value shape inspection command.
pub mod inspect;
/// Collection iteration commands (`map`, `filter`, `every`, `count-by`).
pub mod iterate;
/// Path parsing command.
pub mod keys;
mod util;
