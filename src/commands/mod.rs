pub mod branch;
pub mod commit;

#[cfg(test)]
pub(crate) mod fake_git;

pub use branch::*;
pub use commit::*;
