pub mod macros;
pub mod plan;
pub mod task;
pub mod topic;

pub use plan::*;
pub use task::*;
pub use topic::*;
