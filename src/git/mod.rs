//! Git plumbing: subprocess runner, slide branch naming, checkpoint gateway.

pub mod gateway;
pub mod naming;
pub mod runner;

pub use gateway::{CheckpointGateway, GitGateway};
pub use naming::{slide_branch, slide_name, SLIDE_BRANCH_PREFIX};
