mod git;

pub use git::{GitPort, GitStatus};
