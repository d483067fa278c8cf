pub mod git_command;
pub mod log_follower;

pub use git_command::GitCommandAdapter;
pub use log_follower::{FollowOptions, follow};
