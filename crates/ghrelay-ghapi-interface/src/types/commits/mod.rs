mod commit_info;

pub use commit_info::GhCommitInfo;
