//! Typed clients for the stable upstream APIs
//!
//! - GitHub REST: the authoritative user record
//! - LeetCode GraphQL: the matched-user profile and solve statistics

mod github;
mod leetcode;

pub use github::{GitHubClient, GitHubUser};
pub use leetcode::{
    Badge, DifficultyCount, LanguageProblemCount, LeetCodeClient, LeetCodeProfile, MatchedUser,
    SubmitStats, UserCalendar, OPERATION_NAME, PROFILE_QUERY,
};
