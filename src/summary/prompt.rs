use crate::api::{DifficultyCount, GitHubUser, MatchedUser};

const INSTRUCTIONS: &str = "Using a person's GitHub and LeetCode profiles, write one clear and \
professional paragraph that highlights their programming strengths. Mention the number of public \
repositories on GitHub along with any standout technologies, frameworks, or types of projects they \
have worked on. From their LeetCode profile, include the total number of problems solved, grouped \
by difficulty (Easy, Medium, Hard). Use simple and resume-friendly language without technical \
jargon or special formatting. Conclude the paragraph by identifying whether the individual is best \
described as a \"Developer\", \"Problem Solver\", or \"Both\", depending on whether their strengths \
are in building practical projects, solving algorithmic problems, or a strong combination of the two.";

/// Solved-problem counts per difficulty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyCounts {
    /// Picks the Easy, Medium and Hard entries out of the accepted-submission
    /// list. Labels match case-insensitively; an absent label counts as zero.
    pub fn from_stats(stats: &[DifficultyCount]) -> Self {
        let count_for = |label: &str| {
            stats
                .iter()
                .find(|entry| entry.difficulty.eq_ignore_ascii_case(label))
                .map(|entry| entry.count)
                .unwrap_or(0)
        };

        Self {
            easy: count_for("Easy"),
            medium: count_for("Medium"),
            hard: count_for("Hard"),
        }
    }
}

/// Builds the summarization prompt
///
/// Output depends only on the fields read here, so the same inputs always
/// produce the same prompt.
pub fn build_prompt(github: &GitHubUser, leetcode: &MatchedUser) -> String {
    let bio = github
        .bio
        .as_deref()
        .map(str::trim)
        .filter(|bio| !bio.is_empty())
        .unwrap_or("No bio provided");
    let ranking = leetcode
        .ranking()
        .map(|rank| rank.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let solved = DifficultyCounts::from_stats(leetcode.ac_submissions());

    format!(
        "{INSTRUCTIONS}\n\n\
         GitHub:\n\
         - Name: {name}\n\
         - Bio: {bio}\n\
         - Public Repositories: {repos}\n\
         - Followers: {followers}\n\
         - Following: {following}\n\n\
         LeetCode:\n\
         - Username: {username}\n\
         - Ranking: {ranking}\n\
         - Problems Solved - Easy: {easy}\n\
         - Medium: {medium}\n\
         - Hard: {hard}\n",
        name = github.display_name(),
        repos = github.public_repos,
        followers = github.followers,
        following = github.following,
        username = leetcode.username,
        easy = solved.easy,
        medium = solved.medium,
        hard = solved.hard,
    )
}
