pub mod export;
pub mod leaderboard;
pub mod scoring;
