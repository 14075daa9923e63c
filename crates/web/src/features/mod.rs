pub mod athletes;
pub mod competitions;
pub mod events;
pub mod exports;
pub mod leaderboard;
pub mod routines;
