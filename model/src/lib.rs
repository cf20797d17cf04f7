pub mod player;
pub mod time;
