pub mod scroll;
pub mod sender;
pub mod style;
