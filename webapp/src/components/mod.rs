pub mod icon;
pub mod navigation;
pub mod project_card;
pub mod social;
