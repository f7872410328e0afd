pub mod anchor;
pub mod counter;
pub mod menu;
pub mod navbar;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod tasks;
