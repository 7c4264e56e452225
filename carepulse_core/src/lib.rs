pub mod accordion;
pub mod chart;
pub mod config;
pub mod content;
pub mod gesture;
pub mod section;
pub mod showcase;
pub mod tabs;
pub mod theme;
