pub mod components;
pub mod icons;
pub mod pages;
pub mod shell;
pub mod theme;
