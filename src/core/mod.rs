//! Módulo core - Lógica central do Smoothie

pub mod config;
pub mod console;
pub mod error;
pub mod fetch;
pub mod jokes;
pub mod presenter;
pub mod recipe;
