//! Módulo de comandos do Smoothie

pub mod blend;
