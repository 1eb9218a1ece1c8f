//! Biblioteca: módulos reutilizables para el pipeline dominios -> TCP:80 -> IPs.
pub mod args;
pub mod models;
pub mod output;
pub mod resolver;
pub mod targets;
