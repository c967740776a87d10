mod config;
mod extract;
mod scan;
