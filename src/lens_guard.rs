pub mod core;
pub mod main;
pub mod render;
pub mod run;

#[cfg(test)]
mod tests;
