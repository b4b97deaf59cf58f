pub mod plan;
pub mod project_loader;
pub mod render;

#[cfg(test)]
mod render_tests;
