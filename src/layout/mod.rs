mod renderer;

pub use renderer::LayoutRenderer;
