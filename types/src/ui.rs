//! UI configuration shared between the engine and the renderer.

/// UI options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Replace box-drawing and arrow glyphs with plain ASCII.
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip decorative animation (the paradox node still oscillates;
    /// only cosmetic effects are suppressed).
    pub reduced_motion: bool,
}
