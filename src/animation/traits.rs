//! Animation trait definition

use crate::shapes::Scene;

/// Something that updates the scene from an interpolation fraction
///
/// `alpha` runs from 0.0 at the start of a run to 1.0 at its end. An
/// animation must produce the same scene for the same `alpha` no matter
/// how it got there, so the driver can seek, loop and skip frames freely.
pub trait Animation {
    /// Update the scene for fraction `alpha`
    fn interpolate(&mut self, scene: &mut Scene, alpha: f32);

    /// Get the name of this animation (for logs)
    fn name(&self) -> &str;
}
