//! Math helpers for the CBOW forward pass.

/// Logistic sigmoid: 1 / (1 + e^-z).
#[inline]
pub fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}
