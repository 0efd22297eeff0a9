//! Stateless signal operations used to assemble speech from clips.
//!
//! Every function reads its input slice and returns a freshly allocated
//! buffer. Clips held by the sample store are never modified in place.

mod crossfade;
mod interpolate;
mod normalize;
mod pitch;

#[cfg(test)]
mod tests_crossfade;
#[cfg(test)]
mod tests_normalize;
#[cfg(test)]
mod tests_pitch;

// Re-export public API
pub use crossfade::{crossfade, MIN_CROSSFADE_SAMPLES};
pub use interpolate::{interpolate_at, linear_ramp};
pub use normalize::{normalize, peak};
pub use pitch::{pitch_factor, pitch_shift};
