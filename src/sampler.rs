//! Optional system color sampling (eyedropper).
//!
//! Whether the host can sample colors from the screen is decided once, when
//! the picker is built, as a [`SamplerCapability`]. Starting a sample never
//! blocks: it hands back a future for the host to drive, and the outcome is
//! fed back to the picker when it resolves.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Result of one sampling interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    /// The user picked a color, as `#RRGGBB`
    Picked(String),
    /// The user dismissed the sampler
    Cancelled,
}

/// Future returned by [`ColorSampler::sample`].
pub type SampleFuture = Pin<Box<dyn Future<Output = SampleOutcome>>>;

/// A host facility that lets the user pick a color from the screen.
pub trait ColorSampler {
    fn sample(&self) -> SampleFuture;
}

/// Whether color sampling is available on this host.
#[derive(Default)]
pub enum SamplerCapability {
    Available(Box<dyn ColorSampler>),
    #[default]
    Unavailable,
}

impl SamplerCapability {
    pub fn available<S>(sampler: S) -> Self
    where
        S: ColorSampler + 'static,
    {
        SamplerCapability::Available(Box::new(sampler))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SamplerCapability::Available(_))
    }

    /// Start sampling. Returns `None` when the host has no sampler.
    pub fn start(&self) -> Option<SampleFuture> {
        match self {
            SamplerCapability::Available(sampler) => Some(sampler.sample()),
            SamplerCapability::Unavailable => None,
        }
    }
}

impl fmt::Debug for SamplerCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerCapability::Available(_) => f.write_str("SamplerCapability::Available"),
            SamplerCapability::Unavailable => f.write_str("SamplerCapability::Unavailable"),
        }
    }
}
