//! Sinks for emission requests and sounds.

use rustc_hash::FxHashMap;

use crate::core::{SoundId, TextureId};

use super::{EmissionKind, EmissionRequest};

/// Destination for everything an animation emits.
///
/// Both calls are fire-and-forget: the sink takes ownership of the request
/// and the animation keeps no handle to what it spawned.
pub trait EffectSink {
    /// Submit one emission request to the particle engine.
    fn emit(&mut self, request: EmissionRequest);

    /// Play a sound once.
    fn play(&mut self, sound: SoundId);
}

/// Sink that records requests and sounds in submission order.
#[derive(Clone, Debug, Default)]
pub struct EmissionLog {
    requests: Vec<EmissionRequest>,
    sounds: Vec<SoundId>,
}

impl EmissionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[EmissionRequest] {
        &self.requests
    }

    /// All played sounds, oldest first.
    #[must_use]
    pub fn sounds(&self) -> &[SoundId] {
        &self.sounds
    }

    /// Number of requests of one kind.
    #[must_use]
    pub fn count(&self, kind: EmissionKind) -> usize {
        self.requests.iter().filter(|r| r.kind() == kind).count()
    }

    /// Number of requests drawn with `texture`.
    #[must_use]
    pub fn count_texture(&self, texture: TextureId) -> usize {
        self.requests.iter().filter(|r| r.texture() == Some(texture)).count()
    }

    /// Number of times `sound` was played.
    #[must_use]
    pub fn count_sound(&self, sound: SoundId) -> usize {
        self.sounds.iter().filter(|&&s| s == sound).count()
    }

    /// Request counts grouped by kind.
    #[must_use]
    pub fn histogram(&self) -> FxHashMap<EmissionKind, usize> {
        let mut counts = FxHashMap::default();
        for request in &self.requests {
            *counts.entry(request.kind()).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty() && self.sounds.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Take every recorded request, leaving the log empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, EmissionRequest> {
        self.requests.drain(..)
    }

    pub fn clear(&mut self) {
        self.requests.clear();
        self.sounds.clear();
    }
}

impl EffectSink for EmissionLog {
    fn emit(&mut self, request: EmissionRequest) {
        self.requests.push(request);
    }

    fn play(&mut self, sound: SoundId) {
        self.sounds.push(sound);
    }
}
