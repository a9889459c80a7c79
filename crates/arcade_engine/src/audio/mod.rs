//! Fire-and-forget sound cues
//!
//! Gameplay code never plays audio directly. It queues [`SoundCue`]s which the
//! host drains once per frame and hands to whatever backend it has.

/// Name of a sound known to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub &'static str);

/// A request for the audio backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundCue {
    /// Play a one-shot sound
    Play {
        /// Sound to play
        sound: SoundId,
        /// Pitch offset in `[-1, 1]`
        pitch: f32,
    },
    /// Start (or restart) a looping sound
    StartLoop {
        /// Sound to loop
        sound: SoundId,
        /// Pitch offset in `[-1, 1]`
        pitch: f32,
    },
    /// Stop a looping sound
    StopLoop {
        /// Loop to stop
        sound: SoundId,
    },
}

impl SoundCue {
    /// Sound this cue refers to
    pub fn sound(&self) -> SoundId {
        match self {
            Self::Play { sound, .. } | Self::StartLoop { sound, .. } | Self::StopLoop { sound } => {
                *sound
            }
        }
    }
}

/// Per-frame queue of sound cues
#[derive(Debug, Default, Clone)]
pub struct SoundQueue {
    cues: Vec<SoundCue>,
}

impl SoundQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a cue
    pub fn push(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }

    /// Queue a one-shot sound at normal pitch
    pub fn play(&mut self, sound: SoundId) {
        self.push(SoundCue::Play { sound, pitch: 0.0 });
    }

    /// Cues queued so far
    pub fn cues(&self) -> &[SoundCue] {
        &self.cues
    }

    /// Take every queued cue
    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }
}
