//! Game asset definitions
//!
//! Visual handles and sound names the host is expected to know about.

use arcade_engine::audio::SoundId;
use arcade_engine::render::VisualHandle;

/// Player ship sprite
pub const PLAYER_SHIP: VisualHandle = VisualHandle(1);

/// Thruster flame sprite
pub const THRUSTER: VisualHandle = VisualHandle(2);

/// Big UFO sprite
pub const BIG_UFO: VisualHandle = VisualHandle(3);

/// Small UFO sprite
pub const SMALL_UFO: VisualHandle = VisualHandle(4);

/// Sound names
pub mod sounds {
    use super::SoundId;

    /// Looped while the thruster fires
    pub const THRUST: SoundId = SoundId("thrust");

    /// Player shot
    pub const FIRE: SoundId = SoundId("fire");

    /// UFO shot
    pub const UFO_FIRE: SoundId = SoundId("ufo_fire");

    /// Something blew up
    pub const EXPLOSION: SoundId = SoundId("explosion");

    /// Extra life awarded
    pub const EXTRA_LIFE: SoundId = SoundId("extra_life");
}
