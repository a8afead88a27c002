//! Welcome (boot) effect library
//!
//! One-shot greeting sequences played on power-on. The driver advances
//! `elapsed` toward `duration` and stops rendering once it is reached; the
//! effects themselves hold no cross-frame state.

mod custom;
mod standard;

use crate::{color::Rgb, frame::WelcomeFrame, rng::Rng8};

const EFFECT_NAME_POWER_ON_SCAN: &str = "power_on_scan";
const EFFECT_NAME_IGNITION_BURST: &str = "ignition_burst";
const EFFECT_NAME_SPECTRUM_RESOLVE: &str = "spectrum_resolve";
const EFFECT_NAME_THEATER_CHASE: &str = "theater_chase";
const EFFECT_NAME_DUAL_COMET: &str = "dual_comet";
const EFFECT_NAME_CENTER_FILL: &str = "center_fill";
const EFFECT_NAME_CHARGING: &str = "charging";
const EFFECT_NAME_GLITCH: &str = "glitch";
const EFFECT_NAME_SONAR: &str = "sonar";
const EFFECT_NAME_BURNING: &str = "burning";
const EFFECT_NAME_WARP_SPEED: &str = "warp_speed";
const EFFECT_NAME_DNA: &str = "dna";
const EFFECT_NAME_LASER: &str = "laser";
const EFFECT_NAME_HEARTBEAT: &str = "heartbeat";
const EFFECT_NAME_LIQUID: &str = "liquid";
const EFFECT_NAME_SPOTLIGHTS: &str = "spotlights";
const EFFECT_NAME_GRADIENT_SWEEP: &str = "gradient_sweep";
const EFFECT_NAME_STARTUP_SCAN: &str = "startup_scan";
const EFFECT_NAME_PARTICLE_SWIRL: &str = "particle_swirl";
const EFFECT_NAME_SYNC_PULSE: &str = "sync_pulse";
const EFFECT_NAME_BIOLUME: &str = "biolume";
const EFFECT_NAME_CYBERWAVE: &str = "cyberwave";

/// Known welcome effect ids that can be requested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum WelcomeEffectId {
    PowerOnScan = 0,
    IgnitionBurst = 1,
    SpectrumResolve = 2,
    TheaterChase = 3,
    DualComet = 4,
    CenterFill = 5,
    Charging = 6,
    Glitch = 7,
    Sonar = 8,
    Burning = 9,
    WarpSpeed = 10,
    Dna = 11,
    Laser = 12,
    Heartbeat = 13,
    Liquid = 14,
    Spotlights = 15,
    GradientSweep = 16,
    StartupScan = 17,
    ParticleSwirl = 18,
    SyncPulse = 19,
    Biolume = 20,
    Cyberwave = 21,
}

impl WelcomeEffectId {
    /// Number of welcome effect modes
    pub const COUNT: u8 = 22;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::PowerOnScan,
            1 => Self::IgnitionBurst,
            2 => Self::SpectrumResolve,
            3 => Self::TheaterChase,
            4 => Self::DualComet,
            5 => Self::CenterFill,
            6 => Self::Charging,
            7 => Self::Glitch,
            8 => Self::Sonar,
            9 => Self::Burning,
            10 => Self::WarpSpeed,
            11 => Self::Dna,
            12 => Self::Laser,
            13 => Self::Heartbeat,
            14 => Self::Liquid,
            15 => Self::Spotlights,
            16 => Self::GradientSweep,
            17 => Self::StartupScan,
            18 => Self::ParticleSwirl,
            19 => Self::SyncPulse,
            20 => Self::Biolume,
            21 => Self::Cyberwave,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PowerOnScan => EFFECT_NAME_POWER_ON_SCAN,
            Self::IgnitionBurst => EFFECT_NAME_IGNITION_BURST,
            Self::SpectrumResolve => EFFECT_NAME_SPECTRUM_RESOLVE,
            Self::TheaterChase => EFFECT_NAME_THEATER_CHASE,
            Self::DualComet => EFFECT_NAME_DUAL_COMET,
            Self::CenterFill => EFFECT_NAME_CENTER_FILL,
            Self::Charging => EFFECT_NAME_CHARGING,
            Self::Glitch => EFFECT_NAME_GLITCH,
            Self::Sonar => EFFECT_NAME_SONAR,
            Self::Burning => EFFECT_NAME_BURNING,
            Self::WarpSpeed => EFFECT_NAME_WARP_SPEED,
            Self::Dna => EFFECT_NAME_DNA,
            Self::Laser => EFFECT_NAME_LASER,
            Self::Heartbeat => EFFECT_NAME_HEARTBEAT,
            Self::Liquid => EFFECT_NAME_LIQUID,
            Self::Spotlights => EFFECT_NAME_SPOTLIGHTS,
            Self::GradientSweep => EFFECT_NAME_GRADIENT_SWEEP,
            Self::StartupScan => EFFECT_NAME_STARTUP_SCAN,
            Self::ParticleSwirl => EFFECT_NAME_PARTICLE_SWIRL,
            Self::SyncPulse => EFFECT_NAME_SYNC_PULSE,
            Self::Biolume => EFFECT_NAME_BIOLUME,
            Self::Cyberwave => EFFECT_NAME_CYBERWAVE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        (0..Self::COUNT)
            .filter_map(Self::from_raw)
            .find(|id| id.as_str() == s)
    }

    /// Render one frame into `leds`. A zero-length buffer is a no-op.
    pub fn render(self, frame: &WelcomeFrame, rng: &mut Rng8, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        match self {
            Self::PowerOnScan => standard::power_on_scan(frame, leds),
            Self::IgnitionBurst => standard::ignition_burst(frame, leds),
            Self::SpectrumResolve => standard::spectrum_resolve(frame, leds),
            Self::TheaterChase => standard::theater_chase(frame, leds),
            Self::DualComet => standard::dual_comet(frame, leds),
            Self::CenterFill => standard::center_fill(frame, leds),
            Self::Charging => custom::charging(frame, leds),
            Self::Glitch => custom::glitch(frame, rng, leds),
            Self::Sonar => custom::sonar(frame, leds),
            Self::Burning => custom::burning(frame, leds),
            Self::WarpSpeed => custom::warp_speed(frame, rng, leds),
            Self::Dna => custom::dna(frame, leds),
            Self::Laser => custom::laser(frame, leds),
            Self::Heartbeat => custom::heartbeat(frame, leds),
            Self::Liquid => custom::liquid(frame, leds),
            Self::Spotlights => custom::spotlights(frame, leds),
            Self::GradientSweep => custom::dynamic_gradient_sweep(frame, leds),
            Self::StartupScan => custom::sequential_startup_scan(frame, leds),
            Self::ParticleSwirl => custom::fluid_particle_swirl(frame, leds),
            Self::SyncPulse => custom::ambient_sync_pulse(frame, leds),
            Self::Biolume => custom::bioluminescent_breath(frame, leds),
            Self::Cyberwave => custom::cyberwave(frame, leds),
        }
    }
}
