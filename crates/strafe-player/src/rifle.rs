//! Hitscan rifle: fire-rate gate, shot tracing and the fading bullet trail.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use strafe_movement::{LayerMask, QueryHit, SpatialQuery};
use tracing::debug;

use crate::pointer::aim_point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RifleSettings {
    /// Shots per second.
    pub fire_rate: f32,
    /// Layers a shot can hit.
    pub target_layers: LayerMask,
    /// Trail opacity right after a shot.
    pub trail_alpha: f32,
    /// Trail width right after a shot.
    pub trail_width: f32,
}

impl Default for RifleSettings {
    fn default() -> Self {
        Self {
            fire_rate: 8.0,
            target_layers: LayerMask::TARGET | LayerMask::OBSTACLE | LayerMask::GROUND,
            trail_alpha: 0.1,
            trail_width: 0.05,
        }
    }
}

/// One fired shot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shot {
    pub origin: Vec3,
    /// Where the shot ended: the hit point, or far along the barrel.
    pub target: Vec3,
    pub hit: Option<QueryHit>,
}

/// The visible bullet trail of the latest shot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletTrail {
    pub start: Vec3,
    pub end: Vec3,
    pub alpha: f32,
    pub width: f32,
}

#[derive(Clone, Debug)]
pub struct Rifle {
    pub settings: RifleSettings,
    time_since_last_shot: f32,
    last_shot: Option<Shot>,
}

impl Rifle {
    /// A rifle that is ready to fire.
    pub fn new(settings: RifleSettings) -> Self {
        Self {
            settings,
            time_since_last_shot: f32::INFINITY,
            last_shot: None,
        }
    }

    /// Seconds between shots.
    pub fn interval(&self) -> f32 {
        1.0 / self.settings.fire_rate
    }

    pub fn can_fire(&self) -> bool {
        self.time_since_last_shot > self.interval()
    }

    /// Advances the rifle by `dt`, firing from `muzzle` along `forward` if
    /// the trigger is held and the cadence allows it.
    pub fn update<Q: SpatialQuery + ?Sized>(
        &mut self,
        dt: f32,
        trigger: bool,
        muzzle: Vec3,
        forward: Vec3,
        world: &Q,
    ) -> Option<Shot> {
        self.time_since_last_shot += dt;
        if !trigger || !self.can_fire() {
            return None;
        }

        let aim = aim_point(world, muzzle, forward, self.settings.target_layers);
        let shot = Shot {
            origin: muzzle,
            target: aim.point,
            hit: aim.hit,
        };
        debug!(
            hit = shot.hit.is_some(),
            x = shot.target.x,
            y = shot.target.y,
            z = shot.target.z,
            "shot fired"
        );
        self.time_since_last_shot = 0.0;
        self.last_shot = Some(shot);
        Some(shot)
    }

    /// Fraction of the fire interval elapsed since the last shot, in `0..=1`.
    pub fn trail_progress(&self) -> f32 {
        (self.time_since_last_shot / self.interval()).clamp(0.0, 1.0)
    }

    /// The trail of the latest shot, fading out over one fire interval.
    pub fn trail(&self) -> Option<BulletTrail> {
        let shot = self.last_shot?;
        let remaining = 1.0 - self.trail_progress();
        Some(BulletTrail {
            start: shot.origin,
            end: shot.target,
            alpha: remaining * self.settings.trail_alpha,
            width: remaining * self.settings.trail_width,
        })
    }
}
