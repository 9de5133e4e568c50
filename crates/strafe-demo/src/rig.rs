//! A player character assembled from the movement and player crates.

use glam::{Vec2, Vec3};
use strafe_config::Config;
use strafe_movement::{
    CapsuleShape, MovementController, MovementError, MovementStep, SpatialQuery, VelocityPlanner,
};
use strafe_player::{
    AimCamera, AnimationParams, Crosshair, LocomotionAnimator, LocomotionInput, PlayerIntent,
    Rifle, Shot,
};

/// Height of the muzzle above the capsule center.
const MUZZLE_HEIGHT: f32 = 0.5;

/// What the player does during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct TickInput {
    /// Camera-relative stick input.
    pub stick: Vec2,
    pub look: Vec2,
    pub aiming: bool,
    pub trigger: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TickReport {
    pub step: MovementStep,
    pub animation: AnimationParams,
    pub shot: Option<Shot>,
    pub crosshair_alpha: f32,
}

pub(crate) struct Rig {
    controller: MovementController,
    intent: PlayerIntent,
    camera: AimCamera,
    animator: LocomotionAnimator,
    crosshair: Crosshair,
    rifle: Rifle,
    position: Vec3,
    dt: f32,
}

impl Rig {
    pub(crate) fn new(config: &Config, position: Vec3) -> Result<Self, MovementError> {
        let dt = config.tick_duration();
        let planner = VelocityPlanner::new(config.movement_settings(), dt)?;
        let controller = MovementController::new(
            planner,
            config.avoidance_settings(),
            CapsuleShape::default(),
        )?;
        Ok(Self {
            controller,
            intent: config.player,
            camera: AimCamera::new(config.camera),
            animator: LocomotionAnimator::new(config.locomotion),
            crosshair: Crosshair::new(config.crosshair),
            rifle: Rifle::new(config.rifle),
            position,
            dt,
        })
    }

    pub(crate) fn position(&self) -> Vec3 {
        self.position
    }

    pub(crate) fn tick<Q: SpatialQuery + ?Sized>(
        &mut self,
        input: &TickInput,
        world: &Q,
    ) -> Result<TickReport, MovementError> {
        let dt = self.dt;
        self.camera.update(input.look, input.aiming, dt);

        let intent = self
            .intent
            .resolve(input.stick, self.camera.yaw(), input.aiming);
        intent.apply_top_speed(&mut self.controller)?;

        let step = self.controller.step(self.position, intent.input, world);
        self.position = step.position;

        let forward = self.camera.forward();
        let animation = self.animator.update(
            &LocomotionInput {
                velocity: step.velocity,
                top_speed: intent.top_speed,
                aiming: input.aiming,
                aim_direction: forward,
                camera_pitch: self.camera.pitch(),
            },
            dt,
        );

        self.crosshair.update(input.aiming, dt);
        let muzzle = self.position + Vec3::Y * MUZZLE_HEIGHT;
        let shot = self
            .rifle
            .update(dt, input.trigger && input.aiming, muzzle, forward, world);
        if shot.is_some() {
            self.crosshair.register_shot();
        }

        Ok(TickReport {
            step,
            animation,
            shot,
            crosshair_alpha: self.crosshair.alpha(),
        })
    }
}
