//! Fixed-tick movement controller: velocity planning, optional obstacle
//! steering, position integration and ground snapping for one entity.

use glam::{Vec2, Vec3};
use strafe_math::flatten;
use tracing::{trace, warn};

use crate::error::{MovementError, positive};
use crate::planner::VelocityPlanner;
use crate::query::{CapsuleShape, LayerMask, Ray, SpatialQuery};
use crate::settings::AvoidanceSettings;
use crate::steering::try_steer;

/// Per-entity velocity memory carried from one tick to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    /// The entity's actual velocity. Its vertical component is ignored by
    /// the planner.
    pub current_velocity: Vec3,
    /// Planar velocity the controller produced on the previous tick.
    pub previous_velocity: Vec2,
}

/// Everything one tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementStep {
    /// State to carry into the next tick.
    pub state: MotionState,
    /// Velocity applied this tick.
    pub velocity: Vec3,
    /// Position after integrating `velocity` and snapping to the ground.
    pub position: Vec3,
    /// Whether obstacle steering adjusted the input.
    pub steered: bool,
    /// The input the velocity was planned with.
    pub input: Vec2,
    /// Whether the ground probe found something to stand on.
    pub grounded: bool,
}

/// Drives one entity's planar movement.
#[derive(Debug, Clone)]
pub struct MovementController {
    planner: VelocityPlanner,
    avoidance: AvoidanceSettings,
    capsule: CapsuleShape,
    ground_layers: LayerMask,
    state: MotionState,
}

impl MovementController {
    pub fn new(
        planner: VelocityPlanner,
        avoidance: AvoidanceSettings,
        capsule: CapsuleShape,
    ) -> Result<Self, MovementError> {
        avoidance
            .validate()
            .and_then(|()| positive("capsule.radius", capsule.radius))
            .and_then(|()| positive("capsule.height", capsule.height))
            .inspect_err(|e| warn!(error = %e, "rejected controller settings"))?;
        Ok(Self {
            planner,
            avoidance,
            capsule,
            ground_layers: LayerMask::GROUND,
            state: MotionState::default(),
        })
    }

    /// Sets the layers the ground probe snaps onto.
    pub fn with_ground_layers(mut self, layers: LayerMask) -> Self {
        self.ground_layers = layers;
        self
    }

    pub fn planner(&self) -> &VelocityPlanner {
        &self.planner
    }

    pub fn planner_mut(&mut self) -> &mut VelocityPlanner {
        &mut self.planner
    }

    pub fn avoidance(&self) -> &AvoidanceSettings {
        &self.avoidance
    }

    pub fn set_avoidance(&mut self, avoidance: AvoidanceSettings) -> Result<(), MovementError> {
        avoidance.validate()?;
        self.avoidance = avoidance;
        Ok(())
    }

    pub fn capsule(&self) -> &CapsuleShape {
        &self.capsule
    }

    pub fn ground_layers(&self) -> LayerMask {
        self.ground_layers
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Overrides the velocity the next tick starts from, e.g. after the
    /// host resolved a collision.
    pub fn set_current_velocity(&mut self, velocity: Vec3) {
        self.state.current_velocity = velocity;
    }

    /// Switches top speed (running vs aiming).
    pub fn set_top_speed(&mut self, top_speed: f32) -> Result<(), MovementError> {
        self.planner.set_top_speed(top_speed)
    }

    /// Advances one tick and stores the resulting state.
    pub fn step<Q: SpatialQuery + ?Sized>(
        &mut self,
        position: Vec3,
        movement_input: Vec2,
        world: &Q,
    ) -> MovementStep {
        let step = self.advance(self.state, position, movement_input, world);
        self.state = step.state;
        step
    }

    /// Computes one tick from `state` without touching the controller.
    pub fn advance<Q: SpatialQuery + ?Sized>(
        &self,
        state: MotionState,
        position: Vec3,
        movement_input: Vec2,
        world: &Q,
    ) -> MovementStep {
        let planner = &self.planner;
        let mut input = movement_input;
        let mut velocity =
            planner.next_velocity(state.previous_velocity, state.current_velocity, input);

        let mut steered = false;
        if self.avoidance.enabled {
            let outcome = try_steer(
                world,
                position,
                &self.capsule,
                velocity,
                input,
                &self.avoidance,
                planner.stopping_distance(velocity),
            );
            if outcome.did_steer {
                input = outcome.input;
                velocity =
                    planner.next_velocity(state.previous_velocity, state.current_velocity, input);
                steered = true;
            }
        }

        let moved = position + velocity * planner.tick_duration();
        let ground = world.raycast(&Ray::down(moved, f32::INFINITY, self.ground_layers));
        let position = match ground {
            Some(hit) => self.capsule.position_on_ground(hit.point),
            None => moved,
        };

        trace!(
            vx = velocity.x,
            vz = velocity.z,
            steered,
            grounded = ground.is_some(),
            "movement tick"
        );

        MovementStep {
            state: MotionState {
                current_velocity: velocity,
                previous_velocity: flatten(velocity),
            },
            velocity,
            position,
            steered,
            input,
            grounded: ground.is_some(),
        }
    }
}
