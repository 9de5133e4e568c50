//! Third-person shooter glue around the movement core: camera-relative
//! intent, the aim camera, crosshair feedback, locomotion animation
//! parameters and the rifle.

pub mod aim_camera;
pub mod crosshair;
pub mod intent;
pub mod locomotion;
pub mod pointer;
pub mod rifle;

pub use aim_camera::{AimCamera, AimCameraSettings, CameraPose};
pub use crosshair::{Crosshair, CrosshairSettings};
pub use intent::{MovementIntent, PlayerIntent, camera_relative};
pub use locomotion::{
    AnimationParams, LocomotionAnimator, LocomotionInput, LocomotionSettings, smooth_damp,
    smooth_damp_angle,
};
pub use pointer::{AimPoint, aim_point};
pub use rifle::{BulletTrail, Rifle, RifleSettings, Shot};
