pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod kinematics;
pub mod logging;
pub mod scene;
pub mod spawner;
pub mod weapon;
