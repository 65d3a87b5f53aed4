//! Ports - boundaries between the Player and the outside world.

pub mod outbound;
