use serde::Serialize;

use crate::math::{deg_to_rad, Vec2d};
use crate::{TrafficSpec, WorldSpec};

/// Background vessels turn around this far inside the basin edge.
pub const TRAFFIC_BORDER: f64 = 80.0;

/// Background vessel. Moves on its own and never interacts with the own ship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficVessel {
    pub position: Vec2d,
    /// Display units per second.
    pub velocity: Vec2d,
    pub heading: f64,
    pub size: f64,
    pub kind: String,
}

impl From<&TrafficSpec> for TrafficVessel {
    fn from(t: &TrafficSpec) -> Self {
        Self {
            position: Vec2d::new(t.x, t.y),
            velocity: Vec2d::new(t.vx, t.vy),
            heading: deg_to_rad(t.heading_deg),
            size: t.size,
            kind: t.kind.clone(),
        }
    }
}

pub fn advance_traffic(traffic: &mut [TrafficVessel], world: &WorldSpec, dt: f64) {
    for v in traffic.iter_mut() {
        v.position += v.velocity * dt;
        // Point back toward the interior so a deep overshoot cannot flip every step
        if v.position.x < TRAFFIC_BORDER {
            v.velocity.x = v.velocity.x.abs();
        } else if v.position.x > world.width - TRAFFIC_BORDER {
            v.velocity.x = -v.velocity.x.abs();
        }
        if v.position.y < TRAFFIC_BORDER {
            v.velocity.y = v.velocity.y.abs();
        } else if v.position.y > world.height - TRAFFIC_BORDER {
            v.velocity.y = -v.velocity.y.abs();
        }
        v.heading = v.velocity.y.atan2(v.velocity.x);
    }
}
