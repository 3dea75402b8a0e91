//! Core domain: raycast service and its avian implementation.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::GameLayer;

/// Which collision set a probe tests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeChannel {
    /// Static level geometry: ground and walls.
    WorldStatic,
    /// Anything that blocks sight, excluding the player and sensors.
    Visibility,
}

/// First hit along a probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Raycast service injected into the traversal and combat domains.
pub trait SurfaceProbe {
    /// Cast from `from` to `to` and return the first hit, or `None` on a miss.
    fn cast_ray(&self, from: Vec3, to: Vec3, channel: ProbeChannel) -> Option<ProbeHit>;
}

/// Avian spatial query probe that ignores the casting entity.
pub struct AvianProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    caster: Entity,
}

impl<'a, 'w, 's> AvianProbe<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, caster: Entity) -> Self {
        Self {
            spatial_query,
            caster,
        }
    }

    fn filter(&self, channel: ProbeChannel) -> SpatialQueryFilter {
        let filter = match channel {
            ProbeChannel::WorldStatic => {
                SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall])
            }
            ProbeChannel::Visibility => SpatialQueryFilter::from_mask([
                GameLayer::Default,
                GameLayer::Ground,
                GameLayer::Wall,
            ]),
        };
        filter.with_excluded_entities([self.caster])
    }
}

impl SurfaceProbe for AvianProbe<'_, '_, '_> {
    fn cast_ray(&self, from: Vec3, to: Vec3, channel: ProbeChannel) -> Option<ProbeHit> {
        let offset = to - from;
        let max_distance = offset.length();
        let direction = Dir3::new(offset).ok()?;

        let hit = self.spatial_query.cast_ray(
            from,
            direction,
            max_distance,
            true,
            &self.filter(channel),
        )?;

        Some(ProbeHit {
            point: from + *direction * hit.distance,
            normal: hit.normal,
            distance: hit.distance,
        })
    }
}
