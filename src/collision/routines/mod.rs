//! Pairwise geometric collision routines
//!
//! One function per supported shape-kind combination, grouped by the first
//! shape of the pair. Routines return `None` for "no collision"; in
//! `just_test` mode they short-circuit at the first confirmed overlap with
//! the contact-free `CollisionResult::Overlap` sentinel.

mod capsule;
mod circle;
mod convex;
mod heightfield;
mod particle;
mod plane;

pub(crate) use self::capsule::capsule_capsule;
pub(crate) use self::circle::{
    circle_capsule, circle_circle, circle_convex, circle_line, circle_particle, circle_plane,
    particle_capsule, particle_plane,
};
pub(crate) use self::convex::{convex_capsule, convex_convex};
pub(crate) use self::heightfield::{circle_heightfield, convex_heightfield};
pub(crate) use self::particle::particle_convex;
pub(crate) use self::plane::{plane_capsule, plane_convex, plane_line};
