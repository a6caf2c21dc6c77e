//! Half-plane side test for fault lines.

use glam::Vec2;

/// Tests which side of a fault line a grid point falls on.
///
/// Computes the 2D perpendicular dot product
/// `test.x * fault.y - test.y * fault.x` between the direction from the
/// fault origin to the point and the fault vector itself, and returns
/// true iff the product is strictly negative. A product of exactly zero
/// means the point lies on the fault line and counts as the false side.
///
/// # Arguments
/// * `test_direction` - Vector from the fault line origin to the tested point
/// * `fault_vector` - The directed fault line vector
pub fn fault_side(test_direction: Vec2, fault_vector: Vec2) -> bool {
    test_direction.perp_dot(fault_vector) < 0.0
}
