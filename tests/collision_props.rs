//! Property tests for the AABB primitives.

use glam::Vec2;
use nova_raid::sim::Aabb;
use proptest::prelude::*;

fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
    Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
}

proptest! {
    #[test]
    fn intersection_is_symmetric(
        ax in -500.0f32..500.0,
        ay in -500.0f32..500.0,
        aw in 0.1f32..100.0,
        ah in 0.1f32..100.0,
        bx in -500.0f32..500.0,
        by in -500.0f32..500.0,
        bw in 0.1f32..100.0,
        bh in 0.1f32..100.0,
    ) {
        let a = aabb(ax, ay, aw, ah);
        let b = aabb(bx, by, bw, bh);
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn boxes_sharing_only_an_edge_never_intersect(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        w in 0.1f32..100.0,
        h in 0.1f32..100.0,
    ) {
        let a = aabb(x, y, w, h);
        let right = aabb(x + w, y, w, h);
        let below = aabb(x, y + h, w, h);
        prop_assert!(!a.intersects(&right));
        prop_assert!(!a.intersects(&below));
    }

    #[test]
    fn a_box_contained_in_another_intersects(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        w in 1.0f32..100.0,
        h in 1.0f32..100.0,
    ) {
        let outer = aabb(x, y, w, h);
        let inner = aabb(x + w * 0.25, y + h * 0.25, w * 0.5, h * 0.5);
        prop_assert!(outer.intersects(&inner));
        prop_assert!(inner.intersects(&outer));
    }
}
