use glam::Vec3;

/// Signed distance from `p` to an axis-aligned cube of half-extent
/// `half_extent` centered at the origin, with edges rounded by `rounding`.
pub fn sd_round_box(p: Vec3, half_extent: f32, rounding: f32) -> f32 {
    let q = p.abs() - Vec3::splat(half_extent) + Vec3::splat(rounding);
    q.max(Vec3::ZERO).length() + q.max_element().min(0.0) - rounding
}

/// Central-difference gradient of `f` at `p`, not normalized.
pub fn central_difference(f: impl Fn(Vec3) -> f32, p: Vec3, eps: f32) -> Vec3 {
    let dx = Vec3::new(eps, 0.0, 0.0);
    let dy = Vec3::new(0.0, eps, 0.0);
    let dz = Vec3::new(0.0, 0.0, eps);
    Vec3::new(
        f(p + dx) - f(p - dx),
        f(p + dy) - f(p - dy),
        f(p + dz) - f(p - dz),
    ) / (2.0 * eps)
}
