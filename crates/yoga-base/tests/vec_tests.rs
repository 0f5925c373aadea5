use yoga_base::{Vec2, Vec3};

#[test]
fn test_vec3_sub_and_dot() {
    let a = Vec3::new(1.0_f64, 2.0, 3.0);
    let b = Vec3::new(0.5, 1.0, -1.0);
    let d = a - b;
    assert_eq!(d, Vec3::new(0.5, 1.0, 4.0));
    assert_eq!(a.dot(b), 0.5 + 2.0 - 3.0);
}

#[test]
fn test_vec3_length() {
    let v = Vec3::new(3.0_f64, 4.0, 12.0);
    assert_eq!(v.length_squared(), 169.0);
    assert_eq!(v.length(), 13.0);
}

#[test]
fn test_vec3_from_array() {
    let v: Vec3<f64> = [1.0, -2.0, 0.25].into();
    assert_eq!(v, Vec3::new(1.0, -2.0, 0.25));
}

#[test]
fn test_vec3_is_finite() {
    assert!(Vec3::new(0.0_f64, 1.0, 2.0).is_finite());
    assert!(!Vec3::new(f64::NAN, 1.0, 2.0).is_finite());
    assert!(!Vec3::new(0.0, f64::INFINITY, 2.0).is_finite());
}

#[test]
fn test_vec2_to_pixel_truncates() {
    let p = Vec2::new(0.5_f32, 0.25).to_pixel(640, 480);
    assert_eq!(p, Vec2::new(320, 120));
    let edge = Vec2::new(0.999_f32, 0.0).to_pixel(100, 100);
    assert_eq!(edge.x, 99);
}
