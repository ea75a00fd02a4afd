use kiss3d::window::Window;
use nalgebra::{Point3, Vector3};

pub fn path_iter_parametric<F, S>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>>
where
    F: Fn(S) -> Point3<f32>,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    // Zero segments would divide by zero below
    let num_segments = num_segments.max(1);
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        .map(move |i| convert(i) / convert(num_segments))
        // u ranges from 0 to 1 (inclusive)
        .map(move |u| t_start + u * (t_end - t_start))
        .map(f)
}

/// Points around a circle in the xy plane, ending where it started.
pub fn circle_points(
    center: Point3<f32>,
    radius: f32,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>> {
    let f = move |theta: f32| center + radius * Vector3::new(theta.cos(), theta.sin(), 0.0);
    path_iter_parametric(f, 0.0, std::f32::consts::TAU, num_segments)
}

pub fn draw_path<I: Iterator<Item = Point3<f32>>>(
    window: &mut Window,
    points: I,
    color: &Point3<f32>,
) {
    let mut prev_pt = None;
    for pt in points {
        if let Some(prev_pt) = prev_pt {
            window.draw_line(&prev_pt, &pt, color);
        }
        prev_pt = Some(pt);
    }
}
