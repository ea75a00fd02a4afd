use kiss3d::window::Window;
use nalgebra::Point3;

use super::utils::{circle_points, draw_path};
use crate::animation::RenderSink;
use crate::error::SinkError;
use crate::model::orrery::{BodyInfo, Orrery, Snapshot};

const ORBIT_SEGMENTS: usize = 120;
const MARKER_SEGMENTS: usize = 12;

struct DrawnBody {
    color: Point3<f32>,
    orbit_radius: f32,
    position: Point3<f32>,
}

/// Everything currently on screen. kiss3d forgets lines after every frame,
/// so this has to be replayed into the window each time.
pub struct Scene {
    central: Option<BodyInfo>,
    bodies: Vec<DrawnBody>,
    time: Option<f64>,
    marker_radius: f32,
}

impl Scene {
    /// `extent` is the radius of the largest orbit, in world units.
    pub fn new(extent: f32) -> Self {
        Scene {
            central: None,
            bodies: vec![],
            time: None,
            marker_radius: extent * 0.01,
        }
    }

    /// Simulated time of the frame on screen, if any.
    pub fn time(&self) -> Option<f64> {
        self.time
    }

    pub fn draw(&self, window: &mut Window) {
        if let Some(central) = &self.central {
            draw_path(
                window,
                circle_points(Point3::origin(), self.marker_radius * 1.5, MARKER_SEGMENTS),
                &central.color,
            );
        }

        for body in self.bodies.iter() {
            // Dim the orbit so the spokes stand out
            let orbit_color = Point3::from(body.color.coords * 0.4);
            draw_path(
                window,
                circle_points(Point3::origin(), body.orbit_radius, ORBIT_SEGMENTS),
                &orbit_color,
            );
            window.draw_line(&Point3::origin(), &body.position, &body.color);
            draw_path(
                window,
                circle_points(body.position, self.marker_radius, MARKER_SEGMENTS),
                &body.color,
            );
        }
    }
}

impl RenderSink for Scene {
    fn clear(&mut self) -> Result<(), SinkError> {
        self.central = None;
        self.bodies.clear();
        self.time = None;
        Ok(())
    }

    fn draw_central_body(&mut self, central: &BodyInfo) -> Result<(), SinkError> {
        self.central = Some(central.clone());
        Ok(())
    }

    fn draw_frame(&mut self, orrery: &Orrery, snapshot: &Snapshot) -> Result<(), SinkError> {
        self.bodies.clear();
        for (id, pt) in snapshot.iter() {
            let body = orrery.get_body(id);
            self.bodies.push(DrawnBody {
                color: body.info.color,
                orbit_radius: body.orbit.radius() as f32,
                position: Point3::new(pt.x as f32, pt.y as f32, 0.0),
            });
        }
        self.time = Some(snapshot.time());
        Ok(())
    }
}
