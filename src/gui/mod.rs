use kiss3d::camera::{ArcBall, Camera};
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};
use nalgebra::{Point2, Point3};
use tracing::error;

use self::controller::{Controller, Request};
use self::scene::Scene;
use crate::animation::{AnimationDriver, EndBehavior};
use crate::error::AnimationError;

mod controller;
mod scene;
mod utils;

pub struct Simulation {
    driver: AnimationDriver,
    scene: Scene,
    controller: Controller,
    camera: ArcBall,
    // Set when the driver fails; nothing moves after that
    halted: Option<String>,
}

impl Simulation {
    pub fn new(mut driver: AnimationDriver) -> Result<Self, AnimationError> {
        let extent = driver.orrery().max_radius().unwrap_or(1.0) as f32;

        let mut scene = Scene::new(extent);
        driver.start(&mut scene)?;

        // Look straight down the z-axis, far enough back to fit the largest orbit
        let camera = ArcBall::new_with_frustrum(
            std::f32::consts::FRAC_PI_4,
            extent * 0.01,
            extent * 10.0,
            Point3::new(0.0, 0.0, 2.6 * extent),
            Point3::origin(),
        );

        Ok(Simulation {
            driver,
            scene,
            controller: Controller::new(),
            camera,
            halted: None,
        })
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        // Process events
        for event in events.iter() {
            if let Some(Request::Restart) = self.controller.process_event(event) {
                self.restart();
            }
        }
    }

    fn restart(&mut self) {
        match self.driver.start(&mut self.scene) {
            Ok(()) => self.halted = None,
            Err(e) => self.halt(e),
        }
    }

    fn halt(&mut self, e: AnimationError) {
        error!("Animation halted: {}", e);
        self.halted = Some(e.to_string());
    }

    fn update_state(&mut self) {
        if self.controller.is_paused() || self.halted.is_some() {
            return;
        }
        for _ in 0..self.controller.ticks_per_frame() {
            match self.driver.step(&mut self.scene) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.halt(e);
                    break;
                }
            }
        }
    }

    fn prerender_scene(&mut self, window: &mut Window) {
        self.scene.draw(window);

        let default_font = kiss3d::text::Font::default();
        let text_color = Point3::new(1.0, 1.0, 1.0);
        window.draw_text(
            &self.status_text(),
            &Point2::origin(),
            50.0,
            &default_font,
            &text_color,
        );
        if let Some(message) = &self.halted {
            window.draw_text(
                message,
                &Point2::new(0.0, window.height() as f32 * 2.0 - 60.0),
                50.0,
                &default_font,
                &Point3::new(1.0, 0.3, 0.3),
            );
        }
    }

    fn status_text(&self) -> String {
        let time = match self.scene.time() {
            Some(t) => format!("{:.1}", t),
            None => String::from("-"),
        };
        let state = if self.halted.is_some() {
            "halted"
        } else if self.driver.is_finished()
            && self.driver.params().end_behavior == EndBehavior::Stop
        {
            "finished"
        } else if self.controller.is_paused() {
            "paused"
        } else {
            "running"
        };

        format!(
            "Time: {}
Frame: {} / {}
Speed: {} ticks/frame
FPS: {:.0}
State: {}",
            time,
            self.driver.frame_index(),
            self.driver.frame_count(),
            self.controller.ticks_per_frame(),
            self.controller.fps(),
            state,
        )
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, None, None)
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());
        self.update_state();
        self.prerender_scene(window);
        self.controller.increment_frame_counter();
    }
}
