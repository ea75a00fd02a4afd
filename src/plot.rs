use std::path::Path;

use nalgebra::Point3;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::animation::RenderSink;
use crate::error::SinkError;
use crate::model::orrery::{BodyInfo, Orrery, Snapshot};

const CENTRAL_BODY_SIZE: i32 = 6;
const BODY_SIZE: i32 = 4;

/// Writes the animation out as an animated GIF, one GIF frame per tick.
///
/// Every frame is a full redraw: the axes, the central body, and for each
/// body a spoke from the origin out to its current position.
pub struct GifSink<'a> {
    root: DrawingArea<BitMapBackend<'a>, Shift>,
    limit: f64,
    unit: String,
    title: String,
    central: Option<BodyInfo>,
}

impl<'a> GifSink<'a> {
    /// `limit` is the half-width of the (square) plotting region.
    pub fn new(
        path: &'a Path,
        size: u32,
        frame_delay_ms: u32,
        limit: f64,
    ) -> Result<Self, SinkError> {
        let root = BitMapBackend::gif(path, (size, size), frame_delay_ms)?.into_drawing_area();
        Ok(GifSink {
            root,
            limit,
            unit: String::from("AU"),
            title: String::from("Trajectories of Planets in the Solar System"),
            central: None,
        })
    }

    pub fn with_unit(self, unit: impl Into<String>) -> Self {
        GifSink {
            unit: unit.into(),
            ..self
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        GifSink {
            title: title.into(),
            ..self
        }
    }
}

fn to_rgb(color: &Point3<f32>) -> RGBColor {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(channel(color.x), channel(color.y), channel(color.z))
}

impl RenderSink for GifSink<'_> {
    fn clear(&mut self) -> Result<(), SinkError> {
        self.central = None;
        self.root.fill(&WHITE)?;
        Ok(())
    }

    fn draw_central_body(&mut self, central: &BodyInfo) -> Result<(), SinkError> {
        // Nothing to draw yet; every GIF frame is painted from scratch, so
        // just remember it for later.
        self.central = Some(central.clone());
        Ok(())
    }

    fn draw_frame(&mut self, orrery: &Orrery, snapshot: &Snapshot) -> Result<(), SinkError> {
        self.root.fill(&WHITE)?;
        {
            let limit = self.limit;
            let mut chart = ChartBuilder::on(&self.root)
                .caption(&self.title, ("sans-serif", 24))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(-limit..limit, -limit..limit)?;

            chart
                .configure_mesh()
                .x_desc(format!("x ({})", self.unit))
                .y_desc(format!("y ({})", self.unit))
                .draw()?;

            if let Some(central) = &self.central {
                let color = to_rgb(&central.color);
                chart
                    .draw_series(std::iter::once(Circle::new(
                        (0.0, 0.0),
                        CENTRAL_BODY_SIZE,
                        color.filled(),
                    )))?
                    .label(central.name.as_str())
                    .legend(move |(x, y)| {
                        Circle::new((x + 10, y), CENTRAL_BODY_SIZE, color.filled())
                    });
            }

            for (id, pt) in snapshot.iter() {
                let body = orrery.get_body(id);
                let color = to_rgb(&body.info.color);
                chart
                    .draw_series(LineSeries::new(
                        vec![(0.0, 0.0), (pt.x, pt.y)],
                        color.stroke_width(1),
                    ))?
                    .label(body.info.name.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
                chart.draw_series(std::iter::once(Circle::new(
                    (pt.x, pt.y),
                    BODY_SIZE,
                    color.filled(),
                )))?;
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }
        self.root.present()?;
        Ok(())
    }
}
