use approx::assert_abs_diff_eq;
use itertools::{EitherOrBoth, Itertools};
use nalgebra::{Point2, Point3};

use circular_orrery::animation::{
    AnimationDriver, DriverParams, EndBehavior, NullSink, RenderSink, TraceSink,
};
use circular_orrery::consts::solar_system;
use circular_orrery::error::{AnimationError, SinkError};
use circular_orrery::model::{BodyID, BodyInfo, Orrery, Snapshot};

/// Remembers everything it was asked to draw.
#[derive(Debug, Default)]
struct RecordingSink {
    clears: usize,
    central: Vec<String>,
    frames: Vec<Snapshot>,
}

impl RenderSink for RecordingSink {
    fn clear(&mut self) -> Result<(), SinkError> {
        self.clears += 1;
        self.frames.clear();
        Ok(())
    }

    fn draw_central_body(&mut self, central: &BodyInfo) -> Result<(), SinkError> {
        self.central.push(central.name.clone());
        Ok(())
    }

    fn draw_frame(&mut self, _: &Orrery, snapshot: &Snapshot) -> Result<(), SinkError> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}

/// Gives up after a fixed number of frames.
struct FailingSink {
    frames_left: usize,
}

impl RenderSink for FailingSink {
    fn clear(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    fn draw_central_body(&mut self, _: &BodyInfo) -> Result<(), SinkError> {
        Ok(())
    }

    fn draw_frame(&mut self, _: &Orrery, _: &Snapshot) -> Result<(), SinkError> {
        if self.frames_left == 0 {
            return Err("out of disk".into());
        }
        self.frames_left -= 1;
        Ok(())
    }
}

fn earth_only() -> Orrery {
    let mut orrery = Orrery::new(BodyInfo::new("Sun", Point3::new(1.0, 1.0, 0.0)));
    orrery
        .add_body(BodyInfo::new("Earth", Point3::new(0.0, 0.5, 0.0)), 1.0, 365.0)
        .unwrap();
    orrery
}

#[test]
fn test_ten_frames_over_a_hundred_days() {
    let mut driver =
        AnimationDriver::new(earth_only(), DriverParams::new(0.0, 100.0, 10.0)).unwrap();
    let mut sink = RecordingSink::default();

    assert_eq!(driver.run(&mut sink).unwrap(), 10);
    assert_eq!(sink.clears, 1);
    assert_eq!(sink.central, vec!["Sun"]);

    let expected_times = (0..10).map(|i| i as f64 * 10.0);
    for tup in expected_times.zip_longest(sink.frames.iter()) {
        let (expected_time, frame) = match tup {
            EitherOrBoth::Both(expected, actual) => (expected, actual),
            EitherOrBoth::Left(expected) => {
                panic!("Expected frame at t = {}, but none was drawn", expected)
            }
            EitherOrBoth::Right(actual) => {
                panic!("Did not expect frame, but found one anyways: {:?}", actual)
            }
        };
        assert_eq!(frame.time(), expected_time);
        assert_eq!(frame.len(), 1);
    }

    // Stopped for good
    assert!(driver.is_finished());
    assert_eq!(driver.tick().unwrap(), None);
    assert_eq!(driver.tick().unwrap(), None);
    assert_eq!(driver.current_time(), 100.0);
}

#[test]
fn test_frame_count_rounds_up() {
    for &(start, end, step, expected) in &[
        (0.0, 100.0, 10.0, 10),
        (0.0, 95.0, 10.0, 10),
        (3.0, 4.0, 0.3, 4),
        // The quotient rounds up past 7 here
        (0.0, 2.1, 0.3, 7),
    ] {
        let params = DriverParams::new(start, end, step);
        let mut driver = AnimationDriver::new(earth_only(), params).unwrap();

        let mut ticks = 0;
        while let Some(snapshot) = driver.tick().unwrap() {
            assert!(snapshot.time() < end);
            ticks += 1;
        }
        assert_eq!(ticks, expected);
        assert_eq!(driver.frame_count(), expected);
    }
}

#[test]
fn test_earth_positions_through_the_driver() {
    let mut driver =
        AnimationDriver::new(earth_only(), DriverParams::new(0.0, 366.0, 91.25)).unwrap();
    let earth = BodyID(0);

    let expected = [
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(-1.0, 0.0),
        Point2::new(0.0, -1.0),
        Point2::new(1.0, 0.0),
    ];
    for pt in expected.iter() {
        let snapshot = driver.tick().unwrap().unwrap();
        assert_abs_diff_eq!(snapshot.get(earth).unwrap(), *pt, epsilon = 1e-12);
    }
    assert_eq!(driver.tick().unwrap(), None);
}

#[test]
fn test_reset_is_idempotent() {
    let mut driver =
        AnimationDriver::new(earth_only(), DriverParams::new(5.0, 50.0, 5.0)).unwrap();
    driver.reset();
    driver.reset();
    assert_eq!(driver.current_time(), 5.0);

    let first = driver.tick().unwrap();
    driver.tick().unwrap();
    driver.tick().unwrap();
    assert_eq!(driver.current_time(), 20.0);

    driver.reset();
    driver.reset();
    assert_eq!(driver.frame_index(), 0);
    assert_eq!(driver.tick().unwrap(), first);
}

#[test]
fn test_restart_clears_the_sink() {
    let mut driver =
        AnimationDriver::new(earth_only(), DriverParams::new(0.0, 50.0, 10.0)).unwrap();
    let mut sink = RecordingSink::default();

    driver.start(&mut sink).unwrap();
    assert!(driver.step(&mut sink).unwrap());
    assert!(driver.step(&mut sink).unwrap());
    assert_eq!(sink.frames.len(), 2);

    driver.start(&mut sink).unwrap();
    assert_eq!(sink.clears, 2);
    assert!(sink.frames.is_empty());
    assert_eq!(sink.central, vec!["Sun", "Sun"]);
    assert_eq!(driver.current_time(), 0.0);
}

#[test]
fn test_repeat_keeps_going() {
    let params = DriverParams::new(0.0, 30.0, 10.0).with_end_behavior(EndBehavior::Repeat);
    let mut driver = AnimationDriver::new(earth_only(), params).unwrap();
    let mut sink = RecordingSink::default();
    driver.start(&mut sink).unwrap();

    for _ in 0..10 {
        assert!(driver.step(&mut sink).unwrap());
    }
    let times: Vec<f64> = sink.frames.iter().map(|f| f.time()).collect();
    assert_eq!(
        times,
        vec![0.0, 10.0, 20.0, 0.0, 10.0, 20.0, 0.0, 10.0, 20.0, 0.0]
    );
    assert_eq!(driver.cycles(), 3);

    // A single pass, even though it repeats
    assert_eq!(driver.run(&mut sink).unwrap(), 3);
}

#[test]
fn test_sinks_that_draw_nothing() {
    let orrery = solar_system().unwrap();
    let end = orrery.longest_period().unwrap();
    let mut driver = AnimationDriver::new(orrery, DriverParams::new(0.0, end, 10.0)).unwrap();

    assert_eq!(driver.run(&mut NullSink).unwrap(), 5980);

    let mut trace = TraceSink::new();
    assert_eq!(driver.run(&mut trace).unwrap(), 5980);
    assert_eq!(trace.frames_seen(), 5980);
}

#[test]
fn test_whole_solar_system_stays_on_its_orbits() {
    let orrery = solar_system().unwrap();
    let mut driver =
        AnimationDriver::new(orrery.clone(), DriverParams::new(0.0, 59800.0, 997.0)).unwrap();

    while let Some(snapshot) = driver.tick().unwrap() {
        assert_eq!(snapshot.len(), orrery.len());
        for (id, pt) in snapshot.iter() {
            let radius = orrery.get_body(id).orbit.radius();
            assert_abs_diff_eq!(pt.coords.norm(), radius, epsilon = 1e-9 * radius);
        }
    }
}

#[test]
fn test_sink_errors_stop_the_run() {
    let mut driver =
        AnimationDriver::new(earth_only(), DriverParams::new(0.0, 100.0, 10.0)).unwrap();
    let mut sink = FailingSink { frames_left: 3 };

    match driver.run(&mut sink) {
        Err(AnimationError::Sink(e)) => assert_eq!(e.to_string(), "out of disk"),
        other => panic!("expected sink error, got {:?}", other),
    }
    // The failed frame was still computed, so time moved past it
    assert_eq!(driver.frame_index(), 4);
}
