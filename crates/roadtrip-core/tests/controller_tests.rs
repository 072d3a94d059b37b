// Host-side tests for the marker controller.
// A small simulated widget applies effects the way the browser page does:
// moving the marker fires position_changed back into the controller.

use roadtrip_core::*;

struct SimWidget {
    marker: Option<Coordinate>,
    center: Coordinate,
    reports: Vec<Coordinate>,
    infos: Vec<(Coordinate, &'static str)>,
    location_requests: usize,
}

impl SimWidget {
    fn new(center: Coordinate) -> Self {
        Self {
            marker: None,
            center,
            reports: Vec::new(),
            infos: Vec::new(),
            location_requests: 0,
        }
    }

    fn apply(&mut self, ctl: &mut MarkerController, effects: Vec<Effect>) {
        let mut queue = effects;
        while !queue.is_empty() {
            let mut next = Vec::new();
            for effect in queue {
                match effect {
                    Effect::Report(c) => self.reports.push(c),
                    Effect::MoveMarker(c) => {
                        self.marker = Some(c);
                        ctl.on_position_changed(c, &mut next);
                    }
                    Effect::PanTo(c) => self.center = c,
                    Effect::ShowInfo { at, message } => self.infos.push((at, message)),
                    Effect::RequestLocation => self.location_requests += 1,
                }
            }
            queue = next;
        }
    }

    // The widget fires position_changed on every pixel of a drag.
    fn drag(&mut self, ctl: &mut MarkerController, path: &[Coordinate]) {
        let mut out = Vec::new();
        ctl.on_drag_start();
        for c in path {
            self.marker = Some(*c);
            ctl.on_position_changed(*c, &mut out);
        }
        let end = self.marker.unwrap_or(ctl.options.center);
        ctl.on_drag_end(end, &mut out);
        self.apply(ctl, out);
    }
}

fn setup() -> (MarkerController, SimWidget) {
    let mut ctl = MarkerController::default();
    let mut sim = SimWidget::new(ctl.options.center);
    sim.marker = Some(ctl.options.center);
    let mut out = Vec::new();
    ctl.initialize(&mut out);
    sim.apply(&mut ctl, out);
    sim.reports.clear();
    (ctl, sim)
}

#[test]
fn default_options_match_initial_view() {
    let opts = MapOptions::default();
    assert_eq!(opts.center, Coordinate::new(48.868297, 2.353764));
    assert_eq!(opts.zoom, 6);
    assert!(!opts.fullscreen_control);
    assert_eq!(opts.gesture_handling.as_str(), "cooperative");
}

#[test]
fn initialize_reports_exactly_once() {
    let mut ctl = MarkerController::default();
    let mut sim = SimWidget::new(ctl.options.center);
    let mut out = Vec::new();
    ctl.initialize(&mut out);
    sim.apply(&mut ctl, out);
    assert_eq!(sim.reports, vec![DEFAULT_CENTER]);
}

#[test]
fn place_then_read_is_identity() {
    let samples = [
        Coordinate::new(0.0, 0.0),
        Coordinate::new(90.0, 180.0),
        Coordinate::new(-90.0, -180.0),
        Coordinate::new(-33.8688, 151.2093),
        Coordinate::new(64.1466, -21.9426),
    ];
    for c in samples {
        let mut ctl = MarkerController::default();
        let mut out = Vec::new();
        ctl.place_marker(c, &mut out);
        assert_eq!(ctl.marker_position(), Some(c));
        assert_eq!(out, vec![Effect::Report(c)]);
    }
}

#[test]
fn drag_suppresses_intermediate_reports() {
    let (mut ctl, mut sim) = setup();
    let path = [
        Coordinate::new(48.0, 2.0),
        Coordinate::new(47.5, 2.5),
        Coordinate::new(47.0, 3.0),
        Coordinate::new(46.5, 3.5),
    ];
    sim.drag(&mut ctl, &path);
    // One report, and it carries the final coordinate.
    assert_eq!(sim.reports, vec![Coordinate::new(46.5, 3.5)]);
    assert_eq!(ctl.marker_position(), Some(Coordinate::new(46.5, 3.5)));
    assert_eq!(ctl.drag_state(), DragState::Idle);
}

#[test]
fn position_changes_while_dragging_do_not_emit_effects() {
    let (mut ctl, _sim) = setup();
    let mut out = Vec::new();
    ctl.on_drag_start();
    for i in 0..50 {
        ctl.on_position_changed(Coordinate::new(i as f64 * 0.1, 1.0), &mut out);
    }
    assert!(out.is_empty());
}

#[test]
fn double_click_moves_marker_and_reports_once() {
    let (mut ctl, mut sim) = setup();
    let target = Coordinate::new(43.2965, 5.3698);
    let mut out = Vec::new();
    ctl.on_map_double_click(target, &mut out);
    assert_eq!(out, vec![Effect::MoveMarker(target)]);
    sim.apply(&mut ctl, out);
    assert_eq!(sim.marker, Some(target));
    assert_eq!(sim.reports, vec![target]);
    assert_eq!(ctl.marker_position(), Some(target));
}

#[test]
fn locate_success_pans_moves_and_reports_once() {
    let (mut ctl, mut sim) = setup();
    let mut out = Vec::new();
    ctl.locate_me(true, sim.center, &mut out);
    sim.apply(&mut ctl, out);
    assert_eq!(sim.location_requests, 1);
    assert!(sim.reports.is_empty());

    let found = Coordinate::new(45.764, 4.8357);
    let mut out = Vec::new();
    ctl.on_location_found(found, &mut out);
    sim.apply(&mut ctl, out);
    assert_eq!(sim.center, found);
    assert_eq!(sim.marker, Some(found));
    assert_eq!(sim.reports, vec![found]);
    assert!(sim.infos.is_empty());
}

#[test]
fn locate_unsupported_shows_message_without_report() {
    let (mut ctl, mut sim) = setup();
    let mut out = Vec::new();
    ctl.locate_me(false, sim.center, &mut out);
    sim.apply(&mut ctl, out);
    assert_eq!(sim.location_requests, 0);
    assert!(sim.reports.is_empty());
    assert_eq!(
        sim.infos,
        vec![(DEFAULT_CENTER, "Error: your browser doesn't support geolocation.")]
    );
}

#[test]
fn locate_service_failure_shows_message_without_report() {
    let (mut ctl, mut sim) = setup();
    let mut out = Vec::new();
    ctl.locate_me(true, sim.center, &mut out);
    sim.apply(&mut ctl, out);

    let mut out = Vec::new();
    let err = GeoError::ServiceFailed {
        code: 3,
        message: "Timeout expired".into(),
    };
    ctl.on_location_error(err, sim.center, &mut out);
    sim.apply(&mut ctl, out);
    assert!(sim.reports.is_empty());
    assert_eq!(
        sim.infos,
        vec![(DEFAULT_CENTER, "Error: the geolocation service failed.")]
    );
    assert_eq!(ctl.marker_position(), Some(DEFAULT_CENTER));
}

#[test]
fn geo_errors_map_to_distinct_messages() {
    let unsupported = GeoError::Unsupported.user_message();
    let failed = GeoError::ServiceFailed {
        code: 2,
        message: String::new(),
    }
    .user_message();
    assert_ne!(unsupported, failed);
    assert_eq!(unsupported, MSG_GEOLOCATION_UNSUPPORTED);
    assert_eq!(failed, MSG_GEOLOCATION_FAILED);
}
