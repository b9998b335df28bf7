use std::cell::RefCell;
use std::rc::Rc;

use btc_gauge_wasm::domain::analysis::DisplayScore;
use btc_gauge_wasm::domain::errors::{DashboardError, RenderingResult};
use btc_gauge_wasm::domain::gauge::{DrawSurface, SurfaceFactory};
use btc_gauge_wasm::infrastructure::rendering::GaugeRenderer;

#[derive(Debug, Default)]
struct DrawLog {
    cleared: usize,
    arcs: usize,
    triangles: usize,
    circles: usize,
}

struct RecordingSurface {
    size: (f64, f64),
    log: Rc<RefCell<DrawLog>>,
    fail_on_arc: bool,
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        self.size
    }

    fn clear(&mut self) -> RenderingResult<()> {
        self.log.borrow_mut().cleared += 1;
        Ok(())
    }

    fn stroke_arc(
        &mut self,
        _cx: f64,
        _cy: f64,
        _radius: f64,
        _start_angle: f64,
        _end_angle: f64,
        _color: &str,
        _line_width: f64,
    ) -> RenderingResult<()> {
        if self.fail_on_arc {
            return Err(DashboardError::Rendering("lost the context".to_string()));
        }
        self.log.borrow_mut().arcs += 1;
        Ok(())
    }

    fn fill_triangle(&mut self, _vertices: [(f64, f64); 3], _color: &str) -> RenderingResult<()> {
        self.log.borrow_mut().triangles += 1;
        Ok(())
    }

    fn fill_circle(&mut self, _cx: f64, _cy: f64, _radius: f64, _color: &str) -> RenderingResult<()> {
        self.log.borrow_mut().circles += 1;
        Ok(())
    }
}

struct RecordingFactory {
    log: Rc<RefCell<DrawLog>>,
    missing: bool,
    fail_on_arc: bool,
}

impl RecordingFactory {
    fn new(log: Rc<RefCell<DrawLog>>) -> Self {
        Self {
            log,
            missing: false,
            fail_on_arc: false,
        }
    }
}

impl SurfaceFactory for RecordingFactory {
    type Surface = RecordingSurface;

    fn acquire(&self, _canvas_id: &str) -> Option<RecordingSurface> {
        if self.missing {
            return None;
        }
        Some(RecordingSurface {
            size: (300.0, 160.0),
            log: Rc::clone(&self.log),
            fail_on_arc: self.fail_on_arc,
        })
    }
}

fn renderer() -> (GaugeRenderer<RecordingFactory>, Rc<RefCell<DrawLog>>) {
    let log = Rc::new(RefCell::new(DrawLog::default()));
    (
        GaugeRenderer::new(RecordingFactory::new(Rc::clone(&log))),
        log,
    )
}

#[test]
fn one_binding_per_canvas_after_sequential_renders() {
    let (mut renderer, _log) = renderer();
    renderer.render("gaugeChart_geral", 30.0);
    renderer.render("gaugeChart_geral", 70.0);

    assert_eq!(renderer.bound_count(), 1);
    assert_eq!(
        renderer.bound_score("gaugeChart_geral"),
        Some(DisplayScore::new(70.0))
    );
}

#[test]
fn different_canvases_are_independent() {
    let (mut renderer, _log) = renderer();
    renderer.render("gaugeChart_geral", 85.0);
    renderer.render("gaugeChart_riscos", 42.0);

    assert_eq!(renderer.bound_count(), 2);
    assert_eq!(
        renderer.bound_score("gaugeChart_riscos"),
        Some(DisplayScore::new(42.0))
    );
}

#[test]
fn one_render_replays_the_full_scene_once() {
    let (mut renderer, log) = renderer();
    renderer.render("gaugeChart_geral", 50.0);

    let log = log.borrow();
    assert_eq!(log.cleared, 1);
    assert_eq!(log.arcs, 5);
    assert_eq!(log.triangles, 1);
    assert_eq!(log.circles, 1);
}

#[test]
fn missing_canvas_is_skipped_without_binding() {
    let log = Rc::new(RefCell::new(DrawLog::default()));
    let mut factory = RecordingFactory::new(Rc::clone(&log));
    factory.missing = true;
    let mut renderer = GaugeRenderer::new(factory);

    renderer.render("gaugeChart_fantasma", 50.0);

    assert_eq!(renderer.bound_count(), 0);
    assert_eq!(log.borrow().cleared, 0);
}

#[test]
fn drawing_failure_is_contained_and_releases_the_binding() {
    let log = Rc::new(RefCell::new(DrawLog::default()));
    let mut factory = RecordingFactory::new(Rc::clone(&log));
    factory.fail_on_arc = true;
    let mut renderer = GaugeRenderer::new(factory);

    renderer.render("gaugeChart_geral", 50.0);

    assert_eq!(renderer.bound_count(), 0);
    assert_eq!(log.borrow().triangles, 0);
}

#[test]
fn invalid_scores_bind_clamped() {
    let (mut renderer, _log) = renderer();
    renderer.render("gaugeChart_geral", 250.0);
    assert_eq!(
        renderer.bound_score("gaugeChart_geral"),
        Some(DisplayScore::MAX)
    );

    renderer.render("gaugeChart_geral", f64::NAN);
    assert_eq!(
        renderer.bound_score("gaugeChart_geral"),
        Some(DisplayScore::ZERO)
    );
    assert_eq!(renderer.bound_count(), 1);
}

#[test]
fn redraw_all_repaints_every_binding_at_its_last_score() {
    let (mut renderer, log) = renderer();
    renderer.render("gaugeChart_geral", 85.0);
    renderer.render("gaugeChart_tecnico", 72.0);

    renderer.redraw_all();

    assert_eq!(renderer.bound_count(), 2);
    assert_eq!(
        renderer.bound_score("gaugeChart_geral"),
        Some(DisplayScore::new(85.0))
    );
    assert_eq!(
        renderer.bound_score("gaugeChart_tecnico"),
        Some(DisplayScore::new(72.0))
    );
    assert_eq!(log.borrow().cleared, 4);
}

#[test]
fn release_forgets_a_single_gauge() {
    let (mut renderer, _log) = renderer();
    renderer.render("gaugeChart_geral", 85.0);
    renderer.render("gaugeChart_tecnico", 72.0);

    assert!(renderer.release("gaugeChart_geral"));
    assert!(!renderer.release("gaugeChart_geral"));
    assert_eq!(renderer.bound_count(), 1);

    renderer.release_all();
    assert_eq!(renderer.bound_count(), 0);
}
