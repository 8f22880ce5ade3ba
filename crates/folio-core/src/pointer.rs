//! Pointer tracking: raw pointer-move samples in, normalized offsets out.

use crate::parallax::ParallaxParams;
use glam::Vec2;

/// One pointer-move observation as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Client-space pointer position in CSS pixels.
    pub position: Vec2,
    /// Viewport size in CSS pixels.
    pub viewport: Vec2,
}

impl PointerSample {
    pub fn new(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(client_x, client_y),
            viewport: Vec2::new(width, height),
        }
    }

    pub fn center_of(width: f32, height: f32) -> Self {
        Self::new(width * 0.5, height * 0.5, width, height)
    }
}

/// Pointer position relative to the viewport center, scaled to `±range / 2`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_sample(sample: &PointerSample) -> Self {
        Self::from_sample_with(sample, &ParallaxParams::default())
    }

    /// Degenerate viewports (zero width or height) yield 0 on that axis.
    pub fn from_sample_with(sample: &PointerSample, params: &ParallaxParams) -> Self {
        let raw = (sample.position / sample.viewport - Vec2::splat(0.5)) * params.range;
        Self::new(raw.x, raw.y).sanitized(params)
    }

    /// Non-finite components become 0; the rest are clamped to `±range / 2`.
    pub fn sanitized(self, params: &ParallaxParams) -> Self {
        let limit = params.half_range();
        Self {
            x: sanitize(self.x, limit),
            y: sanitize(self.y, limit),
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[inline]
fn sanitize(v: f32, limit: f32) -> f32 {
    if v.is_finite() {
        v.clamp(-limit, limit)
    } else {
        0.0
    }
}

pub type MoveHandler = Box<dyn FnMut(PointerSample)>;

/// Platform source of pointer-move events.
pub trait PointerSource {
    /// Subscription handle; dropping it removes the handler from the source.
    type Listener;

    fn on_move(&self, handler: MoveHandler) -> anyhow::Result<Self::Listener>;
}

/// Owns at most one live pointer-move subscription and turns samples into offsets.
pub struct PointerTracker<S: PointerSource + ?Sized> {
    params: ParallaxParams,
    listener: Option<S::Listener>,
}

impl<S: PointerSource + ?Sized> PointerTracker<S> {
    pub fn new(params: ParallaxParams) -> Self {
        Self {
            params,
            listener: None,
        }
    }

    /// Subscribes `publish` to offsets derived from `source`. A previous
    /// subscription is released first.
    pub fn activate(
        &mut self,
        source: &S,
        mut publish: impl FnMut(PointerOffset) + 'static,
    ) -> anyhow::Result<()> {
        self.deactivate();
        let params = self.params;
        let listener = source.on_move(Box::new(move |sample: PointerSample| {
            publish(PointerOffset::from_sample_with(&sample, &params));
        }))?;
        self.listener = Some(listener);
        log::debug!("[pointer] tracking started");
        Ok(())
    }

    pub fn deactivate(&mut self) {
        if self.listener.take().is_some() {
            log::debug!("[pointer] tracking stopped");
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }
}

impl<S: PointerSource + ?Sized> Drop for PointerTracker<S> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Slots = Rc<RefCell<Vec<Option<MoveHandler>>>>;

    #[derive(Default)]
    struct FakeSource {
        slots: Slots,
    }

    struct FakeListener {
        slot: usize,
        slots: Slots,
    }

    impl Drop for FakeListener {
        fn drop(&mut self) {
            self.slots.borrow_mut()[self.slot] = None;
        }
    }

    impl PointerSource for FakeSource {
        type Listener = FakeListener;

        fn on_move(&self, handler: MoveHandler) -> anyhow::Result<FakeListener> {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(handler));
            Ok(FakeListener {
                slot: slots.len() - 1,
                slots: self.slots.clone(),
            })
        }
    }

    impl FakeSource {
        fn live(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.is_some()).count()
        }

        fn emit(&self, sample: PointerSample) {
            let n = self.slots.borrow().len();
            for i in 0..n {
                let taken = self.slots.borrow_mut()[i].take();
                if let Some(mut h) = taken {
                    h(sample);
                    self.slots.borrow_mut()[i] = Some(h);
                }
            }
        }
    }

    #[test]
    fn center_maps_to_zero() {
        let o = PointerOffset::from_sample(&PointerSample::center_of(1280.0, 720.0));
        assert_eq!(o, PointerOffset::ZERO);
    }

    #[test]
    fn corners_map_to_range_limits() {
        let o = PointerOffset::from_sample(&PointerSample::new(0.0, 0.0, 1000.0, 1000.0));
        assert_eq!(o, PointerOffset::new(-10.0, -10.0));
        let o = PointerOffset::from_sample(&PointerSample::new(1000.0, 1000.0, 1000.0, 1000.0));
        assert_eq!(o, PointerOffset::new(10.0, 10.0));
    }

    #[test]
    fn offsets_stay_within_range_across_viewport() {
        let (w, h) = (1366.0, 768.0);
        for i in 0..=20 {
            for j in 0..=20 {
                let s = PointerSample::new(w * i as f32 / 20.0, h * j as f32 / 20.0, w, h);
                let o = PointerOffset::from_sample(&s);
                assert!((-10.0..=10.0).contains(&o.x), "x out of range: {:?}", o);
                assert!((-10.0..=10.0).contains(&o.y), "y out of range: {:?}", o);
            }
        }
    }

    #[test]
    fn degenerate_viewport_yields_finite_zero() {
        let o = PointerOffset::from_sample(&PointerSample::new(10.0, 0.0, 0.0, 0.0));
        assert_eq!(o, PointerOffset::ZERO);
        let o = PointerOffset::from_sample(&PointerSample::new(250.0, 30.0, 1000.0, 0.0));
        assert_eq!(o.x, -5.0);
        assert_eq!(o.y, 0.0);
    }

    #[test]
    fn samples_outside_viewport_are_clamped() {
        let o = PointerOffset::from_sample(&PointerSample::new(-500.0, 3000.0, 1000.0, 1000.0));
        assert_eq!(o, PointerOffset::new(-10.0, 10.0));
    }

    #[test]
    fn sanitized_zeroes_non_finite_and_clamps() {
        let params = ParallaxParams::default();
        let o = PointerOffset::new(f32::NAN, f32::NEG_INFINITY).sanitized(&params);
        assert_eq!(o, PointerOffset::ZERO);
        let o = PointerOffset::new(-42.0, 3.5).sanitized(&params);
        assert_eq!(o, PointerOffset::new(-10.0, 3.5));
    }

    #[test]
    fn tracker_publishes_offsets_while_active() {
        let source = FakeSource::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut tracker: PointerTracker<FakeSource> = PointerTracker::new(ParallaxParams::default());

        let sink = seen.clone();
        tracker
            .activate(&source, move |o| sink.borrow_mut().push(o))
            .unwrap();
        assert!(tracker.is_active());
        assert_eq!(source.live(), 1);

        source.emit(PointerSample::new(0.0, 500.0, 1000.0, 1000.0));
        tracker.deactivate();
        source.emit(PointerSample::new(1000.0, 500.0, 1000.0, 1000.0));

        assert_eq!(*seen.borrow(), vec![PointerOffset::new(-10.0, 0.0)]);
        assert_eq!(source.live(), 0);
    }

    #[test]
    fn reactivation_keeps_a_single_listener() {
        let source = FakeSource::default();
        let mut tracker: PointerTracker<FakeSource> = PointerTracker::new(ParallaxParams::default());
        tracker.activate(&source, |_| {}).unwrap();
        tracker.activate(&source, |_| {}).unwrap();
        assert_eq!(source.live(), 1);
        drop(tracker);
        assert_eq!(source.live(), 0);
    }
}
