//! Handle state and the tap / drag / snap state machine.
//!
//! The controller owns no Floem state: pointer positions and timestamps are
//! passed in, and committed grade changes are returned as [`FontChange`]s
//! for the view to hand to its callback.

use std::time::Instant;

use floem::kurbo::Point;
use tracing::{debug, trace};

use crate::animation::{snap_duration, SnapAnimation, SnapKind};
use crate::config::FontResizeConfig;
use crate::constants;
use crate::geometry::Geometry;
use crate::grade::GradeScale;

/// A committed grade change caused by user interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontChange {
    /// New 1-based grade.
    pub grade: usize,
    /// Font size of that grade in scale-independent units.
    pub font_size: f64,
}

/// Coarse interaction state, as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    /// Pointer is down but has not yet become a tap or a drag.
    Pressed {
        origin: Point,
        at: Instant,
        on_handle: bool,
    },
    Dragging {
        last_x: f64,
    },
    /// Pointer moved away without grabbing the handle; ignored until release.
    Ignored,
}

pub struct FontResizeController {
    config: FontResizeConfig,
    scale: GradeScale,
    geometry: Option<Geometry>,
    handle: Point,
    /// Committed 1-based grade.
    grade: usize,
    /// Grade the next layout pass places the handle on.
    pending_grade: usize,
    relayout: bool,
    gesture: Gesture,
    animation: Option<SnapAnimation>,
}

impl FontResizeController {
    pub fn new(config: FontResizeConfig) -> Self {
        let config = config.normalized();
        let scale = config.scale();
        let grade = config.standard_grade;
        Self {
            config,
            scale,
            geometry: None,
            handle: Point::ZERO,
            grade,
            pending_grade: grade,
            relayout: false,
            gesture: Gesture::Idle,
            animation: None,
        }
    }

    pub fn config(&self) -> &FontResizeConfig {
        &self.config
    }

    pub fn scale(&self) -> GradeScale {
        self.scale
    }

    /// `None` until the first layout pass.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Current handle center, including any in-flight motion.
    pub fn handle(&self) -> Point {
        self.handle
    }

    pub fn grade(&self) -> usize {
        self.grade
    }

    /// Size of the committed grade in scale-independent units.
    pub fn font_size(&self) -> f64 {
        self.to_scale_independent(self.scale.size(self.grade))
    }

    pub fn phase(&self) -> Phase {
        match (self.gesture, self.animation) {
            (Gesture::Dragging { .. }, _) => Phase::Dragging,
            (_, Some(_)) => Phase::Animating,
            _ => Phase::Idle,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Select the grade whose size is `font_size` (scale-independent units),
    /// applied on the next layout pass.
    pub fn set_font_size(&mut self, font_size: f64) {
        let px = font_size * self.config.font_scale;
        let grade = self.scale.grade_for_size(px);
        debug!(font_size, grade, "font size set");
        self.pending_grade = grade;
        self.relayout = true;
    }

    /// Select `grade` directly, clamped, applied on the next layout pass.
    pub fn set_slider_grade(&mut self, grade: usize) {
        self.pending_grade = self.scale.clamp(grade);
        self.relayout = true;
    }

    /// Whether [`layout`](Self::layout) would recompute anything.
    pub fn needs_layout(&self, width: f64, height: f64) -> bool {
        match &self.geometry {
            Some(g) => self.relayout || g.width() != width || g.height() != height,
            None => true,
        }
    }

    /// Recompute geometry for a new size and rest the handle on the pending
    /// grade. Returns `false` when nothing changed.
    ///
    /// Any gesture or animation in progress is dropped; the grade is
    /// committed without producing a [`FontChange`].
    pub fn layout(&mut self, width: f64, height: f64) -> bool {
        if !self.needs_layout(width, height) {
            return false;
        }
        let geometry = Geometry::compute(&self.config, width, height);
        self.handle = geometry.handle_rest(self.pending_grade - 1);
        self.geometry = Some(geometry);
        self.grade = self.pending_grade;
        self.relayout = false;
        self.gesture = Gesture::Idle;
        self.animation = None;
        debug!(width, height, grade = self.grade, "layout");
        true
    }

    /// Returns whether the press was accepted.
    pub fn pointer_down(&mut self, pos: Point, now: Instant) -> bool {
        let Some(geometry) = &self.geometry else {
            return false;
        };
        if !geometry.contains(pos) {
            return false;
        }
        self.sync(now);
        let reach = self.config.slider_radius + constants::HANDLE_TOUCH_SLOP;
        let on_handle = self.handle.distance(pos) < reach;
        self.gesture = Gesture::Pressed {
            origin: pos,
            at: now,
            on_handle,
        };
        trace!(?pos, on_handle, "pointer down");
        true
    }

    /// Returns whether the handle moved.
    pub fn pointer_move(&mut self, pos: Point, now: Instant) -> bool {
        match self.gesture {
            Gesture::Pressed {
                origin, on_handle, ..
            } => {
                if origin.distance(pos) <= constants::DRAG_THRESHOLD {
                    return false;
                }
                if !on_handle {
                    self.gesture = Gesture::Ignored;
                    return false;
                }
                self.sync(now);
                if self.animation.take().is_some() {
                    debug!(x = self.handle.x, "animation superseded by drag");
                }
                debug!(x = self.handle.x, "drag start");
                self.drag_to(origin.x, pos.x);
                true
            }
            Gesture::Dragging { last_x } => {
                self.drag_to(last_x, pos.x);
                true
            }
            Gesture::Idle | Gesture::Ignored => false,
        }
    }

    pub fn pointer_up(&mut self, pos: Point, now: Instant) -> Option<FontChange> {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Dragging { .. } => self.release(now),
            Gesture::Pressed { at, on_handle, .. } => {
                if now.saturating_duration_since(at) < constants::LONG_PRESS_TIMEOUT {
                    self.tap(pos.x, now);
                    None
                } else if on_handle {
                    self.release(now)
                } else {
                    None
                }
            }
            Gesture::Idle | Gesture::Ignored => None,
        }
    }

    /// The pointer went away without a release (focus lost, capture lost).
    pub fn pointer_cancel(&mut self, now: Instant) -> Option<FontChange> {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Dragging { .. } => self.release(now),
            _ => None,
        }
    }

    /// Step the snap animation to `now`. Commits once it finishes.
    pub fn advance(&mut self, now: Instant) -> Option<FontChange> {
        let anim = self.animation?;
        if anim.is_finished(now) {
            self.animation = None;
            self.handle.x = anim.target_x();
            debug!(grade = anim.target() + 1, kind = ?anim.kind(), "snap finished");
            return self.commit(anim.target() + 1);
        }
        self.handle.x = anim.sample(now);
        trace!(x = self.handle.x, "frame");
        None
    }

    fn sync(&mut self, now: Instant) {
        if let Some(anim) = &self.animation {
            self.handle.x = anim.sample(now);
        }
    }

    fn drag_to(&mut self, last_x: f64, x: f64) {
        if let Some(geometry) = &self.geometry {
            self.handle.x = geometry.clamp_x(self.handle.x + (x - last_x));
        }
        self.gesture = Gesture::Dragging { last_x: x };
    }

    fn tap(&mut self, x: f64, now: Instant) {
        self.sync(now);
        let Some(target) = self
            .geometry
            .as_ref()
            .map(|g| g.nearest_tick(g.clamp_x(x)))
        else {
            return;
        };
        debug!(x, grade = target + 1, "tap");
        self.start_animation(target, SnapKind::Tap, now);
    }

    fn release(&mut self, now: Instant) -> Option<FontChange> {
        self.sync(now);
        self.animation = None;
        let geometry = self.geometry.as_ref()?;
        let target = geometry.nearest_tick(self.handle.x);
        debug!(x = self.handle.x, grade = target + 1, "drag release");
        if target + 1 == self.grade {
            self.handle.x = geometry.tick_x(target);
            return self.commit(target + 1);
        }
        self.start_animation(target, SnapKind::Release, now);
        None
    }

    fn start_animation(&mut self, target: usize, kind: SnapKind, now: Instant) {
        let Some(geometry) = &self.geometry else {
            return;
        };
        let grades = (target + 1).abs_diff(self.grade);
        let anim = SnapAnimation::new(
            self.handle.x,
            geometry.tick_x(target),
            target,
            kind,
            now,
            snap_duration(grades),
        );
        debug!(
            from = self.handle.x,
            to = anim.target_x(),
            duration = ?anim.duration(),
            ?kind,
            "snap start"
        );
        self.animation = Some(anim);
    }

    fn commit(&mut self, grade: usize) -> Option<FontChange> {
        let previous = self.grade;
        self.grade = grade;
        self.pending_grade = grade;
        if grade == previous {
            return None;
        }
        let font_size = self.to_scale_independent(self.scale.size(grade));
        debug!(previous, grade, font_size, "grade committed");
        Some(FontChange { grade, font_size })
    }

    fn to_scale_independent(&self, px: f64) -> f64 {
        px / self.config.font_scale
    }
}
