//! The font size slider view.
//!
//! Wraps a [`FontResizeController`] in a Floem [`View`]: pointer events feed
//! the controller, Floem timers drive the snap animation, and committed grade
//! changes reach the host through a callback and a signal.

use std::time::Instant;

use floem::kurbo::{Circle, Point, Rect, Stroke};
use floem::peniko::Color;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::text::{Attrs, AttrsList, TextLayout};
use floem::views::Decorators;
use floem::{
    action::exec_after,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;
use tracing::trace;

use crate::config::FontResizeConfig;
use crate::constants;
use crate::controller::{FontChange, FontResizeController};
use crate::geometry::{measure, Measure};

enum FontResizeUpdate {
    FontSize(f64),
    SliderGrade(usize),
    /// Animation frame for the given animation generation.
    Frame(u64),
}

pub struct FontResize {
    id: ViewId,
    controller: FontResizeController,
    font_size: RwSignal<f64>,
    on_font_change: Option<Box<dyn Fn(f64)>>,
    /// Bumped whenever a new frame chain starts; older chains stop.
    generation: u64,
    labels: Option<[TextLayout; 3]>,
}

/// Control a mounted [`FontResize`] from elsewhere in the view tree.
#[derive(Clone, Copy)]
pub struct FontResizeHandle {
    id: ViewId,
    font_size: RwSignal<f64>,
}

impl FontResizeHandle {
    /// Font size of the committed grade, in scale-independent units.
    pub fn font_size(&self) -> f64 {
        self.font_size.get_untracked()
    }

    /// Tracks the committed font size, including programmatic changes once
    /// they have been laid out.
    pub fn font_size_signal(&self) -> RwSignal<f64> {
        self.font_size
    }

    /// Move the handle to the grade for `font_size` on the next layout pass.
    /// Does not invoke the change callback.
    pub fn set_font_size(&self, font_size: f64) {
        self.id.update_state(FontResizeUpdate::FontSize(font_size));
    }

    /// Move the handle to `grade` (1-based, clamped) on the next layout pass.
    /// Does not invoke the change callback.
    pub fn set_slider_grade(&self, grade: usize) {
        self.id.update_state(FontResizeUpdate::SliderGrade(grade));
    }
}

/// Creates a font size grade slider.
///
/// The handle starts on `config.standard_grade`. Register a callback with
/// [`FontResize::on_font_change`] to hear about user-driven changes.
pub fn font_resize(config: FontResizeConfig) -> FontResize {
    let controller = FontResizeController::new(config);
    let preferred_width = controller.config().preferred_width;
    let preferred_height = controller.config().preferred_height;

    FontResize {
        id: ViewId::new(),
        font_size: RwSignal::new(controller.font_size()),
        controller,
        on_font_change: None,
        generation: 0,
        labels: None,
    }
    .style(move |s| {
        let s = s
            .height(preferred_height)
            .cursor(floem::style::CursorStyle::Pointer);
        match preferred_width {
            Some(w) => s.width(w),
            None => s.width_full(),
        }
    })
}

impl FontResize {
    /// Called with the new size (scale-independent units) whenever a tap or
    /// drag commits a different grade. Replaces any previous callback.
    pub fn on_font_change(mut self, on_change: impl Fn(f64) + 'static) -> Self {
        self.on_font_change = Some(Box::new(on_change));
        self
    }

    pub fn handle(&self) -> FontResizeHandle {
        FontResizeHandle {
            id: self.id,
            font_size: self.font_size,
        }
    }

    pub fn font_size(&self) -> f64 {
        self.controller.font_size()
    }

    /// See [`FontResizeHandle::set_font_size`].
    pub fn set_font_size(&mut self, font_size: f64) {
        self.controller.set_font_size(font_size);
        self.id.request_layout();
    }

    /// See [`FontResizeHandle::set_slider_grade`].
    pub fn set_slider_grade(&mut self, grade: usize) {
        self.controller.set_slider_grade(grade);
        self.id.request_layout();
    }

    fn notify(&self, change: Option<FontChange>) {
        let Some(change) = change else {
            return;
        };
        self.font_size.set(change.font_size);
        if let Some(cb) = &self.on_font_change {
            cb(change.font_size);
        }
    }

    /// Start a fresh frame chain if the controller has an animation running.
    fn start_frames(&mut self) {
        if self.controller.is_animating() {
            self.generation += 1;
            self.schedule_frame();
        }
    }

    fn schedule_frame(&self) {
        let id = self.id;
        let generation = self.generation;
        exec_after(constants::FRAME_INTERVAL, move |_| {
            id.update_state(FontResizeUpdate::Frame(generation));
        });
    }

    fn on_frame(&mut self, generation: u64) {
        if generation != self.generation {
            trace!(generation, current = self.generation, "stale frame");
            return;
        }
        let change = self.controller.advance(Instant::now());
        self.notify(change);
        if self.controller.is_animating() {
            self.schedule_frame();
        }
        self.id.request_layout();
    }

    fn ensure_labels(&mut self) {
        if self.labels.is_some() {
            return;
        }
        let config = self.controller.config();
        let make = |text: &str, size: f64, color: Color| {
            let mut layout = TextLayout::new();
            layout.set_text(
                text,
                AttrsList::new(Attrs::new().font_size(size as f32).color(color)),
            );
            layout
        };
        self.labels = Some([
            make(&config.left_text, config.min_size, config.left_text_color),
            make(
                &config.middle_text,
                config.standard_size(),
                config.middle_text_color,
            ),
            make(&config.right_text, config.max_size, config.right_text_color),
        ]);
    }
}

impl View for FontResize {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<FontResizeUpdate>() {
            match *update {
                FontResizeUpdate::FontSize(size) => self.controller.set_font_size(size),
                FontResizeUpdate::SliderGrade(grade) => self.controller.set_slider_grade(grade),
                FontResizeUpdate::Frame(generation) => return self.on_frame(generation),
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let now = Instant::now();
        match event {
            Event::PointerDown(e) => {
                if !self.controller.pointer_down(e.pos, now) {
                    return EventPropagation::Continue;
                }
                cx.update_active(self.id());
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.controller.pointer_move(e.pos, now) {
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                let change = self.controller.pointer_up(e.pos, now);
                self.notify(change);
                self.start_frames();
                self.id.request_layout();
                EventPropagation::Continue
            }
            Event::FocusLost => {
                let change = self.controller.pointer_cancel(now);
                self.notify(change);
                self.start_frames();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        let config = self.controller.config();
        let width_spec = match config.preferred_width {
            Some(_) => Measure::AtMost(layout.size.width as f64),
            None => Measure::Exactly(layout.size.width as f64),
        };
        let width = measure(
            width_spec,
            config.preferred_width.unwrap_or(layout.size.width as f64),
        );
        let height = measure(
            Measure::AtMost(layout.size.height as f64),
            config.preferred_height,
        );
        if self.controller.layout(width, height) {
            let size = self.controller.font_size();
            if self.font_size.get_untracked() != size {
                self.font_size.set(size);
            }
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        self.ensure_labels();
        let Some(geometry) = self.controller.geometry() else {
            return;
        };
        if geometry.width() == 0.0 || geometry.height() == 0.0 {
            return;
        }
        let config = self.controller.config();

        let line_stroke = Stroke::new(config.line_stroke_width);
        cx.stroke(&geometry.baseline(), config.line_color, &line_stroke);
        for tick in geometry.ticks() {
            cx.stroke(tick, config.line_color, &line_stroke);
        }

        // Anchors are text baselines; center each label on its anchor.
        if let Some(labels) = &self.labels {
            let anchors = geometry.labels();
            for (layout, anchor) in labels
                .iter()
                .zip([anchors.left, anchors.middle, anchors.right])
            {
                let size = layout.size();
                cx.draw_text(
                    layout,
                    Point::new(anchor.x - size.width / 2.0, anchor.y - size.height),
                );
            }
        }

        let handle = self.controller.handle();
        let radius = config.slider_radius;
        let (dx, dy) = constants::SHADOW_OFFSET;
        cx.fill(
            &Circle::new((handle.x + dx, handle.y + dy), radius),
            config.slider_shadow_color,
            constants::SHADOW_BLUR,
        );
        cx.fill(&Circle::new(handle, radius), config.slider_color, 0.0);
    }
}
