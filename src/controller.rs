use std::time::Instant;

use log::debug;

use crate::hit::locate;
use crate::scene::SkyScene;
use crate::surface::Surface;
use crate::tooltip::{PageGeometry, TooltipPresenter};
use crate::types::{CelestialObject, Point};
use crate::viewport::ViewportState;

/// Pointer input, with positions in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Wheel { delta_y: f64 },
    Down(Point),
    Move(Point),
    Up,
    Leave,
    DoubleClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

/// Follow-up work for the host after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RenderNeeded,
    SetCursor(Cursor),
}

/// Owns the scene, the viewport, the hover state and the tooltip, and is the
/// only thing that mutates them.
pub struct InteractionController {
    scene: SkyScene,
    viewport: ViewportState,
    hovered: Option<usize>,
    tooltip: TooltipPresenter,
}

impl InteractionController {
    pub fn new(scene: SkyScene, page: PageGeometry) -> Self {
        let tooltip = TooltipPresenter::new(&scene.cfg, page);
        Self {
            scene,
            viewport: ViewportState::new(),
            hovered: None,
            tooltip,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.viewport.is_dragging() {
            Mode::Dragging
        } else {
            Mode::Idle
        }
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn scene(&self) -> &SkyScene {
        &self.scene
    }

    pub fn hovered(&self) -> Option<&CelestialObject> {
        self.hovered.and_then(|i| self.scene.objects().get(i))
    }

    pub fn tooltip(&self) -> &TooltipPresenter {
        &self.tooltip
    }

    /// New data arrived: replace the objects and paint once.
    pub fn set_objects(&mut self, objects: Vec<CelestialObject>, now: Instant) -> Vec<Action> {
        self.scene.set_objects(objects);
        // Indices into the old list mean nothing now
        if self.hovered.take().is_some() {
            self.tooltip.hide(now);
        }
        vec![Action::RenderNeeded]
    }

    pub fn handle(&mut self, event: PointerEvent, now: Instant) -> Vec<Action> {
        let mut actions = Vec::new();
        let cfg = &self.scene.cfg;

        match event {
            PointerEvent::Wheel { delta_y } => {
                let step = cfg.zoom.step;
                let delta = if delta_y > 0.0 { -step } else { step };
                self.viewport.zoom_by(delta, cfg);
                self.request_render(&mut actions);
            }
            PointerEvent::Down(p) => {
                self.viewport.begin_drag(p);
                actions.push(Action::SetCursor(Cursor::Grabbing));
            }
            PointerEvent::Move(p) => match self.mode() {
                Mode::Dragging => {
                    self.viewport.update_drag(p, cfg);
                    self.request_render(&mut actions);
                }
                Mode::Idle => self.hover(p, now),
            },
            PointerEvent::Up => {
                self.viewport.end_drag();
                actions.push(Action::SetCursor(Cursor::Grab));
            }
            PointerEvent::Leave => {
                self.viewport.end_drag();
                actions.push(Action::SetCursor(Cursor::Grab));
                self.hovered = None;
                self.tooltip.hide(now);
            }
            PointerEvent::DoubleClick => {
                self.viewport.reset();
                self.request_render(&mut actions);
            }
        }
        actions
    }

    /// Let the tooltip run its delayed cleanup.
    pub fn tick(&mut self, now: Instant) {
        self.tooltip.tick(now);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.scene.render(&self.viewport, surface);
    }

    // The empty frame does not react to viewport changes.
    fn request_render(&self, actions: &mut Vec<Action>) {
        if !self.scene.is_empty() {
            actions.push(Action::RenderNeeded);
        }
    }

    fn hover(&mut self, p: Point, now: Instant) {
        let hit = locate(p, &self.viewport, &self.scene.cfg, self.scene.objects());
        if hit == self.hovered {
            return;
        }
        self.hovered = hit;
        match hit.and_then(|i| self.scene.objects().get(i)) {
            Some(o) => {
                debug!("hover -> {:?}", o.name);
                self.tooltip.show(o, p);
            }
            None => {
                debug!("hover cleared");
                self.tooltip.hide(now);
            }
        }
    }
}
