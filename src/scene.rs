use log::info;

use crate::config::SkyMapConfig;
use crate::context::SceneContext;
use crate::layers::{
    BackgroundLayer, CardinalsLayer, EmptyLayer, HorizonLayer, HudLayer, Layer, ObjectsLayer,
    RingsLayer, ZenithLayer,
};
use crate::surface::Surface;
use crate::types::CelestialObject;
use crate::viewport::ViewportState;

/// The object list currently on display plus the config it is drawn with.
///
/// `objects` is the one ordered sequence both the renderer and the hit tester
/// walk; it is only replaced wholesale by [`SkyScene::set_objects`].
pub struct SkyScene {
    pub cfg: SkyMapConfig,
    objects: Vec<CelestialObject>,
}

impl SkyScene {
    pub fn new(objects: Vec<CelestialObject>, cfg: SkyMapConfig) -> Self {
        let mut scene = Self {
            cfg,
            objects: Vec::new(),
        };
        scene.set_objects(objects);
        scene
    }

    /// Replace the displayed objects. Objects known to be below the horizon are
    /// dropped unless the config asks to keep them.
    pub fn set_objects(&mut self, objects: Vec<CelestialObject>) {
        let total = objects.len();
        self.objects = if self.cfg.include_below_horizon {
            objects
        } else {
            objects
                .into_iter()
                .filter(|o| !o.altitude.is_some_and(|alt| alt < 0.0))
                .collect()
        };
        let dropped = total - self.objects.len();
        if dropped > 0 {
            info!("dropped {dropped} of {total} objects below the horizon");
        }
    }

    pub fn objects(&self) -> &[CelestialObject] {
        &self.objects
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Paint one complete frame. Every call clears and redraws everything.
    pub fn render(&self, viewport: &ViewportState, surface: &mut dyn Surface) {
        if self.is_empty() {
            self.render_empty(surface);
            return;
        }
        let context = SceneContext::new(&self.objects, &self.cfg, viewport);

        // Layer stack, back to front
        let panned_layers: Vec<Box<dyn Layer>> = vec![
            Box::new(RingsLayer::new()),
            Box::new(HorizonLayer::new()),
            Box::new(CardinalsLayer::new()),
            Box::new(ZenithLayer::new()),
            Box::new(ObjectsLayer::new()),
        ];
        let fixed_layers: Vec<Box<dyn Layer>> = vec![Box::new(HudLayer::new())];

        BackgroundLayer::new().render(&context, surface);

        surface.push_offset(context.pan.x, context.pan.y);
        for layer in panned_layers {
            layer.render(&context, surface);
        }
        surface.pop_offset();

        for layer in fixed_layers {
            layer.render(&context, surface);
        }
    }

    fn render_empty(&self, surface: &mut dyn Surface) {
        // Drawn at the initial view regardless of the live viewport
        let viewport = ViewportState::new();
        let context = SceneContext::new(&self.objects, &self.cfg, &viewport);
        BackgroundLayer::new().render(&context, surface);
        EmptyLayer::new().render(&context, surface);
    }
}
