/// Scene direction — owns the chapter registry and enforces the lifecycle.
///
/// Exactly one chapter is ever active. Transitions run strictly
/// deactivate → unload → load → activate, and every error stays inside the
/// tick loop: an unknown target is reported and ignored, never fatal.
use log::error;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::chapter::Chapter;
use crate::core::input::InputSnapshot;
use crate::core::stage::Renderer;
use crate::core::store::ProgressStore;
use crate::schema::chapter::SceneId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectorError {
    #[error("no chapter registered for {0}")]
    UnknownChapter(SceneId),
}

/// Top-level controller: registry, active chapter, and the progress store
/// every chapter mutates through it.
pub struct NarrativeDirector {
    registry: FxHashMap<SceneId, Box<dyn Chapter>>,
    current: Option<SceneId>,
    store: ProgressStore,
}

impl NarrativeDirector {
    pub fn new(store: ProgressStore) -> Self {
        Self {
            registry: FxHashMap::default(),
            current: None,
            store,
        }
    }

    /// Add a chapter under its own id. Replaces any previous registration.
    pub fn register(&mut self, chapter: Box<dyn Chapter>) {
        self.registry.insert(chapter.id(), chapter);
    }

    pub fn current_scene(&self) -> Option<SceneId> {
        self.current
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProgressStore {
        &mut self.store
    }

    /// Tear down the active chapter and bring up `target`. An unregistered
    /// target leaves the current chapter untouched.
    pub fn switch_to(
        &mut self,
        target: SceneId,
        renderer: &mut dyn Renderer,
    ) -> Result<(), DirectorError> {
        if !self.registry.contains_key(&target) {
            error!("cannot switch to unregistered scene {target}");
            return Err(DirectorError::UnknownChapter(target));
        }
        if let Some(active) = self.current.take() {
            if let Some(chapter) = self.registry.get_mut(&active) {
                chapter.deactivate();
                chapter.unload(renderer);
            }
        }
        if let Some(chapter) = self.registry.get_mut(&target) {
            chapter.load(renderer);
            chapter.activate(&self.store);
        }
        self.current = Some(target);
        Ok(())
    }

    /// One tick: forward to the active chapter only, then perform whatever
    /// transition it requested. Transition failures are logged and the
    /// loop keeps going.
    pub fn update(&mut self, dt: f32, input: InputSnapshot, renderer: &mut dyn Renderer) {
        let Some(active) = self.current else {
            return;
        };
        let requested = match self.registry.get_mut(&active) {
            Some(chapter) => chapter.update(dt, input, &mut self.store),
            None => None,
        };
        if let Some(target) = requested {
            if let Err(err) = self.switch_to(target, renderer) {
                error!("chapter transition failed: {err}");
            }
        }
    }

    /// Render the active chapter only.
    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        if let Some(active) = self.current {
            if let Some(chapter) = self.registry.get_mut(&active) {
                chapter.render(renderer);
            }
        }
    }

    /// Forward a viewport change to the renderer and the active chapter.
    pub fn on_resize(&mut self, width: u32, height: u32, renderer: &mut dyn Renderer) {
        renderer.resize(width, height);
        if let Some(active) = self.current {
            if let Some(chapter) = self.registry.get_mut(&active) {
                chapter.on_resize(width, height);
            }
        }
    }
}
