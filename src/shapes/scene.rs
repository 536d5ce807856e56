//! Scene - the set of drawables on screen
//!
//! Every entry gets a stable `DrawableId` when it's added. Animations never
//! hold the drawable itself, only its id: on each frame they build a fresh
//! drawable and swap it in with `become_drawable`, which keeps the entry's
//! id, name and draw order and replaces only its payload.

use super::drawable::Drawable;

/// Stable handle to a scene entry
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DrawableId(u64);

/// A drawable entry in the scene with its configuration
pub struct SceneEntry {
    id: DrawableId,
    name: String,
    drawable: Drawable,
    enabled: bool,
}

impl SceneEntry {
    pub fn id(&self) -> DrawableId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn drawable(&self) -> &Drawable {
        &self.drawable
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// An ordered collection of drawables; later entries draw on top
#[derive(Default)]
pub struct Scene {
    entries: Vec<SceneEntry>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawable on top of everything else
    pub fn add(&mut self, name: impl Into<String>, drawable: Drawable) -> DrawableId {
        let id = DrawableId(self.next_id);
        self.next_id += 1;
        self.entries.push(SceneEntry {
            id,
            name: name.into(),
            drawable,
            enabled: true,
        });
        id
    }

    /// Replace the payload behind `id`, keeping its identity
    ///
    /// Returns false if no entry has that id.
    pub fn become_drawable(&mut self, id: DrawableId, drawable: Drawable) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.drawable = drawable;
                true
            }
            None => false,
        }
    }

    /// Remove an entry, returning its drawable
    pub fn remove(&mut self, id: DrawableId) -> Option<Drawable> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).drawable)
    }

    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.drawable)
    }

    pub fn set_enabled(&mut self, id: DrawableId, enabled: bool) {
        if let Some(entry) = self.entry_mut(id) {
            entry.enabled = enabled;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in draw order
    pub fn iter(&self) -> impl Iterator<Item = &SceneEntry> {
        self.entries.iter()
    }

    /// Enabled drawables in draw order
    pub fn visible(&self) -> impl Iterator<Item = &Drawable> {
        self.entries
            .iter()
            .filter(|e| e.enabled)
            .map(|e| &e.drawable)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn entry_mut(&mut self, id: DrawableId) -> Option<&mut SceneEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RED, WHITE};
    use crate::shapes::{Circle, Line};

    fn circle(radius: f32) -> Drawable {
        Drawable::circle(Circle::new(radius), RED)
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.visible().count(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut scene = Scene::new();
        let a = scene.add("a", circle(1.0));
        let b = scene.add("b", circle(2.0));
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_become_keeps_identity_and_order() {
        let mut scene = Scene::new();
        let first = scene.add("circle", circle(1.0));
        let second = scene.add("axis", Drawable::line(Line::horizontal(0.0, -1.0, 1.0), WHITE));

        assert!(scene.become_drawable(first, circle(0.5)));

        let ids: Vec<_> = scene.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(scene.iter().next().map(|e| e.name()), Some("circle"));
        assert_eq!(scene.get(first), Some(&circle(0.5)));
    }

    #[test]
    fn test_become_unknown_id() {
        let mut scene = Scene::new();
        let id = scene.add("circle", circle(1.0));
        scene.remove(id);
        assert!(!scene.become_drawable(id, circle(2.0)));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_disabled_entries_are_hidden() {
        let mut scene = Scene::new();
        let a = scene.add("a", circle(1.0));
        scene.add("b", circle(2.0));
        scene.set_enabled(a, false);
        assert_eq!(scene.visible().count(), 1);
        assert_eq!(scene.visible().next(), Some(&circle(2.0)));
    }
}
