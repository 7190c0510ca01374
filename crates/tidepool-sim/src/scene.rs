//! Scene container shared by the actor and the flora field.
//!
//! A thin wrapper over the hecs world. Components only add and remove
//! their own entities; the renderer reads the rest through snapshots.

use hecs::{DynamicBundle, Entity, World};

#[derive(Default)]
pub struct Scene {
    world: World,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the scene.
    pub fn add(&mut self, components: impl DynamicBundle) -> Entity {
        self.world.spawn(components)
    }

    /// Remove a node. Returns `false` if it was already gone.
    pub fn remove(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> u32 {
        self.world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
