//! Generation-checked world handles and the registry that resolves them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use kinema_sim::World;

use crate::BridgeError;

/// Opaque handle to a world owned by a [`WorldRegistry`].
///
/// The generation distinguishes a live world from an earlier one that
/// occupied the same slot, so a handle kept past `destroy_world` can never
/// silently alias a newer world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldHandle {
    pub index: u32,
    pub generation: u32,
}

impl WorldHandle {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for WorldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}g{}", self.index, self.generation)
    }
}

/// Owns every live [`World`] and resolves handles to them.
///
/// A destroyed slot's generation is bumped and its index recycled for the
/// next `create_world`, so slot storage stays compact while stale handles
/// stay invalid forever.
pub struct WorldRegistry {
    generations: Vec<u32>,
    free_indices: Vec<u32>,
    worlds: Vec<Option<World>>,
}

impl WorldRegistry {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_indices: Vec::new(),
            worlds: Vec::new(),
        }
    }

    /// Create a world and hand back its handle.
    pub fn create_world(&mut self) -> WorldHandle {
        let handle = if let Some(index) = self.free_indices.pop() {
            let generation = self.generations[index as usize];
            self.worlds[index as usize] = Some(World::new());
            WorldHandle::new(index, generation)
        } else {
            let index = self.worlds.len() as u32;
            self.generations.push(0);
            self.worlds.push(Some(World::new()));
            WorldHandle::new(index, 0)
        };
        debug!(%handle, "world created");
        handle
    }

    /// Destroy the world behind `handle`. One-way: the handle (and every
    /// body id issued through it) is invalid from here on.
    pub fn destroy_world(&mut self, handle: WorldHandle) -> Result<(), BridgeError> {
        if !self.is_alive(handle) {
            warn!(%handle, "destroy of dead world handle");
            return Err(BridgeError::UseAfterDestroy { handle });
        }
        let index = handle.index as usize;
        self.worlds[index] = None;
        self.generations[index] += 1;
        self.free_indices.push(handle.index);
        debug!(%handle, "world destroyed");
        Ok(())
    }

    pub fn is_alive(&self, handle: WorldHandle) -> bool {
        let index = handle.index as usize;
        index < self.worlds.len()
            && self.generations[index] == handle.generation
            && self.worlds[index].is_some()
    }

    pub fn world(&self, handle: WorldHandle) -> Result<&World, BridgeError> {
        if !self.is_alive(handle) {
            return Err(BridgeError::UseAfterDestroy { handle });
        }
        match &self.worlds[handle.index as usize] {
            Some(world) => Ok(world),
            None => Err(BridgeError::UseAfterDestroy { handle }),
        }
    }

    pub fn world_mut(&mut self, handle: WorldHandle) -> Result<&mut World, BridgeError> {
        if !self.is_alive(handle) {
            warn!(%handle, "operation on dead world handle");
            return Err(BridgeError::UseAfterDestroy { handle });
        }
        match &mut self.worlds[handle.index as usize] {
            Some(world) => Ok(world),
            None => Err(BridgeError::UseAfterDestroy { handle }),
        }
    }

    /// Number of live worlds.
    pub fn world_count(&self) -> usize {
        self.worlds.iter().filter(|w| w.is_some()).count()
    }
}

impl Default for WorldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
