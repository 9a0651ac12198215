//! Entity - identifiers handed out from a fixed slot table
//!
//! A slot is free while its component mask is empty; allocation is a linear
//! scan for the first free slot.

use log::error;

/// Entity identifier: an index into the world's slot table
pub type EntityId = u32;

/// Bitmask of components attached to an entity
pub type ComponentMask = u32;

/// No components; the slot is free
pub const COMPONENT_NONE: ComponentMask = 0;
/// Entity has a transform
pub const COMPONENT_TRANSFORM: ComponentMask = 1 << 0;
/// Entity is rendered
pub const COMPONENT_RENDER: ComponentMask = 1 << 1;

/// Maximum number of simultaneously alive entities
pub const MAX_ENTITIES: usize = 1024;

/// Entity bookkeeping over a fixed-size slot table
pub struct EntityWorld {
    components: [ComponentMask; MAX_ENTITIES],
}

impl EntityWorld {
    /// Create a world with every slot free
    pub fn new() -> Self {
        Self {
            components: [COMPONENT_NONE; MAX_ENTITIES],
        }
    }

    /// Find the first free entity slot
    ///
    /// The slot stays free until components are attached. Returns
    /// `MAX_ENTITIES` as a sentinel when the table is exhausted.
    pub fn create(&mut self) -> EntityId {
        for id in 0..MAX_ENTITIES {
            if self.components[id] == COMPONENT_NONE {
                return id as EntityId;
            }
        }

        error!("no more entities available");
        MAX_ENTITIES as EntityId
    }

    /// Attach components to an entity
    pub fn attach(&mut self, id: EntityId, mask: ComponentMask) {
        self.components[id as usize] |= mask;
    }

    /// Remove components from an entity
    pub fn detach(&mut self, id: EntityId, mask: ComponentMask) {
        self.components[id as usize] &= !mask;
    }

    /// Get the component mask of an entity
    #[inline]
    pub fn component_mask(&self, id: EntityId) -> ComponentMask {
        self.components[id as usize]
    }

    /// Check whether an entity has any components attached
    #[inline]
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.components[id as usize] != COMPONENT_NONE
    }

    /// Free an entity's slot
    pub fn destroy(&mut self, id: EntityId) {
        self.components[id as usize] = COMPONENT_NONE;
    }
}

impl Default for EntityWorld {
    fn default() -> Self {
        Self::new()
    }
}
