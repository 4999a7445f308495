use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    pub entity_a: Entity,
    pub entity_b: Entity,
}

impl CollisionPair {
    pub fn involves(&self, entity: Entity) -> bool {
        self.entity_a == entity || self.entity_b == entity
    }

    pub fn other(&self, entity: Entity) -> Option<Entity> {
        if self.entity_a == entity {
            Some(self.entity_b)
        } else if self.entity_b == entity {
            Some(self.entity_a)
        } else {
            None
        }
    }
}

/// Overlapping pairs found by the most recent collision pass.
#[derive(Default, Resource, Debug)]
pub struct CollisionFrame {
    pub pairs: Vec<CollisionPair>,
    pub tests_run: usize,
}

impl CollisionFrame {
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.tests_run = 0;
    }

    pub fn add_pair(&mut self, pair: CollisionPair) {
        self.pairs.push(pair);
    }

    pub fn is_colliding(&self, entity: Entity) -> bool {
        self.pairs.iter().any(|pair| pair.involves(entity))
    }

    pub fn are_in_contact(&self, entity_a: Entity, entity_b: Entity) -> bool {
        self.pairs.iter().any(|pair| {
            (pair.entity_a == entity_a && pair.entity_b == entity_b)
                || (pair.entity_a == entity_b && pair.entity_b == entity_a)
        })
    }
}
