use crate::error::Error;

use super::{Depth, Node, SortKey};

/// Stable identifier for an object in the scene arena.
///
/// Generational: a slot freed by `deregister` bumps its generation, so
/// handles held past `discard` are detected instead of resurrecting a
/// different object.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Registry entry. Depth and presentation handle are *not* cached here;
/// they are read through the arena whenever an order is needed, so an entry
/// can never drift from its object.
#[derive(Debug, Copy, Clone)]
struct Entry {
    seq: u64,
    id: NodeId,
}

/// The window's collection of live objects: an arena of nodes plus the
/// depth-ordered registry over them.
///
/// Performance characteristics:
/// - `insert()` is O(1)
/// - `paint_order()` sorts the registry; equal depths keep registration order
#[derive(Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the arena and registers it. O(1).
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(node);
                NodeId { index, generation: slot.generation }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, node: Some(node) });
                NodeId { index, generation: 0 }
            }
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { seq, id });
        id
    }

    /// Removes the node's registry entry and frees its slot, returning the
    /// node so the caller can dematerialize its primitive.
    pub fn deregister(&mut self, id: NodeId) -> Result<Node, Error> {
        // Validate before mutating anything.
        self.node(id)?;

        self.entries.retain(|e| e.id != id);
        let slot = &mut self.slots[id.index as usize];
        let node = slot.node.take().ok_or_else(|| {
            Error::defect(format!("slot {} lost its node during deregister", id.index))
        })?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Ok(node)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, Error> {
        let slot = self
            .slots
            .get(id.index as usize)
            .ok_or_else(|| Error::defect(format!("node index {} out of bounds", id.index)))?;
        if slot.generation != id.generation {
            return Err(Error::invalid("object", "object no longer exists (it was discarded)"));
        }
        slot.node
            .as_ref()
            .ok_or_else(|| Error::defect(format!("slot {} is registered but empty", id.index)))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, Error> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .ok_or_else(|| Error::defect(format!("node index {} out of bounds", id.index)))?;
        if slot.generation != id.generation {
            return Err(Error::invalid("object", "object no longer exists (it was discarded)"));
        }
        slot.node
            .as_mut()
            .ok_or_else(|| Error::defect(format!("slot {} is registered but empty", id.index)))
    }

    /// Registry entries in paint order (back-to-front), optionally limited
    /// to depths at or above `from`.
    ///
    /// Every entry must resolve through the arena; one that cannot is an
    /// internal defect, not caller misuse.
    pub fn paint_order(&mut self, from: Option<Depth>) -> Result<Vec<NodeId>, Error> {
        for entry in &self.entries {
            let slot = self
                .slots
                .get(entry.id.index as usize)
                .filter(|s| s.generation == entry.id.generation)
                .ok_or_else(|| {
                    Error::defect(format!(
                        "registry entry seq {} refers to a missing object",
                        entry.seq
                    ))
                })?;
            if slot.node.is_none() {
                return Err(Error::defect(format!(
                    "registry entry seq {} refers to an empty slot",
                    entry.seq
                )));
            }
        }

        let slots = &self.slots;
        let key = |e: &Entry| {
            let depth = slots[e.id.index as usize]
                .node
                .as_ref()
                .map(|n| n.depth)
                .unwrap_or_default();
            SortKey::new(depth, e.seq)
        };
        self.entries.sort_by(|a, b| key(a).cmp(&key(b)));

        let order = self
            .entries
            .iter()
            .filter(|e| match from {
                Some(depth) => key(*e).depth >= depth,
                None => true,
            })
            .map(|e| e.id)
            .collect();
        Ok(order)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::scene::{NodeKind, ShapeData, ShapeVariant};
    use crate::surface::ShapeStyle;

    fn shape_node(depth: i32) -> Node {
        let mut node = Node::new(
            NodeKind::Shape(ShapeData {
                variant: ShapeVariant::Polygon,
                points: vec![Point::zero(), Point::new(10, 0), Point::new(5, 5)],
                style: ShapeStyle::default(),
            }),
            Point::zero(),
            None,
        );
        node.depth = Depth::new(depth);
        node
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn equal_depths_keep_registration_order() {
        let mut scene = Scene::new();
        let a = scene.insert(shape_node(10));
        let c = scene.insert(shape_node(10));
        let b = scene.insert(shape_node(20));

        assert_eq!(scene.paint_order(None).unwrap(), vec![a, c, b]);
    }

    #[test]
    fn depth_change_reorders_without_disturbing_equal_depth_peers() {
        let mut scene = Scene::new();
        let a = scene.insert(shape_node(10));
        let c = scene.insert(shape_node(10));
        let b = scene.insert(shape_node(20));

        scene.node_mut(b).unwrap().depth = Depth::new(5);
        assert_eq!(scene.paint_order(None).unwrap(), vec![b, a, c]);

        // Order is read through the arena; repeated sorts stay stable.
        assert_eq!(scene.paint_order(None).unwrap(), vec![b, a, c]);
    }

    #[test]
    fn from_depth_filters_lower_entries() {
        let mut scene = Scene::new();
        let _a = scene.insert(shape_node(10));
        let c = scene.insert(shape_node(30));
        let b = scene.insert(shape_node(20));

        assert_eq!(
            scene.paint_order(Some(Depth::new(20))).unwrap(),
            vec![b, c]
        );
    }

    // ── arena lifecycle ───────────────────────────────────────────────────

    #[test]
    fn deregister_frees_the_entry_and_detects_stale_handles() {
        let mut scene = Scene::new();
        let a = scene.insert(shape_node(10));
        assert_eq!(scene.len(), 1);

        scene.deregister(a).unwrap();
        assert_eq!(scene.len(), 0);
        assert!(matches!(
            scene.node(a),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn slot_reuse_bumps_the_generation() {
        let mut scene = Scene::new();
        let a = scene.insert(shape_node(10));
        scene.deregister(a).unwrap();

        let b = scene.insert(shape_node(10));
        assert_ne!(a, b);
        assert!(scene.node(a).is_err());
        assert!(scene.node(b).is_ok());
    }
}
