//! Generational storage for the engine's bodies.
//!
//! Bodies live in slots addressed by [`BodyHandle`]. Removing a body bumps
//! its slot's generation, so handles to the removed body stop resolving even
//! after the slot is reused. Freed slots are reused most-recently-freed
//! first, and iteration always walks slots in ascending index order.

use crate::body::RigidBody;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl BodyHandle {
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    body: Option<RigidBody>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct BodySet {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl BodySet {
    pub(crate) fn insert(&mut self, body: RigidBody) -> BodyHandle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            return BodyHandle {
                index,
                generation: slot.generation,
            };
        }
        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 0,
            body: Some(body),
        });
        BodyHandle {
            index,
            generation: 0,
        }
    }

    pub(crate) fn remove(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        let slot = self.slots.get_mut(handle.index())?;
        if slot.generation != handle.generation {
            return None;
        }
        let body = slot.body.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        Some(body)
    }

    pub(crate) fn get(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.slots
            .get(handle.index())
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_ref())
    }

    pub(crate) fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_mut())
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.body.as_ref().map(|body| (handle_at(i, slot.generation), body))
        })
    }

    pub(crate) fn bodies_mut(&mut self) -> impl Iterator<Item = &mut RigidBody> + '_ {
        self.slots.iter_mut().filter_map(|slot| slot.body.as_mut())
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn par_bodies_mut(
        &mut self,
    ) -> impl rayon::iter::ParallelIterator<Item = &mut RigidBody> + '_ {
        use rayon::prelude::*;
        self.slots.par_iter_mut().filter_map(|slot| slot.body.as_mut())
    }

    /// Handles of all live bodies in slot order.
    pub(crate) fn handles(&self) -> Vec<BodyHandle> {
        self.iter().map(|(handle, _)| handle).collect()
    }

    /// Mutable access to two distinct live bodies, `first.index() < second.index()`.
    pub(crate) fn pair_mut(
        &mut self,
        first: BodyHandle,
        second: BodyHandle,
    ) -> Option<(&mut RigidBody, &mut RigidBody)> {
        if first.index() >= second.index() {
            return None;
        }
        let (head, tail) = self.slots.split_at_mut(second.index());
        let a = head.get_mut(first.index())?;
        let b = tail.first_mut()?;
        if a.generation != first.generation || b.generation != second.generation {
            return None;
        }
        Some((a.body.as_mut()?, b.body.as_mut()?))
    }
}

fn handle_at(index: usize, generation: u32) -> BodyHandle {
    BodyHandle {
        index: u32::try_from(index).unwrap_or(u32::MAX),
        generation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    fn body(code: i32) -> RigidBody {
        RigidBody::sphere(code, 1.0, Vec3::ZERO, Vec3::ZERO, 1.0).unwrap()
    }

    #[test]
    fn removed_handle_goes_stale_after_reuse() {
        let mut set = BodySet::default();
        let first = set.insert(body(1));
        let second = set.insert(body(2));
        assert_eq!(set.remove(first).map(|b| b.code()), Some(1));
        assert!(set.get(first).is_none());

        let third = set.insert(body(3));
        assert_eq!(third.index(), first.index());
        assert_ne!(third, first);
        assert!(set.get(first).is_none());
        assert_eq!(set.get(third).map(RigidBody::code), Some(3));
        assert_eq!(set.get(second).map(RigidBody::code), Some(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn iteration_follows_slot_order() {
        let mut set = BodySet::default();
        let handles: Vec<_> = (0..4).map(|c| set.insert(body(c))).collect();
        set.remove(handles[1]);
        let codes: Vec<_> = set.iter().map(|(_, b)| b.code()).collect();
        assert_eq!(codes, vec![0, 2, 3]);
    }

    #[test]
    fn pair_mut_requires_ascending_live_handles() {
        let mut set = BodySet::default();
        let a = set.insert(body(1));
        let b = set.insert(body(2));
        assert!(set.pair_mut(b, a).is_none());
        assert!(set.pair_mut(a, a).is_none());
        let (x, y) = set.pair_mut(a, b).unwrap();
        assert_eq!((x.code(), y.code()), (1, 2));
        set.remove(b);
        assert!(set.pair_mut(a, b).is_none());
    }
}
