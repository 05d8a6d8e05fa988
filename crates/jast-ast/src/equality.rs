//! Structural equality across arenas.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::SlotRef;

/// Whether the subtree at `a` in `a_arena` and the subtree at `b` in
/// `b_arena` have the same kinds, scalars and shape. Parents, source ranges
/// and user data are ignored. Two absent nodes are equal.
pub fn structurally_equal(a_arena: &NodeArena, a: NodeIndex, b_arena: &NodeArena, b: NodeIndex) -> bool {
    let mut pending = vec![(a, b)];
    while let Some((a, b)) = pending.pop() {
        if a.is_none() || b.is_none() {
            if a.is_none() != b.is_none() {
                return false;
            }
            continue;
        }
        let (Some(left), Some(right)) = (a_arena.get(a), b_arena.get(b)) else {
            return false;
        };
        let kind = left.kind();
        if kind != right.kind() {
            return false;
        }
        let scalars_match = kind
            .scalars()
            .iter()
            .all(|&tag| left.data().scalar(tag) == right.data().scalar(tag));
        if !scalars_match {
            return false;
        }
        for ((_, l), (_, r)) in left.data().slots().into_iter().zip(right.data().slots()) {
            match (l, r) {
                (SlotRef::Single(l), SlotRef::Single(r)) => pending.push((l, r)),
                (SlotRef::List(l), SlotRef::List(r)) => {
                    if l.len() != r.len() {
                        return false;
                    }
                    pending.extend(l.iter().zip(r.iter()));
                }
                _ => return false,
            }
        }
    }
    true
}

impl NodeArena {
    /// `structurally_equal` for two nodes of this arena.
    pub fn subtrees_equal(&self, a: NodeIndex, b: NodeIndex) -> bool {
        structurally_equal(self, a, self, b)
    }
}
