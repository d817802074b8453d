//------------------------------------------------------------------------------
// fill_mark.rs
//------------------------------------------------------------------------------
// Marks every face of the planar triangulation with its nesting depth;
// a face is filled iff its depth is odd
//------------------------------------------------------------------------------

use std::collections::VecDeque;

use crate::tracing::debug;

use super::planar::*;

pub(crate) struct FillMark {
    depth: Vec<Option<u32>>
}

impl FillMark {
    // Breadth-first from the outer face at depth zero. Unconstrained
    // edges spread the current depth; constrained edges are deferred
    // and later seed the far side one level deeper
    pub fn mark(planar: &Planar) -> FillMark {
        let mut mark = FillMark { depth: vec![None; planar.face_count()] };

        let mut border = VecDeque::new();
        mark.flood(planar, planar.outer_face(), 0, &mut border);

        while let Some(edge) = border.pop_front() {
            let neighbor = planar.neighbor(edge);
            if mark.depth[neighbor.index()].is_none() {
                let depth = mark.depth[planar.edge_owner(edge).index()]
                    .expect("border edges come out of flooded faces");
                mark.flood(planar, neighbor, depth + 1, &mut border);
            }
        }

        debug!("marked {} faces", mark.depth.len());
        mark
    }

    fn flood(&mut self, planar: &Planar, seed: FaceKey, depth: u32,
        border: &mut VecDeque<EdgeKey>)
    {
        let mut queue = VecDeque::new();
        queue.push_back(seed);

        while let Some(face) = queue.pop_front() {
            if self.depth[face.index()].is_some() { continue; }
            self.depth[face.index()] = Some(depth);

            for edge in planar.face_edges(face) {
                let neighbor = planar.neighbor(edge);
                if self.depth[neighbor.index()].is_some() { continue; }
                if planar.is_constrained(edge) { border.push_back(edge); }
                else { queue.push_back(neighbor); }
            }
        }
    }

    pub fn depth(&self, f: FaceKey) -> Option<u32> {
        self.depth[f.index()]
    }

    pub fn inside(&self, f: FaceKey) -> bool {
        matches!(self.depth(f), Some(depth) if depth % 2 == 1)
    }
}
