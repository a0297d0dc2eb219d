//! Cycle-tolerant import ordering
//!
//! Depth-first post-order over the dependency edges, started from each unit
//! in user order. A unit is marked completed when it is ENTERED, so a path
//! that cycles back to a unit still on the stack stops there instead of
//! recursing. The entry unit of a cycle is therefore emitted after the
//! members reached from it.

use tracing::trace;

use super::edges::DependencyEdges;

/// Compute the import order as user-order positions
///
/// Always returns each position in `0..unit_count` exactly once.
pub fn import_order(edges: &DependencyEdges, unit_count: usize) -> Vec<usize> {
    let mut completed = vec![false; unit_count];
    let mut order = Vec::with_capacity(unit_count);
    let mut stack = Vec::new();

    for root in 0..unit_count {
        if completed[root] {
            continue;
        }

        completed[root] = true;
        stack.push((root, edges.dependencies(root)));

        while let Some((unit, dependencies)) = stack.last_mut() {
            let unit = *unit;
            match dependencies.next() {
                Some(dependency) if !completed[dependency] => {
                    completed[dependency] = true;
                    stack.push((dependency, edges.dependencies(dependency)));
                }
                Some(_) => {}
                None => {
                    stack.pop();
                    trace!("Ordered unit #{} at {}", unit, order.len());
                    order.push(unit);
                }
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    include!("orderer.test.rs");
}
