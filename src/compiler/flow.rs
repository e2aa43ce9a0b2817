use super::index::GraphIndex;
use crate::sketch::NodeKind;
use ahash::AHashSet;

/// Collects the statement-producing nodes reachable from `entry_id` through
/// execution edges, in depth-first discovery order.
///
/// Each node is collected at most once, so execution cycles terminate.
/// Traversal continues through function and variable nodes only; an edge into
/// an entry point or a missing node ends that branch.
pub(super) fn discover_procedure<'g>(index: &GraphIndex<'g>, entry_id: &str) -> Vec<&'g str> {
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut discovered = Vec::new();
    let mut stack: Vec<&'g str> = index.exec_targets(entry_id).iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(node) = index.node(id) else {
            continue;
        };
        if !matches!(node.kind, NodeKind::Function(_) | NodeKind::Variable(_)) {
            continue;
        }

        discovered.push(id);
        stack.extend(index.exec_targets(id).iter().rev().copied());
    }

    discovered
}

/// Reorders `reachable` so that every node comes after the nodes of the same
/// set that feed its data inputs.
///
/// Nodes without unmet dependencies keep their discovery order. Each node is
/// placed once, so data cycles terminate.
pub(super) fn order_by_dependencies<'g>(
    index: &GraphIndex<'g>,
    reachable: &[&'g str],
) -> Vec<&'g str> {
    struct Sorter<'i, 'g> {
        index: &'i GraphIndex<'g>,
        members: AHashSet<&'g str>,
        placed: AHashSet<&'g str>,
        ordered: Vec<&'g str>,
    }

    impl<'g> Sorter<'_, 'g> {
        fn visit(&mut self, id: &'g str) {
            if !self.placed.insert(id) {
                return;
            }
            let index = self.index;
            for &source in index.data_sources(id) {
                if self.members.contains(source) {
                    self.visit(source);
                }
            }
            self.ordered.push(id);
        }
    }

    let mut sorter = Sorter {
        index,
        members: reachable.iter().copied().collect(),
        placed: AHashSet::new(),
        ordered: Vec::with_capacity(reachable.len()),
    };
    for &id in reachable {
        sorter.visit(id);
    }
    sorter.ordered
}
