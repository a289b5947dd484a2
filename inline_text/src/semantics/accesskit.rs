// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use accesskit::{Action, Node, NodeId, Role};
use hashbrown::{HashMap, HashSet};

use super::InlineSpanSemanticsInformation;

/// Lowers semantics records to AccessKit nodes, keeping node ids stable across passes.
///
/// Records that don't require their own node are merged into the label of the paragraph's
/// node. Each remaining record becomes a child of that node: placeholders become
/// [`Role::GenericContainer`] nodes for the embedded widget to fill, and spans with a tap
/// recognizer become clickable [`Role::Link`] nodes.
#[derive(Clone, Debug, Default)]
pub struct SemanticsNodeIds {
    // Two-way mapping between record indices and node ids, pruned by `build_nodes` so that
    // records that disappear release their ids.
    ids_by_index: HashMap<usize, NodeId>,
    indices_by_id: HashMap<NodeId, usize>,
}

impl SemanticsNodeIds {
    /// Builds the child nodes for `records` and sets the merged label on `parent_node`.
    ///
    /// New nodes are appended to `nodes`, which is usually the `nodes` field of an AccessKit
    /// `TreeUpdate`.
    pub fn build_nodes(
        &mut self,
        records: &[InlineSpanSemanticsInformation],
        nodes: &mut Vec<(NodeId, Node)>,
        parent_node: &mut Node,
        mut next_node_id: impl FnMut() -> NodeId,
    ) {
        let mut ids = HashSet::<NodeId>::new();
        let mut label = String::new();

        for (index, record) in records.iter().enumerate() {
            if !record.requires_own_node() {
                label.push_str(record.announced_text());
                continue;
            }
            let id = self.ids_by_index.get(&index).copied().unwrap_or_else(|| {
                let id = next_node_id();
                self.ids_by_index.insert(index, id);
                self.indices_by_id.insert(id, index);
                id
            });
            ids.insert(id);

            let node = if record.is_placeholder() {
                Node::new(Role::GenericContainer)
            } else {
                let mut node = Node::new(Role::Link);
                node.set_label(record.announced_text());
                node.add_action(Action::Click);
                node
            };
            nodes.push((id, node));
            parent_node.push_child(id);
        }

        if !label.is_empty() {
            parent_node.set_label(label);
        }

        let stale: Vec<(NodeId, usize)> = self
            .indices_by_id
            .iter()
            .filter(|(id, _)| !ids.contains(*id))
            .map(|(id, index)| (*id, *index))
            .collect();
        for (id, index) in stale {
            self.indices_by_id.remove(&id);
            self.ids_by_index.remove(&index);
        }
    }

    /// The node id assigned to the record at `index` by the last pass.
    pub fn node_id(&self, index: usize) -> Option<NodeId> {
        self.ids_by_index.get(&index).copied()
    }

    /// The index of the record that `id` was assigned to by the last pass.
    pub fn record_index(&self, id: NodeId) -> Option<usize> {
        self.indices_by_id.get(&id).copied()
    }
}
