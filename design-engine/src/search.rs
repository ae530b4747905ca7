//! Depth-first, pre-order traversal over a borrowed document tree.
//!
//! Every lookup in the engine goes through [`PreOrder`], so "first match"
//! always means "first in document order".

use crate::model::DocumentNode;

/// Pre-order iterator (node, then its children left to right).
///
/// Uses an explicit stack so deep trees do not grow the call stack.
pub struct PreOrder<'a> {
    stack: Vec<&'a DocumentNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a DocumentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl DocumentNode {
    /// Iterates this node and all its descendants in pre-order.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Iterates descendants only (the node itself is skipped).
    pub fn descendants(&self) -> impl Iterator<Item = &DocumentNode> {
        self.pre_order().skip(1)
    }
}

/// Finds the first node (pre-order) whose name equals `name` exactly.
///
/// Duplicate names resolve to the earliest occurrence in document order.
pub fn find_by_name<'a>(root: &'a DocumentNode, name: &str) -> Option<&'a DocumentNode> {
    root.pre_order().find(|n| n.name == name)
}

/// Finds the first node (pre-order) with the given Figma node id.
pub fn find_by_id<'a>(root: &'a DocumentNode, id: &str) -> Option<&'a DocumentNode> {
    root.pre_order().find(|n| n.id == id)
}

/// First TEXT node strictly below `node`.
pub fn first_text_descendant(node: &DocumentNode) -> Option<&DocumentNode> {
    node.descendants().find(|n| n.is_text())
}

/// First non-empty `characters` strictly below `node`.
pub fn first_descendant_characters(node: &DocumentNode) -> Option<&str> {
    node.descendants().find_map(DocumentNode::own_characters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::node;
    use serde_json::json;

    fn sample_tree() -> DocumentNode {
        node(json!({
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [
                {
                    "id": "1:0",
                    "name": "Page",
                    "type": "CANVAS",
                    "children": [
                        { "id": "1:1", "name": "Card", "type": "FRAME",
                          "children": [ { "id": "1:2", "name": "Title", "type": "TEXT", "characters": "Hi" } ] },
                        { "id": "1:3", "name": "Title", "type": "TEXT", "characters": "Second" }
                    ]
                }
            ]
        }))
    }

    #[test]
    fn finds_root_itself() {
        let tree = sample_tree();
        assert_eq!(find_by_name(&tree, "Document").map(|n| n.id.as_str()), Some("0:0"));
    }

    #[test]
    fn duplicate_names_resolve_to_preorder_first() {
        let tree = sample_tree();
        let hit = find_by_name(&tree, "Title").unwrap();
        assert_eq!(hit.id, "1:2");
        assert_eq!(hit.name, "Title");
    }

    #[test]
    fn missing_name_is_none() {
        let tree = sample_tree();
        assert!(find_by_name(&tree, "Nope").is_none());
        assert!(find_by_name(&tree, "title").is_none(), "match is case-sensitive");
    }

    #[test]
    fn leaf_without_children_is_searchable() {
        let leaf = node(json!({ "name": "Solo", "type": "RECTANGLE" }));
        assert!(find_by_name(&leaf, "Solo").is_some());
        assert!(find_by_name(&leaf, "Other").is_none());
    }

    #[test]
    fn finds_by_id() {
        let tree = sample_tree();
        assert_eq!(find_by_id(&tree, "1:3").map(|n| n.name.as_str()), Some("Title"));
        assert!(find_by_id(&tree, "9:9").is_none());
    }

    #[test]
    fn pre_order_visits_in_document_order() {
        let tree = sample_tree();
        let ids: Vec<&str> = tree.pre_order().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["0:0", "1:0", "1:1", "1:2", "1:3"]);
    }

    #[test]
    fn descendant_helpers_skip_self() {
        let text = node(json!({ "name": "t", "type": "TEXT", "characters": "self" }));
        assert!(first_text_descendant(&text).is_none());
        assert!(first_descendant_characters(&text).is_none());

        let tree = sample_tree();
        assert_eq!(first_descendant_characters(&tree), Some("Hi"));
        assert_eq!(first_text_descendant(&tree).map(|n| n.id.as_str()), Some("1:2"));
    }

    #[test]
    fn empty_characters_are_skipped() {
        let tree = node(json!({
            "name": "Wrap",
            "type": "FRAME",
            "children": [
                { "name": "a", "type": "TEXT", "characters": "" },
                { "name": "b", "type": "TEXT", "characters": "filled" }
            ]
        }));
        assert_eq!(first_descendant_characters(&tree), Some("filled"));
    }
}
