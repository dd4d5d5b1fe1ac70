use serde::{Serialize, Deserialize};

use crate::markdown::toc::HeadingEntry;

/// A heading and the headings nested under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub level: usize,
    pub anchor_id: String,
    pub title: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(level: usize, anchor_id: String, title: String) -> Self {
        Self {
            level,
            anchor_id,
            title,
            children: Vec::new(),
        }
    }

    /// The synthetic level 0 node owning the top-level headings
    pub fn root() -> Self {
        Self::new(0, String::new(), String::new())
    }

    pub fn is_root(&self) -> bool {
        self.level == 0
    }

    /// Number of heading levels below this node
    pub fn depth(&self) -> usize {
        self.children.iter().map(|child| child.depth() + 1).max().unwrap_or(0)
    }

    /// Number of headings in this subtree, excluding this node
    pub fn descendant_count(&self) -> usize {
        self.children.iter().map(|child| child.descendant_count() + 1).sum()
    }
}

/// Nest a flat list of headings by level.
///
/// A heading becomes a child of the closest preceding heading with a
/// strictly lower level, so skipped levels (`#` followed by `###`) still nest.
pub fn build_tree(headings: &[HeadingEntry]) -> OutlineNode {
    let mut stack = vec![OutlineNode::root()];

    for heading in headings {
        while stack.len() > 1 && stack.last().map_or(false, |top| top.level >= heading.level) {
            close_top(&mut stack);
        }

        stack.push(OutlineNode::new(
            heading.level,
            heading.anchor_id.clone(),
            heading.title.clone(),
        ));
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }

    stack.pop().unwrap_or_else(OutlineNode::root)
}

/// Pop the top of the stack and attach it as the last child of the new top.
fn close_top(stack: &mut Vec<OutlineNode>) {
    if let Some(completed) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(completed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(levels: &[usize]) -> Vec<HeadingEntry> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| HeadingEntry::new(level, format!("H{}", i), format!("h{}", i)))
            .collect()
    }

    #[test]
    fn test_build_toc_hierarchy() {
        let tree = build_tree(&flat(&[1, 2, 2, 3, 3, 1]));

        assert!(tree.is_root());
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].children.len(), 2);
        assert_eq!(tree.children[0].children[1].children.len(), 2);
        assert_eq!(tree.children[0].children[1].children[1].anchor_id, "h4");
        assert_eq!(tree.children[1].anchor_id, "h5");
    }

    #[test]
    fn test_skipped_levels_nest() {
        let tree = build_tree(&flat(&[1, 3, 1, 2]));

        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].children.len(), 1);
        assert_eq!(tree.children[0].children[0].level, 3);
        assert!(tree.children[0].children[0].children.is_empty());
        assert_eq!(tree.children[1].children.len(), 1);
        assert_eq!(tree.children[1].children[0].level, 2);
    }

    #[test]
    fn test_deeper_first_heading() {
        let tree = build_tree(&flat(&[3, 2, 1]));
        let levels: Vec<_> = tree.children.iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![3, 2, 1]);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_sibling_order_is_document_order() {
        let tree = build_tree(&flat(&[2, 4, 3, 4]));
        let first = &tree.children[0];
        let titles: Vec<_> = first.children.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["H1", "H2"]);
        assert_eq!(first.children[1].children[0].title, "H3");
    }

    #[test]
    fn test_empty_input() {
        let tree = build_tree(&[]);
        assert_eq!(tree, OutlineNode::root());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_counts() {
        let tree = build_tree(&flat(&[1, 2, 3, 4, 1]));
        assert_eq!(tree.depth(), 4);
        assert_eq!(tree.descendant_count(), 5);
    }
}
