use crate::spec::{Node, NodeKind};

/// A flattened entry waiting to be created on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    /// Root-relative path, segments joined with `/`.
    pub path: String,
    pub kind: NodeKind,
}

/// The ordered list of entries produced by [`flatten`].
///
/// Entries appear in the exact order they must be created: applying a plan front to back
/// reproduces the stack walk over the declared tree.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub entries: Vec<PlannedEntry>,
}

/// Walks the declared tree as a stack and returns the entries in processing order.
///
/// Nodes are popped from the end, so siblings come out in reverse declaration order. A
/// popped node pushes its children (renamed to `parent/child`, in declared order) before it
/// is itself recorded, which means those children are processed before any sibling that
/// was declared ahead of the parent.
pub fn flatten(directories: Vec<Node>) -> Plan {
    let mut stack = directories;
    let mut plan = Plan::default();

    while let Some(node) = stack.pop() {
        let Node {
            name,
            kind,
            children,
        } = node;

        for mut child in children.unwrap_or_default() {
            child.name = format!("{}/{}", name, child.name);

            log::debug!("queued {}", child.name);

            stack.push(child);
        }

        plan.entries.push(PlannedEntry { path: name, kind });
    }

    plan
}
