use super::node::Node;
use crate::ids::{FileId, NodeId};
use crate::store::{Selector, Store};
use crate::{Error, Result};

#[derive(Debug, Default)]
pub(crate) struct NodeSlot {
    pub(crate) node: Option<Box<dyn Node>>,
    pub(crate) file: Option<FileId>,
}

/// Registration input for a node.
pub struct NodeIn {
    id: Option<NodeId>,
    selector: Option<Selector>,
    node: Box<dyn Node>,
}

impl NodeIn {
    pub fn new(node: Box<dyn Node>) -> Self {
        Self {
            id: None,
            selector: None,
            node,
        }
    }

    pub fn id(mut self, id: NodeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn selector<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selector = Some(path.into_iter().map(Into::into).collect());
        self
    }
}

/// Identity store for syntax nodes, keyed by id or selector.
#[derive(Debug)]
pub struct NodeRegistry {
    pub(crate) store: Store<NodeId, NodeSlot>,
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self {
            store: Store::new("node"),
        }
    }
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Register an anonymous node.
    pub fn add(&mut self, node: Box<dyn Node>) -> NodeId {
        let id = self.store.insert(None, |_| NodeSlot {
            node: Some(node),
            file: None,
        });
        self.store.mark_registered(id);
        id
    }

    /// Register a node, filling a stand-in reserved under the same id or
    /// selector.
    pub fn register(&mut self, input: NodeIn) -> Result<NodeId> {
        let NodeIn { id, selector, node } = input;
        let id = match self.store.lookup(id, selector.as_ref())? {
            Some(id) => {
                if let Some(slot) = self.store.get_mut(id) {
                    slot.node = Some(node);
                }
                id
            }
            None => self.store.insert(selector, |_| NodeSlot {
                node: Some(node),
                file: None,
            }),
        };
        self.store.mark_registered(id);
        Ok(id)
    }

    /// Reserve a slot for a node that will be registered later.
    pub fn reference<I, S>(&mut self, path: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selector: Selector = path.into_iter().map(Into::into).collect();
        if let Some(id) = self.store.lookup(None, Some(&selector))? {
            return Ok(id);
        }
        let id = self.store.insert(Some(selector), |_| NodeSlot::default());
        self.store.mark_referenced(id);
        Ok(id)
    }

    /// The node in slot `id`, if one was registered.
    pub fn get(&self, id: NodeId) -> Option<&dyn Node> {
        self.store.get(id).and_then(|slot| slot.node.as_deref())
    }

    /// Like [`get`](Self::get), for ids known to be registered.
    pub fn node(&self, id: NodeId) -> &dyn Node {
        self.ensure_node(id)
    }

    /// Home file assigned by the planner.
    pub fn file(&self, id: NodeId) -> Option<FileId> {
        self.store.get(id).and_then(|slot| slot.file)
    }

    pub(crate) fn set_file(&mut self, id: NodeId, file: FileId) -> Result<()> {
        let Some(slot) = self.store.get_mut(id) else {
            return Err(Error::UnknownId {
                registry: "node",
                id: id.as_u32(),
            });
        };
        if slot.file.is_some_and(|existing| existing != file) {
            return Err(Error::WriteOnce {
                field: "file",
                subject: format!("node #{id}"),
            });
        }
        slot.file = Some(file);
        Ok(())
    }

    pub fn is_registered(&self, id: NodeId) -> bool {
        self.store.is_registered(id)
    }

    /// Registered nodes in registration order.
    pub fn registered(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.store.registered()
    }

    /// Reserved slots still waiting for a node.
    pub fn referenced(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.store.referenced()
    }
}
