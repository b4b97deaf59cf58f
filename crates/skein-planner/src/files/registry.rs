use super::file::{File, FileIn, internal_selector};
use crate::Result;
use crate::ids::FileId;
use crate::store::Store;

/// Identity store for output files, keyed by id or logical path.
#[derive(Debug)]
pub struct FileRegistry {
    pub(crate) store: Store<FileId, File>,
}

impl Default for FileRegistry {
    fn default() -> Self {
        Self {
            store: Store::new("file"),
        }
    }
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    pub fn get(&self, id: FileId) -> Option<&File> {
        self.store.get(id)
    }

    /// Like [`get`](Self::get), for ids this registry minted.
    pub fn file(&self, id: FileId) -> &File {
        self.ensure_file(id)
    }

    pub(crate) fn file_mut(&mut self, id: FileId) -> &mut File {
        self.ensure_file_mut(id)
    }

    /// Register a file, promoting a stand-in with the same path.
    pub fn register(&mut self, input: FileIn) -> Result<FileId> {
        let selector = input.selector();
        let id = match self.store.lookup(input.id, Some(&selector))? {
            Some(id) => {
                self.ensure_file_mut(id).merge(input);
                id
            }
            None => {
                let id = self.store.insert(Some(selector), |id| File::new(id, input));
                tracing::trace!(file = %id, "allocated file");
                id
            }
        };
        self.store.mark_registered(id);
        Ok(id)
    }

    /// The file at `logical_path`, creating a stand-in when none exists.
    pub fn reference(&mut self, logical_path: &str) -> Result<FileId> {
        let selector = internal_selector(logical_path);
        if let Some(id) = self.store.lookup(None, Some(&selector))? {
            return Ok(id);
        }
        let input = FileIn::new(logical_path);
        let id = self.store.insert(Some(selector), |id| File::new(id, input));
        self.store.mark_referenced(id);
        Ok(id)
    }

    pub fn is_registered(&self, id: FileId) -> bool {
        self.store.is_registered(id)
    }

    /// Fully registered files in registration order.
    pub fn registered(&self) -> impl Iterator<Item = &File> + '_ {
        self.store.registered().map(|id| self.ensure_file(id))
    }

    /// Stand-ins never registered, in first-reference order.
    pub fn referenced(&self) -> impl Iterator<Item = &File> + '_ {
        self.store.referenced().map(|id| self.ensure_file(id))
    }

    pub(crate) fn registered_ids(&self) -> Vec<FileId> {
        self.store.registered().collect()
    }
}
