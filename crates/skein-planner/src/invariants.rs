//! Invariant checks excluded from coverage reports.
//!
//! Every id passed here was minted by the registry being asked, so a miss
//! means registry state was corrupted, not that a caller misused the API.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::analyze::{Analysis, Analyzer};
use crate::files::{File, FileRegistry};
use crate::ids::{FileId, NodeId, SymbolId};
use crate::nodes::{Node, NodeRegistry};
use crate::symbols::{Symbol, SymbolRegistry};

impl SymbolRegistry {
    pub(crate) fn ensure_symbol(&self, id: SymbolId) -> &Symbol {
        self.symbols
            .get(id.index())
            .unwrap_or_else(|| panic!("SymbolRegistry: symbol #{id} not found"))
    }

    pub(crate) fn ensure_symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        self.symbols
            .get_mut(id.index())
            .unwrap_or_else(|| panic!("SymbolRegistry: symbol #{id} not found"))
    }
}

impl FileRegistry {
    pub(crate) fn ensure_file(&self, id: FileId) -> &File {
        self.store
            .get(id)
            .unwrap_or_else(|| panic!("FileRegistry: file #{id} not found"))
    }

    pub(crate) fn ensure_file_mut(&mut self, id: FileId) -> &mut File {
        self.store
            .get_mut(id)
            .unwrap_or_else(|| panic!("FileRegistry: file #{id} not found"))
    }
}

impl NodeRegistry {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &dyn Node {
        self.store
            .get(id)
            .and_then(|slot| slot.node.as_deref())
            .unwrap_or_else(|| panic!("NodeRegistry: node #{id} has no registered node"))
    }
}

impl Analyzer {
    pub(crate) fn ensure_analysis(&self, id: NodeId) -> &Analysis {
        self.analysis(id)
            .unwrap_or_else(|| panic!("Analyzer: node #{id} was not analyzed"))
    }

    pub(crate) fn ensure_analysis_mut(&mut self, id: NodeId) -> &mut Analysis {
        self.analysis_mut(id)
            .unwrap_or_else(|| panic!("Analyzer: node #{id} was not analyzed"))
    }
}
