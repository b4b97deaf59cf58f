use std::any::Any;
use std::fmt;

use crate::Result;
use crate::analyze::AnalysisContext;
use crate::ids::SymbolId;
use crate::language::Language;
use crate::render::RenderContext;

/// A declaration node contributed by a language front end.
///
/// The planner only calls [`analyze`](Node::analyze) and reads the
/// descriptive accessors. [`render`](Node::render) is reserved for
/// renderers, after planning has assigned every final name.
pub trait Node: Any {
    /// Report dependencies, nested scopes and structural children.
    fn analyze(&self, ctx: &mut AnalysisContext<'_>);

    /// Display name, for diagnostics.
    fn name(&self) -> &str;

    /// Symbol this node declares, if any.
    fn symbol(&self) -> Option<SymbolId> {
        None
    }

    fn exported(&self) -> bool {
        false
    }

    fn language(&self) -> Option<Language> {
        None
    }

    /// Turn a candidate name into a legal identifier.
    ///
    /// Applied to the intended name and to every resolver candidate.
    fn sanitize_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn clone_node(&self) -> Box<dyn Node>;

    /// Source text for this node, with final names substituted.
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Option<String>> {
        Ok(None)
    }

    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn Node> {
    fn clone(&self) -> Self {
        self.clone_node()
    }
}

impl fmt::Debug for dyn Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name())
            .field("symbol", &self.symbol())
            .finish()
    }
}
