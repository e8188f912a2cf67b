//! Per-call collaborators: default match options and the side→link resolver.

use crate::models::{MatchOptions, Side};

/// Produces the opaque render link for a concretely identified side.
pub trait SideLinker {
    fn link(&self, side: &Side) -> Option<String>;
}

impl<F> SideLinker for F
where
    F: Fn(&Side) -> Option<String>,
{
    fn link(&self, side: &Side) -> Option<String> {
        self(side)
    }
}

/// Linker for callers that render without links.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLinks;

impl SideLinker for NoLinks {
    fn link(&self, _side: &Side) -> Option<String> {
        None
    }
}

/// What the rendering layer supplies to one layout call.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    pub match_options: MatchOptions,
    links: &'a dyn SideLinker,
}

impl LayoutContext<'static> {
    pub fn new(match_options: MatchOptions) -> Self {
        Self {
            match_options,
            links: &NoLinks,
        }
    }
}

impl Default for LayoutContext<'static> {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}

impl<'a> LayoutContext<'a> {
    pub fn with_links(match_options: MatchOptions, links: &'a dyn SideLinker) -> Self {
        Self {
            match_options,
            links,
        }
    }

    pub fn link_for(&self, side: &Side) -> Option<String> {
        self.links.link(side)
    }
}
