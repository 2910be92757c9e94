//! Scroll/hover reconciliation of the side nav.
//!
//! [`Reconciler`] holds the only mutable state of the client behaviour: the
//! last entry the scroll tracker activated and the group that was expanded
//! for it. It touches the page exclusively through [`NavSurface`], so the
//! same rules drive the in-memory [`NavModel`] used in tests.
//!
//! Every transition is idempotent: delivering the same event twice leaves
//! the surface as the first delivery did.

use super::layout::{Viewport, activation_offset, enhances};
use super::tree::SideNav;

/// The parts of the page the reconciler reads and toggles.
///
/// Lookups return `None` for anything that does not exist; the reconciler
/// treats `None` as "nothing to do".
pub trait NavSurface {
    /// A nav entry the scroll tracker can activate (an `li` with a dot link).
    type Entry: Clone + PartialEq;
    /// A collapsible group.
    type Group: Clone + PartialEq;
    /// A top-level `li`.
    type Item: Clone + PartialEq;

    /// Every group in the top-level list.
    fn groups(&self) -> Vec<Self::Group>;

    /// A group nested inside the entry itself.
    fn own_group(&self, entry: &Self::Entry) -> Option<Self::Group>;

    /// The group the entry sits in.
    fn enclosing_group(&self, entry: &Self::Entry) -> Option<Self::Group>;

    /// The group that immediately follows the entry.
    fn sibling_group(&self, entry: &Self::Entry) -> Option<Self::Group>;

    /// The top-level item the entry belongs to.
    fn top_level_item(&self, entry: &Self::Entry) -> Option<Self::Item>;

    fn expand(&mut self, group: &Self::Group);

    fn collapse(&mut self, group: &Self::Group);

    fn mark_active_parent(&mut self, item: &Self::Item);

    fn clear_active_parent(&mut self);
}

/// Keeps group expansion in step with the scroll tracker and the pointer.
pub struct Reconciler<S: NavSurface> {
    surface: S,
    current_active: Option<S::Entry>,
    current_expanded: Option<S::Group>,
    offset: f64,
}

impl<S: NavSurface> Reconciler<S> {
    /// Start reconciling, or `None` when the viewport is too narrow for the
    /// side nav to be enhanced.
    pub fn attach(surface: S, viewport: Viewport) -> Option<Self> {
        enhances(viewport).then(|| Self {
            surface,
            current_active: None,
            current_expanded: None,
            offset: activation_offset(viewport.height),
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Scroll offset currently registered with the scroll tracker.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn current_active(&self) -> Option<&S::Entry> {
        self.current_active.as_ref()
    }

    pub fn current_expanded(&self) -> Option<&S::Group> {
        self.current_expanded.as_ref()
    }

    /// Own group first, then the enclosing group, then the following sibling.
    fn resolve_group(&self, entry: &S::Entry) -> Option<S::Group> {
        self.surface
            .own_group(entry)
            .or_else(|| self.surface.enclosing_group(entry))
            .or_else(|| self.surface.sibling_group(entry))
    }

    /// Pointer entered the top-level list: show the whole structure.
    pub fn hover_enter(&mut self) {
        for group in self.surface.groups() {
            self.surface.expand(&group);
        }
    }

    /// Pointer left the top-level list: collapse everything except the
    /// group of the section being read.
    pub fn hover_leave(&mut self) {
        let keep = self
            .current_active
            .as_ref()
            .and_then(|entry| self.resolve_group(entry));

        for group in self.surface.groups() {
            if keep.as_ref() != Some(&group) {
                self.surface.collapse(&group);
            }
        }
    }

    /// The scroll tracker reported a new active entry (or none).
    pub fn on_activate(&mut self, entry: Option<S::Entry>) {
        let Some(entry) = entry else {
            return;
        };

        self.surface.clear_active_parent();
        if let Some(item) = self.surface.top_level_item(&entry) {
            self.surface.mark_active_parent(&item);
        }

        let group = self.resolve_group(&entry);
        if let Some(group) = &group {
            self.surface.expand(group);
        }
        if let Some(previous) = &self.current_expanded
            && group.as_ref() != Some(previous)
        {
            self.surface.collapse(previous);
        }

        self.current_expanded = group;
        self.current_active = Some(entry);
    }

    /// The viewport was resized: recompute the activation offset.
    pub fn resize(&mut self, viewport_height: f64) {
        self.offset = activation_offset(viewport_height);
    }
}

// =============================================================================
// In-memory surface
// =============================================================================

/// Visual state of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    Collapsed,
    Expanded,
}

/// An entry of a [`NavModel`], addressed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEntry {
    /// The n-th top-level item
    Top(usize),
    /// A child of the n-th group
    Nested { group: usize, child: usize },
}

#[derive(Debug)]
struct ModelItem {
    id: String,
    group: Option<usize>,
}

#[derive(Debug)]
struct ModelGroup {
    id: String,
    owner: usize,
    children: Vec<String>,
    state: GroupState,
}

/// The emitted nav markup as plain data: every group starts collapsed and
/// no item is `active-parent`.
#[derive(Debug)]
pub struct NavModel {
    items: Vec<ModelItem>,
    groups: Vec<ModelGroup>,
    active_parent: Option<usize>,
}

impl NavModel {
    pub fn new(nav: &SideNav) -> Self {
        let mut items = Vec::new();
        let mut groups = Vec::new();

        for (owner, entry) in nav.entries.iter().enumerate() {
            let group = entry.group.as_ref().map(|group| {
                groups.push(ModelGroup {
                    id: group.id(),
                    owner,
                    children: group.children.iter().map(|h| h.id.clone()).collect(),
                    state: GroupState::Collapsed,
                });
                groups.len() - 1
            });
            items.push(ModelItem {
                id: entry.heading.id.clone(),
                group,
            });
        }

        Self {
            items,
            groups,
            active_parent: None,
        }
    }

    /// Find the entry linking to `heading_id`.
    pub fn entry(&self, heading_id: &str) -> Option<ModelEntry> {
        if let Some(top) = self.items.iter().position(|item| item.id == heading_id) {
            return Some(ModelEntry::Top(top));
        }
        self.groups.iter().enumerate().find_map(|(group, g)| {
            g.children
                .iter()
                .position(|id| id == heading_id)
                .map(|child| ModelEntry::Nested { group, child })
        })
    }

    /// State of the group with the given element id.
    pub fn state(&self, group_id: &str) -> Option<GroupState> {
        self.groups.iter().find(|g| g.id == group_id).map(|g| g.state)
    }

    /// Ids of all expanded groups, in document order.
    pub fn expanded(&self) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|g| g.state == GroupState::Expanded)
            .map(|g| g.id.as_str())
            .collect()
    }

    /// Heading id of the item marked `active-parent`.
    pub fn active_parent(&self) -> Option<&str> {
        self.active_parent.map(|i| self.items[i].id.as_str())
    }
}

impl NavSurface for NavModel {
    type Entry = ModelEntry;
    type Group = usize;
    type Item = usize;

    fn groups(&self) -> Vec<usize> {
        (0..self.groups.len()).collect()
    }

    fn own_group(&self, _entry: &ModelEntry) -> Option<usize> {
        // Groups are emitted beside items, never inside them.
        None
    }

    fn enclosing_group(&self, entry: &ModelEntry) -> Option<usize> {
        match entry {
            ModelEntry::Nested { group, .. } => Some(*group),
            ModelEntry::Top(_) => None,
        }
    }

    fn sibling_group(&self, entry: &ModelEntry) -> Option<usize> {
        match entry {
            ModelEntry::Top(item) => self.items.get(*item).and_then(|item| item.group),
            ModelEntry::Nested { .. } => None,
        }
    }

    fn top_level_item(&self, entry: &ModelEntry) -> Option<usize> {
        match entry {
            ModelEntry::Top(item) => Some(*item),
            ModelEntry::Nested { group, .. } => self.groups.get(*group).map(|g| g.owner),
        }
    }

    fn expand(&mut self, group: &usize) {
        if let Some(g) = self.groups.get_mut(*group) {
            g.state = GroupState::Expanded;
        }
    }

    fn collapse(&mut self, group: &usize) {
        if let Some(g) = self.groups.get_mut(*group) {
            g.state = GroupState::Collapsed;
        }
    }

    fn mark_active_parent(&mut self, item: &usize) {
        self.active_parent = Some(*item);
    }

    fn clear_active_parent(&mut self) {
        self.active_parent = None;
    }
}
