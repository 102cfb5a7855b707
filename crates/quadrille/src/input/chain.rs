//! The ordered feature pipeline.

use cursor_icon::CursorIcon;
use quadrille_core::logging::targets;

use crate::grid::GridCore;

use super::events::{KeyEvent, PointerEvent, WheelEvent};
use super::feature::Feature;

/// What the chain did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// A feature consumed the event; no later feature saw it.
    Consumed,
    /// Every feature declined the event.
    Ignored,
}

impl DispatchResult {
    /// True if a feature consumed the event.
    pub fn is_consumed(&self) -> bool {
        matches!(self, DispatchResult::Consumed)
    }
}

/// An ordered pipeline of [`Feature`]s.
///
/// Events visit features head to tail until one consumes them. Order is
/// fixed at build time by [`FeatureDirectory::build_chain`]; the chain
/// itself has no insert or remove operations.
///
/// [`FeatureDirectory::build_chain`]: super::FeatureDirectory::build_chain
pub struct FeatureChain {
    features: Vec<Box<dyn Feature>>,
}

impl FeatureChain {
    pub(crate) fn new(features: Vec<Box<dyn Feature>>) -> Self {
        Self { features }
    }

    /// An empty chain that ignores every event.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of features in the chain.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True if the chain has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature names in chain order.
    pub fn names(&self) -> Vec<&'static str> {
        self.features.iter().map(|f| f.name()).collect()
    }

    /// Gives every feature its installation callback, in chain order.
    pub(crate) fn install(&mut self, grid: &mut GridCore) {
        for feature in &mut self.features {
            tracing::trace!(target: targets::INPUT, feature = feature.name(), "install");
            feature.install(grid);
        }
    }

    /// Walks the chain with `invoke` until a feature consumes the event.
    fn dispatch<E>(
        &mut self,
        grid: &mut GridCore,
        event: &mut E,
        mut invoke: impl FnMut(&mut dyn Feature, &mut GridCore, &mut E) -> bool,
    ) -> DispatchResult {
        for feature in &mut self.features {
            if invoke(feature.as_mut(), grid, event) {
                tracing::trace!(
                    target: targets::INPUT,
                    consumed_by = feature.name(),
                    "event consumed"
                );
                return DispatchResult::Consumed;
            }
        }
        DispatchResult::Ignored
    }

    pub(crate) fn pointer_move(
        &mut self,
        grid: &mut GridCore,
        event: &mut PointerEvent,
    ) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.pointer_move(g, e))
    }

    pub(crate) fn pointer_down(
        &mut self,
        grid: &mut GridCore,
        event: &mut PointerEvent,
    ) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.pointer_down(g, e))
    }

    pub(crate) fn pointer_up(
        &mut self,
        grid: &mut GridCore,
        event: &mut PointerEvent,
    ) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.pointer_up(g, e))
    }

    pub(crate) fn pointer_drag(
        &mut self,
        grid: &mut GridCore,
        event: &mut PointerEvent,
    ) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.pointer_drag(g, e))
    }

    pub(crate) fn primary_click(
        &mut self,
        grid: &mut GridCore,
        event: &mut PointerEvent,
    ) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.primary_click(g, e))
    }

    pub(crate) fn context_click(
        &mut self,
        grid: &mut GridCore,
        event: &mut PointerEvent,
    ) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.context_click(g, e))
    }

    pub(crate) fn double_click(
        &mut self,
        grid: &mut GridCore,
        event: &mut PointerEvent,
    ) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.double_click(g, e))
    }

    pub(crate) fn pointer_exit(
        &mut self,
        grid: &mut GridCore,
        event: &mut PointerEvent,
    ) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.pointer_exit(g, e))
    }

    pub(crate) fn wheel(&mut self, grid: &mut GridCore, event: &mut WheelEvent) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.wheel(g, e))
    }

    pub(crate) fn key_down(&mut self, grid: &mut GridCore, event: &mut KeyEvent) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.key_down(g, e))
    }

    pub(crate) fn key_up(&mut self, grid: &mut GridCore, event: &mut KeyEvent) -> DispatchResult {
        self.dispatch(grid, event, |f, g, e| f.key_up(g, e))
    }

    /// Polls features head to tail for a cursor request; first `Some`
    /// wins.
    pub(crate) fn cursor(&self, grid: &GridCore) -> Option<CursorIcon> {
        self.features.iter().find_map(|f| f.cursor(grid))
    }
}

impl std::fmt::Debug for FeatureChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureChain")
            .field("names", &self.names())
            .finish()
    }
}
