//! Grid state export and import.
//!
//! A [`GridState`] is a JSON-friendly snapshot of everything the grid can
//! restore later: the grid-wide property bag (flattened into the top-level
//! object), the current display order under `column_indexes`, and a sparse
//! `columnProperties` array of per-column bags positioned by schema index.
//! Transient interaction state such as selections never round-trips; see
//! [`NON_EXPORTABLE_KEYS`].

use serde::{Deserialize, Serialize};

use quadrille_core::{PropertyBag, Value, logging::targets};

use super::core::GridCore;
use super::properties::keys;

/// Property keys that never leave the grid through [`GridCore::get_state`].
///
/// Selections are live interaction state tied to the current data, not
/// configuration, so exporting them would restore stale highlights.
pub const NON_EXPORTABLE_KEYS: &[&str] =
    &["header_selection", "row_selection", "cell_selection"];

/// A restorable snapshot of grid configuration.
///
/// Serializes to a flat JSON object: grid properties at the top level,
/// plus the `columnProperties` array. Empty per-column slots are `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    /// Grid-wide properties, including the persisted `column_indexes`.
    #[serde(flatten)]
    pub properties: PropertyBag,

    /// Per-column property bags, positioned by schema index. Holes are
    /// columns without overrides.
    #[serde(
        rename = "columnProperties",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub column_properties: Vec<Option<PropertyBag>>,
}

impl GridCore {
    /// Exports the grid's restorable state.
    ///
    /// The returned snapshot carries the live display order under
    /// `column_indexes` regardless of how that order came about, and a
    /// per-column bag for every schema column that has overrides.
    /// Synthetic columns do not round-trip.
    pub fn get_state(&self) -> GridState {
        let mut properties = self.properties().bag().without_keys(NON_EXPORTABLE_KEYS);
        let order: Vec<Value> = self
            .columns()
            .active_order()
            .iter()
            .map(|&index| Value::from(index))
            .collect();
        properties.set(keys::COLUMN_INDEXES, order);

        let column_properties: Vec<Option<PropertyBag>> =
            match self.columns().max_schema_index() {
                Some(max) => (0..=max)
                    .map(|index| {
                        self.columns().column(index).and_then(|column| {
                            let stripped =
                                column.properties().without_keys(NON_EXPORTABLE_KEYS);
                            if stripped.is_empty() { None } else { Some(stripped) }
                        })
                    })
                    .collect(),
                None => Vec::new(),
            };

        tracing::debug!(
            target: targets::STATE,
            grid_keys = properties.len(),
            columns = column_properties.len(),
            "exported grid state"
        );

        GridState {
            properties,
            column_properties,
        }
    }

    /// Replaces all grid state with the snapshot.
    ///
    /// Clears first: grid properties return to defaults and the column
    /// registry is rebuilt from the model's schema, discarding every
    /// override. The snapshot is then applied via [`add_state`], which
    /// announces the single [`State`] scoped change for the whole
    /// operation.
    ///
    /// [`add_state`]: GridCore::add_state
    /// [`State`]: super::signals::ChangeScope::State
    pub fn set_state(&mut self, state: &GridState) {
        self.signals().changed.set_blocked(true);
        self.properties_mut().reset();
        self.reset_columns();
        self.signals().changed.set_blocked(false);

        self.add_state(state);
    }

    /// Merges the snapshot into the current state without clearing.
    ///
    /// Grid properties shallow-merge; a `column_indexes` entry replaces
    /// the display order; `columnProperties` entries merge per column by
    /// schema index, with holes and out-of-schema positions skipped. The
    /// data model is asked to reindex, the row-number column's measured
    /// width is invalidated, and one [`State`] scoped change is announced.
    ///
    /// [`State`]: super::signals::ChangeScope::State
    pub fn add_state(&mut self, state: &GridState) {
        self.signals().changed.set_blocked(true);

        self.properties_mut().merge(&state.properties);

        if state.properties.contains(keys::COLUMN_INDEXES)
            && let Some(order) = self.properties().column_indexes()
        {
            self.set_column_order(&order);
        }

        for (position, entry) in state.column_properties.iter().enumerate() {
            let Some(bag) = entry else { continue };
            if bag.is_empty() {
                continue;
            }
            let index = position as i32;
            match self.columns_mut().column_mut(index) {
                Some(column) => column.properties_mut().merge(bag),
                None => {
                    tracing::debug!(
                        target: targets::STATE,
                        index,
                        "snapshot entry for a column not in the schema; skipped"
                    );
                }
            }
        }

        self.signals().changed.set_blocked(false);

        self.subgrids().data_model().reindex();
        self.signals().row_number_width_reset.emit(());
        self.signals().emit_state();

        tracing::debug!(target: targets::STATE, "applied grid state");
    }
}
