//! Subgrid composition.
//!
//! A grid is a fixed, ordered stack of row-bearing regions: header rows,
//! the scrollable data region, optional summary rows. Each region wraps its
//! own [`DataModel`]. Exactly one region carries [`SubgridRole::Data`]; rows
//! of regions above it never scroll, and the data region can pin a number of
//! its own leading rows via the grid's fixed-row configuration.

use std::fmt;
use std::sync::Arc;

use crate::error::{GridError, Result};

use super::traits::DataModel;

/// What a subgrid contributes to the stacked composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubgridRole {
    /// Non-scrolling rows above the data region (column headers, filters).
    Header,
    /// The scrollable data region. Exactly one per grid.
    Data,
    /// Trailing rows (totals, aggregates).
    Summary,
}

/// One region of the composition: a role plus the model that feeds it.
#[derive(Clone)]
pub struct Subgrid {
    role: SubgridRole,
    model: Arc<dyn DataModel>,
}

impl Subgrid {
    /// Creates a subgrid with an explicit role.
    pub fn new(role: SubgridRole, model: Arc<dyn DataModel>) -> Self {
        Self { role, model }
    }

    /// Creates a header subgrid.
    pub fn header(model: Arc<dyn DataModel>) -> Self {
        Self::new(SubgridRole::Header, model)
    }

    /// Creates the data subgrid.
    pub fn data(model: Arc<dyn DataModel>) -> Self {
        Self::new(SubgridRole::Data, model)
    }

    /// Creates a summary subgrid.
    pub fn summary(model: Arc<dyn DataModel>) -> Self {
        Self::new(SubgridRole::Summary, model)
    }

    /// The role of this subgrid.
    pub fn role(&self) -> SubgridRole {
        self.role
    }

    /// The model feeding this subgrid.
    pub fn model(&self) -> &Arc<dyn DataModel> {
        &self.model
    }
}

impl fmt::Debug for Subgrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subgrid")
            .field("role", &self.role)
            .field("rows", &self.model.row_count())
            .finish()
    }
}

/// Identifies a subgrid by its position in composition order.
///
/// The composition is fixed at construction, so the position is a stable
/// identity for the lifetime of the grid. Cell addressing uses the triple
/// (subgrid, column data index, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubgridId(pub(crate) usize);

impl SubgridId {
    /// Position of this subgrid in composition order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The validated, ordered set of subgrids.
pub struct SubgridSet {
    subgrids: Vec<Subgrid>,
    data: SubgridId,
}

impl SubgridSet {
    /// Validates and adopts a composition.
    ///
    /// Fails unless exactly one subgrid carries [`SubgridRole::Data`].
    pub fn new(subgrids: Vec<Subgrid>) -> Result<Self> {
        let data_positions: Vec<usize> = subgrids
            .iter()
            .enumerate()
            .filter(|(_, s)| s.role() == SubgridRole::Data)
            .map(|(i, _)| i)
            .collect();

        match data_positions.as_slice() {
            [] => Err(GridError::NoDataSubgrid),
            [position] => Ok(Self {
                subgrids,
                data: SubgridId(*position),
            }),
            many => Err(GridError::MultipleDataSubgrids { count: many.len() }),
        }
    }

    /// The data subgrid's identity.
    pub fn data_id(&self) -> SubgridId {
        self.data
    }

    /// The subgrid at `id`, if it exists.
    pub fn get(&self, id: SubgridId) -> Option<&Subgrid> {
        self.subgrids.get(id.0)
    }

    /// The model of the subgrid at `id`, if it exists.
    pub fn model(&self, id: SubgridId) -> Option<&Arc<dyn DataModel>> {
        self.get(id).map(Subgrid::model)
    }

    /// The model of the subgrid at `id`.
    ///
    /// Identities are only minted by this set and the composition never
    /// changes after construction, so any held [`SubgridId`] is in bounds.
    pub fn model_of(&self, id: SubgridId) -> &Arc<dyn DataModel> {
        self.subgrids[id.0].model()
    }

    /// The model of the data subgrid.
    pub fn data_model(&self) -> &Arc<dyn DataModel> {
        // The constructor guarantees the data position is in bounds.
        self.subgrids[self.data.0].model()
    }

    /// Number of subgrids in the composition.
    pub fn len(&self) -> usize {
        self.subgrids.len()
    }

    /// True if the composition is empty (never the case once validated).
    pub fn is_empty(&self) -> bool {
        self.subgrids.is_empty()
    }

    /// Iterates subgrids in composition order with their identities.
    pub fn iter(&self) -> impl Iterator<Item = (SubgridId, &Subgrid)> {
        self.subgrids
            .iter()
            .enumerate()
            .map(|(i, s)| (SubgridId(i), s))
    }

    /// Rows contributed by subgrids above the data region.
    ///
    /// These rows are always fully rendered and never scroll.
    pub fn header_row_count(&self) -> usize {
        self.subgrids[..self.data.0]
            .iter()
            .map(|s| s.model().row_count())
            .sum()
    }

    /// Total non-scrolling rows: the header rows plus `data_fixed_rows`
    /// leading rows pinned inside the data region (clamped to its length).
    pub fn fixed_row_count(&self, data_fixed_rows: usize) -> usize {
        self.header_row_count() + data_fixed_rows.min(self.data_model().row_count())
    }

    /// Rows contributed by the whole composition.
    pub fn total_row_count(&self) -> usize {
        self.subgrids.iter().map(|s| s.model().row_count()).sum()
    }
}

impl fmt::Debug for SubgridSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubgridSet")
            .field("subgrids", &self.subgrids)
            .field("data", &self.data)
            .finish()
    }
}
