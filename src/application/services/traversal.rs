//! Traversal service
//!
//! Runs the configured (order, strategy) plan against a tree and cross-checks
//! the recursive and iterative results of each order.

use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{traverse, Node, Order, Strategy};

/// Visited values of one traversal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    pub order: Order,
    pub strategy: Strategy,
    pub values: Vec<i32>,
}

impl TraversalReport {
    /// Heading printed above the values, e.g. `## Preorder Traversal Recursive ##`.
    pub fn label(&self) -> String {
        format!("## {} Traversal {} ##", self.order, self.strategy)
    }
}

/// Recursive and iterative result of one order, side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub order: Order,
    pub recursive: Vec<i32>,
    pub iterative: Vec<i32>,
}

impl Verification {
    pub fn is_consistent(&self) -> bool {
        self.recursive == self.iterative
    }

    /// Turn an inconsistent result into [`ApplicationError::Mismatch`].
    pub fn into_result(self) -> ApplicationResult<Self> {
        if self.is_consistent() {
            Ok(self)
        } else {
            Err(ApplicationError::Mismatch {
                order: self.order,
                recursive: self.recursive,
                iterative: self.iterative,
            })
        }
    }
}

/// Runs traversals according to the loaded settings.
pub struct TraversalService {
    settings: Settings,
}

impl TraversalService {
    /// Create a new traversal service.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run every configured strategy for every configured order, order by order.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&self, root: Option<&Node>) -> ApplicationResult<Vec<TraversalReport>> {
        let mut reports = Vec::new();
        for &order in &self.settings.orders {
            for &strategy in &self.settings.strategies {
                let values = traverse(root, order, strategy)?;
                debug!(%order, %strategy, count = values.len(), "traversal finished");
                reports.push(TraversalReport {
                    order,
                    strategy,
                    values,
                });
            }
        }
        info!("Ran {} traversals", reports.len());
        Ok(reports)
    }

    /// Compare recursive and iterative results for every configured order.
    ///
    /// Mismatches are returned, not raised; see [`Self::verify_strict`].
    #[instrument(level = "debug", skip_all)]
    pub fn verify(&self, root: Option<&Node>) -> ApplicationResult<Vec<Verification>> {
        let mut verifications = Vec::new();
        for &order in &self.settings.orders {
            let verification = Verification {
                order,
                recursive: traverse(root, order, Strategy::Recursive)?,
                iterative: traverse(root, order, Strategy::Iterative)?,
            };
            if !verification.is_consistent() {
                warn!(%order, "recursive and iterative traversals disagree");
            }
            verifications.push(verification);
        }
        Ok(verifications)
    }

    /// Like [`Self::verify`] but fails on the first inconsistent order.
    pub fn verify_strict(&self, root: Option<&Node>) -> ApplicationResult<Vec<Verification>> {
        self.verify(root)?
            .into_iter()
            .map(Verification::into_result)
            .collect()
    }
}
