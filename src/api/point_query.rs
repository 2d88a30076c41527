use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{EvaluationError, PlotError, PlotResult};
use crate::expr::{ExpressionCompiler, evaluate_finite};
use crate::render::Renderer;

use super::label_format::format_point;
use super::{Equation, PlotEngine};

/// Outcome of evaluating one equation at a queried `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointQueryStatus {
    Defined { y: f64 },
    /// Evaluation produced NaN or an infinity.
    Undefined,
    EvaluationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointQueryResult {
    /// Position in the active equation list.
    pub equation_index: usize,
    pub expression: String,
    pub x: f64,
    pub status: PointQueryStatus,
}

impl PointQueryResult {
    fn evaluate(equation_index: usize, equation: &Equation, x: f64) -> Self {
        let status = match evaluate_finite(equation.evaluator(), x) {
            Ok(y) => PointQueryStatus::Defined { y },
            Err(EvaluationError::NonFinite { .. }) => PointQueryStatus::Undefined,
            Err(error) => PointQueryStatus::EvaluationFailed(error.to_string()),
        };
        Self {
            equation_index,
            expression: equation.expression().to_owned(),
            x,
            status,
        }
    }

    #[must_use]
    pub fn y(&self) -> Option<f64> {
        match self.status {
            PointQueryStatus::Defined { y } => Some(y),
            _ => None,
        }
    }

    /// `"(x, y)"` with two decimals for defined results.
    #[must_use]
    pub fn formatted(&self) -> Option<String> {
        self.y().map(|y| format_point(self.x, y))
    }
}

impl<R: Renderer, C: ExpressionCompiler> PlotEngine<R, C> {
    /// Evaluates every visible equation at `x`.
    pub fn query_point(&self, x: f64) -> PlotResult<Vec<PointQueryResult>> {
        if !x.is_finite() {
            return Err(PlotError::InvalidData(format!(
                "query x must be finite, got {x}"
            )));
        }
        let results: Vec<_> = self
            .equations
            .visible()
            .map(|(index, equation)| PointQueryResult::evaluate(index, equation, x))
            .collect();
        trace!(x, results = results.len(), "point query");
        Ok(results)
    }

    /// Same as [`Self::query_point`], then recenters the viewport on the
    /// first visible equation's point when it is defined there.
    pub fn query_point_and_center(&mut self, x: f64) -> PlotResult<Vec<PointQueryResult>> {
        let results = self.query_point(x)?;
        if let Some(y) = results.first().and_then(PointQueryResult::y) {
            self.viewport.center_on(x, y)?;
            self.interaction.set_hover(None);
            self.render_if_auto()?;
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::{PointQueryResult, PointQueryStatus};

    #[test]
    fn only_defined_results_format() {
        let defined = PointQueryResult {
            equation_index: 0,
            expression: "x^2".to_owned(),
            x: 3.0,
            status: PointQueryStatus::Defined { y: 9.0 },
        };
        let undefined = PointQueryResult {
            status: PointQueryStatus::Undefined,
            ..defined.clone()
        };
        assert_eq!(defined.formatted().as_deref(), Some("(3.00, 9.00)"));
        assert_eq!(undefined.formatted(), None);
    }
}
