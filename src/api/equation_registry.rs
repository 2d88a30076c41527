use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CompileError, PlotError, PlotResult};
use crate::expr::{Evaluable, ExpressionCompiler};
use crate::render::Color;

/// Fixed ordered colors assigned to equations by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    colors: Vec<Color>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgb8(0, 0, 255),
                Color::rgb8(255, 0, 0),
                Color::rgb8(0, 128, 0),
                Color::rgb8(255, 165, 0),
                Color::rgb8(128, 0, 128),
                Color::rgb8(165, 42, 42),
            ],
        }
    }
}

impl ColorPalette {
    pub fn new(colors: Vec<Color>) -> PlotResult<Self> {
        let palette = Self { colors };
        palette.validate()?;
        Ok(palette)
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.colors.is_empty() {
            return Err(PlotError::InvalidData(
                "color palette must not be empty".to_owned(),
            ));
        }
        for color in &self.colors {
            color.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color for the `position`-th active equation, cycling through the
    /// palette.
    #[must_use]
    pub fn color_for(&self, position: usize) -> Color {
        match self.colors.len() {
            0 => Color::BLACK,
            len => self.colors[position % len],
        }
    }
}

/// One row of host input: expression text plus its visibility flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationInput {
    pub text: String,
    pub visible: bool,
}

impl EquationInput {
    #[must_use]
    pub fn new(text: impl Into<String>, visible: bool) -> Self {
        Self {
            text: text.into(),
            visible,
        }
    }

    #[must_use]
    pub fn visible(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}

/// Expression that failed to compile, keyed back to its input row.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileFailure {
    pub input_index: usize,
    pub expression: String,
    pub error: CompileError,
}

/// A compiled, colored equation ready for sampling.
pub struct Equation {
    expression: String,
    evaluator: Box<dyn Evaluable>,
    color: Color,
    visible: bool,
    input_index: usize,
}

impl fmt::Debug for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equation")
            .field("expression", &self.expression)
            .field("color", &self.color)
            .field("visible", &self.visible)
            .field("input_index", &self.input_index)
            .finish_non_exhaustive()
    }
}

impl Equation {
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn evaluator(&self) -> &dyn Evaluable {
        self.evaluator.as_ref()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Row of the host input list this equation came from.
    #[must_use]
    pub fn input_index(&self) -> usize {
        self.input_index
    }
}

/// Active equation set, rebuilt wholesale from host input.
#[derive(Debug, Default)]
pub struct EquationRegistry {
    equations: Vec<Equation>,
    failures: IndexMap<usize, CompileFailure>,
}

impl EquationRegistry {
    /// Replaces the active set with everything in `inputs` that compiles.
    ///
    /// Blank rows are skipped silently. Colors are assigned by position among
    /// the compiled rows, so they follow input order rather than identity.
    pub fn rebuild<C>(&mut self, inputs: &[EquationInput], compiler: &C, palette: &ColorPalette)
    where
        C: ExpressionCompiler + ?Sized,
    {
        self.equations.clear();
        self.failures.clear();

        for (input_index, input) in inputs.iter().enumerate() {
            let text = input.text.trim();
            if text.is_empty() {
                continue;
            }
            match compiler.compile(text) {
                Ok(evaluator) => {
                    let color = palette.color_for(self.equations.len());
                    self.equations.push(Equation {
                        expression: text.to_owned(),
                        evaluator,
                        color,
                        visible: input.visible,
                        input_index,
                    });
                }
                Err(error) => {
                    warn!(input_index, expression = text, %error, "equation failed to compile");
                    self.failures.insert(
                        input_index,
                        CompileFailure {
                            input_index,
                            expression: text.to_owned(),
                            error,
                        },
                    );
                }
            }
        }

        debug!(
            active = self.equations.len(),
            failed = self.failures.len(),
            "equation registry rebuilt"
        );
    }

    #[must_use]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Visible equations with their position in the active list.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Equation)> {
        self.equations
            .iter()
            .enumerate()
            .filter(|(_, equation)| equation.visible)
    }

    #[must_use]
    pub fn failures(&self) -> Vec<CompileFailure> {
        self.failures.values().cloned().collect()
    }

    #[must_use]
    pub fn failure_for_input(&self, input_index: usize) -> Option<&CompileFailure> {
        self.failures.get(&input_index)
    }

    pub fn set_visibility(&mut self, index: usize, visible: bool) -> PlotResult<()> {
        let count = self.equations.len();
        let equation = self.equations.get_mut(index).ok_or_else(|| {
            PlotError::InvalidData(format!(
                "equation index {index} is out of range for {count} active equation(s)"
            ))
        })?;
        equation.visible = visible;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorPalette, EquationInput, EquationRegistry};
    use crate::expr::BuiltinCompiler;

    #[test]
    fn colors_follow_position_among_compiled_rows() {
        let palette = ColorPalette::default();
        let mut registry = EquationRegistry::default();
        registry.rebuild(
            &[
                EquationInput::visible("x"),
                EquationInput::visible("   "),
                EquationInput::visible("x +"),
                EquationInput::visible("x^2"),
            ],
            &BuiltinCompiler,
            &palette,
        );

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.equations()[0].color(), palette.color_for(0));
        assert_eq!(registry.equations()[1].color(), palette.color_for(1));
        assert_eq!(registry.equations()[1].input_index(), 3);
        assert!(registry.failure_for_input(2).is_some());
        assert!(registry.failure_for_input(1).is_none());
    }

    #[test]
    fn palette_wraps_around() {
        let palette = ColorPalette::default();
        let len = palette.colors().len();
        assert_eq!(palette.color_for(len + 1), palette.color_for(1));
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(ColorPalette::new(Vec::new()).is_err());
    }
}
