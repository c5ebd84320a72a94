//! Ordered chains of transformers.

use polars::prelude::DataFrame;
use tracing::{debug, info_span};

use frame_model::{PipelineConfig, Result, TransformError, TransformerSpec};

use crate::base::{BASE_TRANSFORMER, BaseTransformer};
use crate::dates::{DATE_DIFFERENCE_TRANSFORMER, DateDifferenceTransformer};
use crate::transformer::Transformer;

/// Build a single transformer from a configuration step.
pub fn build_transformer(spec: &TransformerSpec) -> Result<Box<dyn Transformer>> {
    let params = spec.params_value();
    match spec.transformer.as_str() {
        DATE_DIFFERENCE_TRANSFORMER => Ok(Box::new(DateDifferenceTransformer::from_value(
            &params,
        )?)),
        BASE_TRANSFORMER => Ok(Box::new(BaseTransformer::from_value(&params)?)),
        other => Err(TransformError::UnknownTransformer {
            name: other.to_string(),
        }),
    }
}

/// Transformers applied one after another.
///
/// The first step receives the caller's frame, so its `copy` flag decides
/// whether the caller sees the first step's output. Later steps work on
/// the intermediate frames.
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Transformer>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every step of `config`, failing on the first invalid one.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let steps = config
            .steps
            .iter()
            .map(build_transformer)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { steps })
    }

    #[must_use]
    pub fn with_step(mut self, step: impl Transformer + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Names of the steps, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Columns written by any step, in first-written order without repeats.
    pub fn output_columns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.steps.iter().flat_map(|step| step.output_columns()) {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
        names
    }

    /// Fit each step on the output of the steps before it.
    pub fn fit(&mut self, frame: &DataFrame) -> Result<()> {
        let mut current = frame.clone();
        for (index, step) in self.steps.iter_mut().enumerate() {
            let _span = info_span!("fit_step", index, transformer = step.name()).entered();
            step.fit(&current)?;
            current = step.transform(&mut current)?;
        }
        Ok(())
    }

    /// Thread `frame` through every step.
    pub fn transform(&self, frame: &mut DataFrame) -> Result<DataFrame> {
        let mut steps = self.steps.iter().enumerate();
        let Some((_, first)) = steps.next() else {
            return Ok(frame.clone());
        };

        let mut current = {
            let _span = info_span!("step", index = 0usize, transformer = first.name()).entered();
            first.transform(frame)?
        };
        for (index, step) in steps {
            let _span = info_span!("step", index, transformer = step.name()).entered();
            current = step.transform(&mut current)?;
        }

        debug!(
            steps = self.steps.len(),
            width = current.width(),
            "pipeline applied"
        );
        Ok(current)
    }

    pub fn fit_transform(&mut self, frame: &mut DataFrame) -> Result<DataFrame> {
        self.fit(frame)?;
        self.transform(frame)
    }
}
