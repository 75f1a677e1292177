use enough::Stop;
use log::{error, info};

use crate::error::{BitmapError, FilterError};
use crate::image::Image;

use super::registry::FilterRegistry;
use super::spec::FilterSpec;

/// A filter that was not applied, and why.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedFilter {
    /// Position in the requested sequence.
    pub index: usize,
    pub error: FilterError,
}

/// Outcome of one [`Pipeline::apply`] run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipelineReport {
    /// Names of the filters that ran, in order.
    pub applied: Vec<String>,
    pub skipped: Vec<SkippedFilter>,
}

impl PipelineReport {
    pub fn all_applied(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Runs filter specs against an image, strictly in order.
#[derive(Clone, Debug)]
pub struct Pipeline {
    registry: FilterRegistry,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(FilterRegistry::with_defaults())
    }
}

impl Pipeline {
    pub fn new(registry: FilterRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }

    /// Apply every spec in order.
    ///
    /// An unknown name or bad parameters skip only that filter; it is
    /// logged and recorded in the report. Only cancellation stops the run.
    pub fn apply(
        &self,
        image: &mut Image,
        specs: &[FilterSpec],
        stop: impl Stop,
    ) -> Result<PipelineReport, BitmapError> {
        let mut report = PipelineReport::default();
        for (index, spec) in specs.iter().enumerate() {
            stop.check()?;
            match self.registry.apply(image, spec) {
                Ok(filter) => {
                    info!("{} filter was applied", filter.label);
                    report.applied.push(spec.name.clone());
                }
                Err(error) => {
                    error!("{error}");
                    report.skipped.push(SkippedFilter { index, error });
                }
            }
        }
        Ok(report)
    }
}
