use std::collections::BTreeMap;

use crate::error::FilterError;
use crate::image::Image;

use super::spec::FilterSpec;

/// The one capability every registered filter provides.
///
/// `params` holds exactly the registered arity of numbers when the arity is
/// non-zero; zero-arity filters receive whatever was given and ignore it.
pub type FilterFn = fn(&mut Image, &[f32]) -> Result<(), FilterError>;

/// A named transformation and the number of parameters it takes.
#[derive(Clone, Copy, Debug)]
pub struct RegisteredFilter {
    pub arity: usize,
    pub apply: FilterFn,
    /// Human-readable name used in status messages.
    pub label: &'static str,
}

/// Maps filter names (as typed after the dash) to transformations.
#[derive(Clone, Debug, Default)]
pub struct FilterRegistry {
    filters: BTreeMap<String, RegisteredFilter>,
}

impl FilterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in filters: `crop`, `gs`, `neg`, `blur`, `sharp`, `thermo`
    /// and `edge`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("crop", 2, "Crop", apply_crop);
        registry.register("gs", 0, "Grayscale", |img, _| {
            super::grayscale(img);
            Ok(())
        });
        registry.register("neg", 0, "Negative", |img, _| {
            super::negative(img);
            Ok(())
        });
        registry.register("blur", 1, "Gaussian Blur", apply_blur);
        registry.register("sharp", 0, "Sharpening", |img, _| {
            super::sharpen(img);
            Ok(())
        });
        registry.register("thermo", 0, "Thermo", |img, _| {
            super::thermo(img);
            Ok(())
        });
        registry.register("edge", 1, "Edge Detection", apply_edge);
        registry
    }

    /// Add or replace a filter.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        label: &'static str,
        apply: FilterFn,
    ) -> &mut Self {
        self.filters.insert(
            name.into(),
            RegisteredFilter {
                arity,
                apply,
                label,
            },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredFilter> {
        self.filters.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.filters.keys().map(String::as_str)
    }

    /// Look up `spec`, check its parameter count and run it.
    pub fn apply(&self, image: &mut Image, spec: &FilterSpec) -> Result<&RegisteredFilter, FilterError> {
        let filter = self
            .get(&spec.name)
            .ok_or_else(|| FilterError::UnknownFilter(spec.name.clone()))?;
        if filter.arity != 0 && spec.params.len() != filter.arity {
            return Err(FilterError::ArgumentCount {
                filter: spec.name.clone(),
                expected: filter.arity,
                actual: spec.params.len(),
            });
        }
        (filter.apply)(image, &spec.params)?;
        Ok(filter)
    }
}

fn invalid(filter: &str, value: f32) -> FilterError {
    FilterError::InvalidParameter {
        filter: filter.to_owned(),
        value: value.to_string(),
    }
}

/// Crop sizes truncate toward zero, like an integer cast.
fn dimension(filter: &str, value: f32) -> Result<u32, FilterError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(filter, value));
    }
    // Saturates above u32::MAX; crop clamps to the image anyway.
    Ok(value as u32)
}

fn apply_crop(image: &mut Image, params: &[f32]) -> Result<(), FilterError> {
    let width = dimension("crop", params[0])?;
    let height = dimension("crop", params[1])?;
    super::crop(image, width, height);
    Ok(())
}

/// Sigma only enters the weights squared, so its sign does not matter.
fn apply_blur(image: &mut Image, params: &[f32]) -> Result<(), FilterError> {
    let sigma = params[0];
    if !sigma.is_finite() || sigma == 0.0 {
        return Err(invalid("blur", sigma));
    }
    super::gaussian_blur(image, sigma.abs());
    Ok(())
}

fn apply_edge(image: &mut Image, params: &[f32]) -> Result<(), FilterError> {
    let threshold = params[0];
    if threshold.is_nan() {
        return Err(invalid("edge", threshold));
    }
    super::edge_detect(image, threshold);
    Ok(())
}
