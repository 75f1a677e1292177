use core::fmt;

use log::warn;

use crate::error::FilterError;

/// One requested filter: a registry name plus its numeric parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterSpec {
    pub name: String,
    pub params: Vec<f32>,
}

impl FilterSpec {
    pub fn new(name: impl Into<String>, params: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.name)?;
        for p in &self.params {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

/// Split command-line tokens into filter specs, in order.
///
/// A token that parses as a number is a parameter of the current filter
/// (so `-edge -0.1` works); any other token starting with `-` opens a new
/// filter named without the dash. A non-numeric parameter turns its filter
/// into [`FilterError::InvalidParameter`] so the caller can report and skip
/// it. Parameters before the first filter are ignored with a warning.
pub fn parse_filter_args<I, S>(tokens: I) -> Vec<Result<FilterSpec, FilterError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = Vec::new();
    // The filter being collected, plus its first unusable parameter.
    let mut current: Option<(FilterSpec, Option<String>)> = None;

    for token in tokens {
        let token = token.as_ref();
        if let Ok(value) = token.parse::<f32>() {
            match current.as_mut() {
                Some((spec, _)) => spec.params.push(value),
                None => warn!("ignoring parameter {token} given before any filter"),
            }
        } else if let Some(name) = token.strip_prefix('-') {
            parsed.extend(current.take().map(finish));
            current = Some((FilterSpec::new(name, Vec::new()), None));
        } else {
            match current.as_mut() {
                Some((_, bad)) => {
                    bad.get_or_insert_with(|| token.to_owned());
                }
                None => warn!("ignoring parameter {token} given before any filter"),
            }
        }
    }
    parsed.extend(current.take().map(finish));
    parsed
}

fn finish((spec, bad): (FilterSpec, Option<String>)) -> Result<FilterSpec, FilterError> {
    match bad {
        Some(value) => Err(FilterError::InvalidParameter {
            filter: spec.name,
            value,
        }),
        None => Ok(spec),
    }
}
