//! Classification of collected methods into getter and setter candidates.

use std::collections::BTreeMap;

use crate::{
    reflection::{collector::CollectedMethod, namer},
    Result,
};

/// Candidate accessors, grouped by the property name they imply
pub(crate) type CandidateMap = BTreeMap<String, Vec<CollectedMethod>>;

/// Getter and setter candidates of one type
#[derive(Debug, Default)]
pub(crate) struct AccessorCandidates {
    pub getters: CandidateMap,
    pub setters: CandidateMap,
}

/// Splits methods into getter and setter candidates by name and arity.
///
/// A getter is `get…` (longer than 3) or `is…` (longer than 2) with no parameters; a
/// setter is `set…` (longer than 3) with exactly one parameter. Everything else is
/// ignored. A property may end up with several candidates on either side, typically
/// from covariant overrides that differ in return type.
pub(crate) fn classify(methods: Vec<CollectedMethod>) -> Result<AccessorCandidates> {
    let mut candidates = AccessorCandidates::default();

    for collected in methods {
        let name = collected.method.name.as_str();
        let params = collected.method.param_count();

        let target = if namer::is_getter(name) && params == 0 {
            &mut candidates.getters
        } else if namer::is_setter(name) && params == 1 {
            &mut candidates.setters
        } else {
            continue;
        };

        let property = namer::method_to_property(name)?;
        target.entry(property).or_default().push(collected);
    }

    Ok(candidates)
}
