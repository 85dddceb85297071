//! Configuration validation using Validation.
//!
//! Every check runs, and all issues are reported together.

use crate::config::error::ConfigIssue;
use crate::config::MachineConfig;
use crate::core::{Event, State};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigIssue>>;

fn pass_or(issue: Option<ConfigIssue>) -> Check {
    match issue {
        Some(issue) => Validation::fail(issue),
        None => Validation::success(()),
    }
}

pub(crate) fn validate<S: State, E: Event>(config: &MachineConfig<S, E>) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut declared: HashSet<&S> = HashSet::new();

    for (state, _) in &config.states {
        let duplicate = !declared.insert(state);
        checks.push(pass_or(duplicate.then(|| ConfigIssue::DuplicateState {
            state: state.name().to_string(),
        })));
    }

    checks.push(pass_or((!declared.contains(&config.initial)).then(|| {
        ConfigIssue::UnknownInitialState {
            state: config.initial.name().to_string(),
        }
    })));

    for (state, definition) in &config.states {
        let mut events: HashSet<&E> = HashSet::new();
        for (event, target) in &definition.transitions {
            if !events.insert(event) {
                checks.push(Validation::fail(ConfigIssue::DuplicateEvent {
                    state: state.name().to_string(),
                    event: event.name().to_string(),
                }));
            }
            if !declared.contains(target) {
                checks.push(Validation::fail(ConfigIssue::UnknownTarget {
                    state: state.name().to_string(),
                    event: event.name().to_string(),
                    target: target.name().to_string(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
