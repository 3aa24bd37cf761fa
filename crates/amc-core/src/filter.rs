// ── Pending-request filter ──
//
// Drops requests the SAS is already working on for a device. Comparison
// is by exact serialized body, so an identical request generated again on
// the next pass is suppressed until the pending one is answered.

use std::collections::HashSet;

use crate::action::Action;
use crate::sas::Request;

/// Keep the requests whose body does not appear in `pending`, in order.
pub fn filter(pending: &[String], requests: Vec<Request>) -> Vec<Request> {
    if pending.is_empty() {
        return requests;
    }
    let pending: HashSet<&str> = pending.iter().map(String::as_str).collect();
    requests
        .into_iter()
        .filter(|request| !pending.contains(request.body().as_str()))
        .collect()
}

/// Same rule over an action list. `DeleteCbsd` actions are never pending
/// and always pass through.
pub fn filter_actions(pending: &[String], actions: Vec<Action>) -> Vec<Action> {
    if pending.is_empty() {
        return actions;
    }
    let pending: HashSet<&str> = pending.iter().map(String::as_str).collect();
    actions
        .into_iter()
        .filter(|action| match action {
            Action::Request(request) => !pending.contains(request.body().as_str()),
            Action::DeleteCbsd { .. } => true,
        })
        .collect()
}
