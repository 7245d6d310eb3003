//! Checks across a render surface: the set of records shown together.

use std::collections::HashMap;

use crate::issue::FieldIssue;
use crate::records::ComponentRecord;

/// Report each record whose id was already used by an earlier record.
///
/// Issues are errors at `[i].id`, where `i` is the index of the repeat.
pub fn check_surface(records: &[ComponentRecord]) -> Vec<FieldIssue> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut issues = Vec::new();
    for (i, record) in records.iter().enumerate() {
        match first_seen.get(record.id()) {
            Some(first) => issues.push(FieldIssue::error(
                format!("[{i}].id"),
                format!("duplicate id {:?}; first used by [{first}]", record.id()),
            )),
            None => {
                first_seen.insert(record.id(), i);
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::sanitize_component;
    use cosmo_core::{ComponentKind, SequentialIds};
    use serde_json::json;
    use std::sync::Arc;

    fn record(kind: ComponentKind, id: &str) -> ComponentRecord {
        sanitize_component(kind, &json!({"id": id}), Arc::new(SequentialIds::new()))
    }

    #[test]
    fn unique_ids_pass() {
        let surface = [
            record(ComponentKind::HudCard, "a"),
            record(ComponentKind::Timer, "b"),
        ];
        assert!(check_surface(&surface).is_empty());
    }

    #[test]
    fn repeats_are_reported_at_their_index() {
        let surface = [
            record(ComponentKind::HudCard, "a"),
            record(ComponentKind::Timer, "b"),
            record(ComponentKind::Tooltip, "a"),
            record(ComponentKind::ProgressRing, "a"),
        ];
        let issues = check_surface(&surface);
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["[2].id", "[3].id"]);
        assert!(issues.iter().all(FieldIssue::is_error));
        assert!(issues[0].message.contains("[0]"));
    }
}
