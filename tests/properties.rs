use std::collections::{HashMap, HashSet};

use proctree::snapshot::DEFAULT_INDENT;
use proctree::{AttachPolicy, ProcessRecord, Snapshot};
use proptest::prelude::*;

fn records() -> impl Strategy<Value = Vec<ProcessRecord>> {
    prop::collection::vec((1u32..64, 0u32..64), 0..96).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(pid, ppid)| ProcessRecord::new(pid, ppid, format!("p{pid}")))
            .collect()
    })
}

fn policy() -> impl Strategy<Value = AttachPolicy> {
    prop_oneof![Just(AttachPolicy::SinglePass), Just(AttachPolicy::Deferred)]
}

proptest! {
    #[test]
    fn every_process_is_visited_exactly_once(records in records(), policy in policy()) {
        let distinct: HashSet<u32> = records.iter().map(|r| r.pid).collect();
        let snapshot = Snapshot::assemble(records, policy);

        prop_assert_eq!(snapshot.len(), distinct.len());

        let mut seen = HashSet::new();
        for (_, node) in snapshot.walk() {
            prop_assert!(seen.insert(node.pid()), "pid {} visited twice", node.pid());
        }
        prop_assert_eq!(seen, distinct);
    }

    #[test]
    fn forest_has_single_parents_and_no_cycles(records in records(), policy in policy()) {
        let snapshot = Snapshot::assemble(records, policy);

        let mut owners: HashMap<u32, u32> = HashMap::new();
        for pid in snapshot.pids() {
            for &child in snapshot.get(pid).unwrap().children() {
                prop_assert!(owners.insert(child, pid).is_none(), "pid {} has two parents", child);
                prop_assert_eq!(snapshot.get(child).unwrap().parent(), Some(pid));
            }
        }
        for &root in snapshot.roots() {
            prop_assert!(!owners.contains_key(&root));
        }
        for pid in snapshot.pids() {
            let is_root = snapshot.roots().contains(&pid);
            prop_assert!(is_root != owners.contains_key(&pid));
        }
    }

    #[test]
    fn indentation_matches_ancestor_count(records in records(), policy in policy()) {
        let snapshot = Snapshot::assemble(records, policy);
        let lines = snapshot.render(DEFAULT_INDENT);

        prop_assert_eq!(lines.len(), snapshot.len());
        for (line, (depth, node)) in lines.iter().zip(snapshot.walk()) {
            let indent = line.len() - line.trim_start_matches(' ').len();
            prop_assert_eq!(indent, depth * DEFAULT_INDENT.len());
            prop_assert_eq!(snapshot.depth(node.pid()), Some(depth));
            prop_assert_eq!(line.trim_start_matches(' '), format!("[{}]{}", node.pid(), node.name()));
        }
    }

    #[test]
    fn rendering_is_idempotent(records in records(), policy in policy()) {
        let snapshot = Snapshot::assemble(records, policy);
        prop_assert_eq!(snapshot.render(DEFAULT_INDENT), snapshot.render(DEFAULT_INDENT));
    }
}
