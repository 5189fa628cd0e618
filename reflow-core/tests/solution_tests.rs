//! Copy-on-write behaviour of `Solution` across chains of updates.
//!
//! Each `#[case]` is isolated — no shared state.

use reflow_core::{Document, DocumentId, Solution};
use rstest::rstest;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn solution(n: usize) -> Solution {
    Solution::new((0..n).map(|i| {
        Document::new(
            format!("d{i}"),
            format!("src/f{i}.cs"),
            format!("text {i}"),
        )
    }))
}

fn id(i: usize) -> DocumentId {
    DocumentId::from(format!("d{i}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[rstest]
#[case::single_update(3, vec![1])]
#[case::every_document(3, vec![0, 1, 2])]
#[case::same_document_twice(2, vec![0, 0])]
fn every_snapshot_in_a_chain_stays_valid(#[case] size: usize, #[case] updates: Vec<usize>) {
    let mut snapshots = vec![solution(size)];
    for (step, target) in updates.iter().enumerate() {
        let last = snapshots.last().expect("non-empty");
        let next = last
            .with_document_text(&id(*target), format!("step {step}"))
            .expect("update");
        snapshots.push(next);
    }

    for (version, snapshot) in snapshots.iter().enumerate() {
        assert_eq!(snapshot.version(), version as u64);
        assert_eq!(snapshot.len(), size);
    }

    // The original is unaffected by anything built on top of it.
    for i in 0..size {
        let doc = snapshots[0].document(&id(i)).expect("doc");
        assert_eq!(doc.text().as_str(), format!("text {i}"));
    }
}

#[rstest]
#[case(0)]
#[case(4)]
fn documents_iterate_in_id_order(#[case] size: usize) {
    let s = solution(size);
    let ids: Vec<_> = s.documents().map(|d| d.id().clone()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(s.is_empty(), size == 0);
}

#[test]
fn snapshots_can_be_read_from_other_threads() {
    let s0 = solution(2);
    let reader = {
        let captured = s0.clone();
        std::thread::spawn(move || {
            captured
                .document(&id(1))
                .map(|d| d.text().as_str().to_owned())
        })
    };
    let s1 = s0.with_document_text(&id(1), "changed").expect("update");

    assert_eq!(reader.join().expect("join").as_deref(), Some("text 1"));
    assert_eq!(s1.document(&id(1)).unwrap().text().as_str(), "changed");
    assert!(s0.ptr_eq(&s0.clone()));
    assert!(!s0.ptr_eq(&s1));
}
