//! Property tests for view computation.

use meditrack_core::models::{
    FilterState, HospitalSelector, PatientRecord, RecordStatus, SortField, SortOrder, SortSpec,
};
use meditrack_core::query::{compute_view, matches_date_range, matches_search};
use proptest::prelude::*;

fn date() -> impl Strategy<Value = String> {
    (2022u32..=2024, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

fn optional_date() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), date()]
}

fn record() -> impl Strategy<Value = PatientRecord> {
    (
        prop_oneof![Just("h1"), Just("h2"), Just("h3")],
        date(),
        "[A-Za-z]{1,6} [A-Za-z]{1,6}",
        "555-[0-9]{4}",
        prop_oneof![Just("Migraine"), Just("Asthma"), Just("Flu"), Just("")],
        optional_date(),
    )
        .prop_map(|(hospital, visit, name, phone, diagnosis, next)| PatientRecord {
            id: String::new(),
            hospital_id: hospital.to_string(),
            visit_date: visit,
            patient_name: name,
            phone_number: phone,
            diagnosis: diagnosis.to_string(),
            clinical_findings: String::new(),
            next_visit_date: next,
            doctor_comments: String::new(),
            status: RecordStatus::Active,
        })
}

fn records() -> impl Strategy<Value = Vec<PatientRecord>> {
    prop::collection::vec(record(), 0..30).prop_map(|mut records| {
        for (i, r) in records.iter_mut().enumerate() {
            r.id = format!("r{i}");
        }
        records
    })
}

fn selector() -> impl Strategy<Value = HospitalSelector> {
    prop_oneof![
        Just(HospitalSelector::All),
        Just(HospitalSelector::hospital("h1")),
        Just(HospitalSelector::hospital("h2")),
    ]
}

fn filters() -> impl Strategy<Value = FilterState> {
    (
        prop_oneof![Just(String::new()), Just("a".to_string()), Just("MIG".to_string()), Just("555-1".to_string())],
        optional_date(),
        optional_date(),
    )
        .prop_map(|(search_query, start_date, end_date)| FilterState {
            search_query,
            start_date,
            end_date,
            ..FilterState::default()
        })
}

fn sort_field() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::VisitDate),
        Just(SortField::PatientName),
        Just(SortField::NextVisitDate),
    ]
}

proptest! {
    #[test]
    fn view_satisfies_every_predicate(records in records(), selector in selector(), filters in filters()) {
        let view = compute_view(&records, &selector, &filters, SortSpec::default());
        let needle = filters.search_query.to_lowercase();

        for r in &view {
            prop_assert!(selector.includes(&r.hospital_id));
            prop_assert!(matches_search(r, &needle));
            prop_assert!(matches_date_range(r, &filters.start_date, &filters.end_date));
        }

        let expected = records
            .iter()
            .filter(|r| selector.includes(&r.hospital_id))
            .filter(|r| matches_search(r, &needle))
            .filter(|r| matches_date_range(r, &filters.start_date, &filters.end_date))
            .count();
        prop_assert_eq!(view.len(), expected);
    }

    #[test]
    fn relaxing_a_filter_never_shrinks(records in records(), selector in selector(), filters in filters()) {
        let sort = SortSpec::default();
        let base = compute_view(&records, &selector, &filters, sort).len();

        let relaxed = [
            FilterState { search_query: String::new(), ..filters.clone() },
            FilterState { start_date: String::new(), ..filters.clone() },
            FilterState { end_date: String::new(), ..filters.clone() },
        ];
        for loosened in &relaxed {
            prop_assert!(compute_view(&records, &selector, loosened, sort).len() >= base);
        }
        prop_assert!(compute_view(&records, &HospitalSelector::All, &filters, sort).len() >= base);
    }

    #[test]
    fn reversing_direction_reverses_distinct_keys(records in records(), field in sort_field()) {
        let filters = FilterState::default();
        let asc = compute_view(&records, &HospitalSelector::All, &filters, SortSpec::new(field, SortOrder::Asc));
        let desc = compute_view(&records, &HospitalSelector::All, &filters, SortSpec::new(field, SortOrder::Desc));

        let position = |view: &[PatientRecord], id: &str| view.iter().position(|r| r.id == id);

        for a in &records {
            for b in &records {
                let (ka, kb) = (field.key(a), field.key(b));
                let (pa, pb) = (position(&asc, &a.id), position(&asc, &b.id));
                let (qa, qb) = (position(&desc, &a.id), position(&desc, &b.id));
                if ka < kb {
                    prop_assert!(pa < pb);
                    prop_assert!(qa > qb);
                } else if ka == kb && a.id != b.id {
                    // stable: both directions keep collection order
                    prop_assert_eq!(pa < pb, qa < qb);
                }
            }
        }
    }

    #[test]
    fn view_never_mutates_input(records in records(), selector in selector(), filters in filters(), field in sort_field()) {
        let snapshot = records.clone();
        let _ = compute_view(&records, &selector, &filters, SortSpec::new(field, SortOrder::Asc));
        prop_assert_eq!(records, snapshot);
    }
}
