//! Built-in dataset returned when nothing has been stored yet.

use crate::models::{Hospital, PatientRecord, RecordStatus};

fn hospital(id: &str, name: &str, location: &str, color: &str) -> Hospital {
    Hospital {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        color: color.into(),
    }
}

/// Seed hospitals.
pub fn seed_hospitals() -> Vec<Hospital> {
    vec![
        hospital("h1", "City General Hospital", "Downtown", "bg-blue-500"),
        hospital("h2", "St. Mary's Clinic", "West End", "bg-emerald-500"),
        hospital("h3", "Unity Medical Center", "Northside", "bg-purple-500"),
    ]
}

/// Seed patient records.
pub fn seed_records() -> Vec<PatientRecord> {
    vec![
        PatientRecord {
            id: "r1".into(),
            hospital_id: "h1".into(),
            visit_date: "2023-10-25".into(),
            patient_name: "John Doe".into(),
            phone_number: "555-0123".into(),
            diagnosis: "Hypertension".into(),
            clinical_findings: "BP 150/95, complaints of headaches.".into(),
            next_visit_date: "2023-11-25".into(),
            doctor_comments: "Monitor BP daily. Reduce salt intake.".into(),
            status: RecordStatus::FollowUp,
        },
        PatientRecord {
            id: "r2".into(),
            hospital_id: "h1".into(),
            visit_date: "2023-10-26".into(),
            patient_name: "Jane Smith".into(),
            phone_number: "555-0456".into(),
            diagnosis: "Type 2 Diabetes".into(),
            clinical_findings: "HBA1C 7.2%, fatigue.".into(),
            next_visit_date: "2023-11-10".into(),
            doctor_comments: "Prescribed Metformin 500mg.".into(),
            status: RecordStatus::Active,
        },
        PatientRecord {
            id: "r3".into(),
            hospital_id: "h2".into(),
            visit_date: "2023-10-27".into(),
            patient_name: "Robert Brown".into(),
            phone_number: "555-0789".into(),
            diagnosis: "Acute Bronchitis".into(),
            clinical_findings: "Wheezing, persistent cough.".into(),
            next_visit_date: String::new(),
            doctor_comments: "Course of antibiotics completed.".into(),
            status: RecordStatus::Completed,
        },
        PatientRecord {
            id: "r4".into(),
            hospital_id: "h3".into(),
            visit_date: "2023-10-28".into(),
            patient_name: "Emily Davis".into(),
            phone_number: "555-1011".into(),
            diagnosis: "Migraine".into(),
            clinical_findings: "Photophobia, nausea.".into(),
            next_visit_date: "2023-12-01".into(),
            doctor_comments: "Keep a headache diary.".into(),
            status: RecordStatus::FollowUp,
        },
    ]
}
