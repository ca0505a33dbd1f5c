//! Plain-text tables.

use meditrack_core::{Database, Hospital, PatientRecord, RecordStore};

/// Placeholder for an unset next-visit date.
const NO_NEXT_VISIT: &str = "Set Date";

/// Lay out rows under a header with columns padded to the widest cell.
fn table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(header.to_vec())];
    out.extend(rows.iter().map(|row| line(row.iter().map(String::as_str).collect())));
    out.join("\n")
}

/// Dashboard heading, count line, and the records table.
pub fn render_view(store: &RecordStore<Database>, view: &[PatientRecord]) -> String {
    let rows: Vec<Vec<String>> = view
        .iter()
        .map(|r| {
            let next = if r.next_visit_date.is_empty() {
                NO_NEXT_VISIT
            } else {
                r.next_visit_date.as_str()
            };
            vec![
                r.id.clone(),
                r.visit_date.clone(),
                r.patient_name.clone(),
                r.phone_number.clone(),
                store.hospital_label(&r.hospital_id).to_string(),
                r.diagnosis.clone(),
                next.to_string(),
                r.status.label().to_string(),
                r.doctor_comments.clone(),
            ]
        })
        .collect();

    let mut out = format!(
        "{}\n{} patient records found\n",
        store.dashboard_title(),
        view.len()
    );
    if !rows.is_empty() {
        out.push('\n');
        out.push_str(&table(
            &[
                "ID", "VISIT", "PATIENT", "PHONE", "HOSPITAL", "DIAGNOSIS", "NEXT VISIT",
                "STATUS", "COMMENTS",
            ],
            &rows,
        ));
        out.push('\n');
    }
    out
}

/// Hospitals with the number of records that reference each.
pub fn render_hospitals(hospitals: &[Hospital], records: &[PatientRecord]) -> String {
    if hospitals.is_empty() {
        return "No hospitals added yet.\n".to_string();
    }

    let rows: Vec<Vec<String>> = hospitals
        .iter()
        .map(|h| {
            let count = records.iter().filter(|r| r.hospital_id == h.id).count();
            vec![h.id.clone(), h.name.clone(), h.location.clone(), count.to_string()]
        })
        .collect();

    let mut out = table(&["ID", "NAME", "LOCATION", "RECORDS"], &rows);
    out.push('\n');
    out
}
