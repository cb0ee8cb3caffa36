mod common;
use common::{entry, memory_store};
use rclinicbook::core::filter::RecordFilter;
use rclinicbook::core::totals::Totals;
use rclinicbook::db::pool::DbPool;
use rclinicbook::db::queries::{
    delete_record, get_record, insert_record, query_records, update_record,
};
use rclinicbook::errors::AppError;
use rclinicbook::models::{Period, WorkEntry};

fn dates(pool: &DbPool, filter: &RecordFilter) -> Vec<String> {
    query_records(&pool.conn, filter)
        .unwrap()
        .into_iter()
        .map(|r| r.entry.work_date)
        .collect()
}

#[test]
fn insert_then_query_round_trips() {
    let pool = memory_store();
    let e = WorkEntry {
        work_date: "2024-01-03".into(),
        work_amount: 150.75,
        expense_amount: 12.5,
        doctor_name: "Ali".into(),
        worker_name: "حليمة".into(),
        worker_amount: 40.0,
        withdraw_amount: 5.25,
        place_rent: 25.0,
        file_number: 987,
        period: Some(Period::Evening),
    };

    let id = insert_record(&pool.conn, &e).unwrap();
    let all = query_records(&pool.conn, &RecordFilter::all()).unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].entry, e);
}

#[test]
fn ids_increase_and_are_never_reused() {
    let pool = memory_store();
    let a = insert_record(&pool.conn, &entry("2024-01-01", "Ali", 1.0)).unwrap();
    let b = insert_record(&pool.conn, &entry("2024-01-01", "Ali", 1.0)).unwrap();
    assert!(b > a);

    delete_record(&pool.conn, b).unwrap();
    let c = insert_record(&pool.conn, &entry("2024-01-01", "Ali", 1.0)).unwrap();
    assert!(c > b, "id {b} was handed out again");
}

#[test]
fn update_overwrites_every_field() {
    let pool = memory_store();
    let id = insert_record(&pool.conn, &entry("2024-01-01", "Ali", 100.0)).unwrap();

    let new_fields = WorkEntry {
        work_date: "2024-02-02".into(),
        work_amount: 0.0,
        expense_amount: 1.5,
        doctor_name: "Sara".into(),
        worker_name: "حليمة".into(),
        worker_amount: 2.0,
        withdraw_amount: 3.0,
        place_rent: 4.0,
        file_number: 7,
        period: Some(Period::Evening),
    };
    update_record(&pool.conn, id, &new_fields).unwrap();

    let fetched = get_record(&pool.conn, id).unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.entry, new_fields);
}

#[test]
fn update_of_missing_id_is_not_found_and_changes_nothing() {
    let pool = memory_store();
    let id = insert_record(&pool.conn, &entry("2024-01-01", "Ali", 100.0)).unwrap();
    let before = query_records(&pool.conn, &RecordFilter::all()).unwrap();

    let err = update_record(&pool.conn, id + 100, &entry("2030-01-01", "X", 1.0)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(n) if n == id + 100));

    let after = query_records(&pool.conn, &RecordFilter::all()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn delete_is_idempotent() {
    let pool = memory_store();
    let id = insert_record(&pool.conn, &entry("2024-01-01", "Ali", 100.0)).unwrap();

    assert!(delete_record(&pool.conn, id).unwrap());
    assert!(!delete_record(&pool.conn, id).unwrap());

    assert!(matches!(get_record(&pool.conn, id), Err(AppError::NotFound(_))));
    assert!(query_records(&pool.conn, &RecordFilter::all()).unwrap().is_empty());
}

#[test]
fn unfiltered_query_lists_newest_date_first() {
    let pool = memory_store();
    for d in ["2024-01-01", "2024-01-03", "2024-01-02"] {
        insert_record(&pool.conn, &entry(d, "Ali", 1.0)).unwrap();
    }

    assert_eq!(
        dates(&pool, &RecordFilter::all()),
        vec!["2024-01-03", "2024-01-02", "2024-01-01"]
    );
}

#[test]
fn same_date_lists_newest_id_first() {
    let pool = memory_store();
    let first = insert_record(&pool.conn, &entry("2024-01-01", "Ali", 1.0)).unwrap();
    let second = insert_record(&pool.conn, &entry("2024-01-01", "Sara", 2.0)).unwrap();
    let older = insert_record(&pool.conn, &entry("2023-12-31", "Ali", 3.0)).unwrap();

    let ids: Vec<i64> = query_records(&pool.conn, &RecordFilter::all())
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![second, first, older]);
}

#[test]
fn doctor_filter_is_exact_and_case_sensitive() {
    let pool = memory_store();
    insert_record(&pool.conn, &entry("2024-01-01", "Ali", 1.0)).unwrap();
    insert_record(&pool.conn, &entry("2024-01-02", "Alia", 1.0)).unwrap();

    let only = |doctor: &str| {
        query_records(&pool.conn, &RecordFilter::new(None, Some(doctor)))
            .unwrap()
            .into_iter()
            .map(|r| r.entry.doctor_name)
            .collect::<Vec<_>>()
    };

    assert_eq!(only("Ali"), vec!["Ali"]);
    assert!(only("ali").is_empty());
    assert!(only("Al").is_empty());
}

#[test]
fn date_and_doctor_filters_combine() {
    let pool = memory_store();
    insert_record(&pool.conn, &entry("2024-01-01", "Ali", 1.0)).unwrap();
    let hit = insert_record(&pool.conn, &entry("2024-01-02", "Ali", 2.0)).unwrap();
    insert_record(&pool.conn, &entry("2024-01-02", "Sara", 3.0)).unwrap();

    let rows = query_records(
        &pool.conn,
        &RecordFilter::new(Some("2024-01-02"), Some("Ali")),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, hit);

    assert_eq!(
        dates(&pool, &RecordFilter::new(Some("2024-01-02"), None)),
        vec!["2024-01-02", "2024-01-02"]
    );
}

#[test]
fn blank_filter_values_return_everything() {
    let pool = memory_store();
    insert_record(&pool.conn, &entry("2024-01-01", "Ali", 1.0)).unwrap();
    insert_record(&pool.conn, &entry("2024-01-02", "Sara", 1.0)).unwrap();

    assert_eq!(dates(&pool, &RecordFilter::new(Some("  "), Some(""))).len(), 2);
}

#[test]
fn non_finite_amounts_are_rejected() {
    let pool = memory_store();
    let mut bad = entry("2024-01-01", "Ali", f64::NAN);
    assert!(matches!(
        insert_record(&pool.conn, &bad),
        Err(AppError::Validation(_))
    ));

    let id = insert_record(&pool.conn, &entry("2024-01-01", "Ali", 1.0)).unwrap();
    bad.work_amount = 1.0;
    bad.place_rent = f64::INFINITY;
    assert!(matches!(
        update_record(&pool.conn, id, &bad),
        Err(AppError::Validation(_))
    ));

    let rows = query_records(&pool.conn, &RecordFilter::all()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entry.place_rent, 20.0);
}

#[test]
fn rows_from_older_app_versions_are_readable() {
    let pool = memory_store();
    pool.conn
        .execute(
            "INSERT INTO daily_work (work_date, work_amount, expense_amount, doctor_name,
                                     worker_name, worker_amount, withdraw_amount,
                                     place_rent, file_number, period)
             VALUES ('2024-03-01', 200, NULL, 'Ali', NULL, 50.0, NULL, NULL, NULL, 'مسائي')",
            [],
        )
        .unwrap();

    // the first app stored whatever the period dropdown held, even nothing
    pool.conn
        .execute(
            "INSERT INTO daily_work (work_date, work_amount, doctor_name, period)
             VALUES ('2024-03-02', 80, 'Sara', NULL)",
            [],
        )
        .unwrap();

    let rows = query_records(&pool.conn, &RecordFilter::all()).unwrap();
    assert_eq!(rows.len(), 2);

    let no_period = &rows[0].entry;
    assert_eq!(no_period.work_date, "2024-03-02");
    assert_eq!(no_period.period, None);
    assert_eq!(no_period.period_label(), "");

    let e = &rows[1].entry;
    assert_eq!(e.work_amount, 200.0);
    assert_eq!(e.expense_amount, 0.0);
    assert_eq!(e.worker_name, "");
    assert_eq!(e.file_number, 0);
    assert_eq!(e.period, Some(Period::Evening));

    assert_eq!(Totals::from_records(&rows).work, 280.0);
}

#[test]
fn unknown_stored_period_is_a_validation_error() {
    let pool = memory_store();
    pool.conn
        .execute(
            "INSERT INTO daily_work (work_date, period) VALUES ('2024-03-01', 'night')",
            [],
        )
        .unwrap();

    let err = query_records(&pool.conn, &RecordFilter::all()).unwrap_err();
    assert!(matches!(err, AppError::Validation(m) if m.contains("night")));
}

#[test]
fn unopenable_database_is_storage_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("sub").join("clinic.sqlite");

    assert!(matches!(
        DbPool::new(&path),
        Err(AppError::StorageUnavailable(_))
    ));
}
