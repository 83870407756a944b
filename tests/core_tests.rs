use chrono::{NaiveTime, TimeDelta};
use rtimesheet::config::Config;
use rtimesheet::core::add::{AddLogic, AddRequest};
use rtimesheet::core::check::CheckLogic;
use rtimesheet::core::del::DeleteLogic;
use rtimesheet::core::list::{ListFilter, ListLogic};
use rtimesheet::core::projects::ProjectsLogic;
use rtimesheet::errors::AppError;
use rtimesheet::export::ExportLogic;
use rtimesheet::utils::time::parse_duration;

mod common;
use common::{day, fixture_loaded, times};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

const PROJECTS: &[(&str, &str, &str)] = &[("4711", "Portal", "ACME"), ("0815", "Intern", "Self")];

#[test]
fn add_resolves_the_project() {
    let mut loaded = fixture_loaded(&[], PROJECTS);
    let req = AddRequest {
        date: Some(day(3, 4)),
        start: Some(hm(8, 0)),
        end: Some(hm(16, 30)),
        pause: Some(TimeDelta::minutes(30)),
        project: Some("4711".into()),
        description: Some("  Rollout ".into()),
        ..AddRequest::default()
    };

    let entry = AddLogic::apply(&mut loaded, &req).unwrap();
    let work = entry.work().unwrap();
    assert_eq!(work.project_name, "Portal");
    assert_eq!(work.customer, "ACME");
    assert_eq!(work.description, "Rollout");
    assert_eq!(work.net(), TimeDelta::minutes(8 * 60));
    assert_eq!(entry.day_label, "Di");
    assert_eq!(loaded.year.month(3).unwrap().day(4).len(), 1);
}

#[test]
fn add_starts_where_the_previous_entry_ended() {
    let mut loaded = fixture_loaded(&[(day(3, 4), times((8, 0), (12, 0), 0))], &[]);
    let req = AddRequest {
        date: Some(day(3, 4)),
        end: Some(hm(15, 0)),
        ..AddRequest::default()
    };

    let entry = AddLogic::apply(&mut loaded, &req).unwrap();
    assert_eq!(entry.work().unwrap().start.time(), hm(12, 0));
    assert_eq!(entry.row_index, 1);
}

#[test]
fn add_keeps_the_day_ordered() {
    let mut loaded = fixture_loaded(&[(day(3, 4), times((13, 0), (17, 0), 0))], &[]);
    let req = AddRequest {
        date: Some(day(3, 4)),
        start: Some(hm(8, 0)),
        end: Some(hm(12, 0)),
        ..AddRequest::default()
    };

    let entry = AddLogic::apply(&mut loaded, &req).unwrap();
    assert_eq!(entry.row_index, 0);
    let starts: Vec<NaiveTime> = loaded
        .year
        .month(3)
        .unwrap()
        .day(4)
        .iter()
        .map(|e| e.work().unwrap().start.time())
        .collect();
    assert_eq!(starts, vec![hm(8, 0), hm(13, 0)]);
}

#[test]
fn add_rejects_bad_intervals() {
    let mut loaded = fixture_loaded(&[], &[]);

    let backwards = AddRequest {
        date: Some(day(3, 4)),
        start: Some(hm(17, 0)),
        end: Some(hm(9, 0)),
        ..AddRequest::default()
    };
    assert!(matches!(
        AddLogic::apply(&mut loaded, &backwards),
        Err(AppError::EmptyInterval { .. })
    ));

    let no_start = AddRequest {
        date: Some(day(3, 5)),
        end: Some(hm(9, 0)),
        ..AddRequest::default()
    };
    assert!(matches!(
        AddLogic::apply(&mut loaded, &no_start),
        Err(AppError::InvalidTime(_))
    ));

    let long_pause = AddRequest {
        date: Some(day(3, 4)),
        start: Some(hm(8, 0)),
        end: Some(hm(9, 0)),
        pause: Some(TimeDelta::minutes(90)),
        ..AddRequest::default()
    };
    assert!(matches!(
        AddLogic::apply(&mut loaded, &long_pause),
        Err(AppError::InvalidDuration(_))
    ));

    let saturday = AddRequest {
        date: Some(day(3, 8)),
        start: Some(hm(8, 0)),
        end: Some(hm(9, 0)),
        ..AddRequest::default()
    };
    assert!(matches!(
        AddLogic::apply(&mut loaded, &saturday),
        Err(AppError::InvalidDate(_))
    ));

    assert!(loaded.year.month(3).unwrap().is_empty());
}

#[test]
fn edit_changes_only_the_given_fields() {
    let mut loaded = fixture_loaded(
        &[
            (day(3, 4), times((8, 0), (12, 0), 0)),
            (day(3, 4), times((13, 0), (17, 0), 0)),
        ],
        PROJECTS,
    );
    let req = AddRequest {
        date: Some(day(3, 4)),
        end: Some(hm(18, 0)),
        project: Some("0815".into()),
        edit_pair: Some(2),
        ..AddRequest::default()
    };

    let entry = AddLogic::apply(&mut loaded, &req).unwrap();
    let work = entry.work().unwrap();
    assert_eq!(work.start.time(), hm(13, 0));
    assert_eq!(work.end.time(), hm(18, 0));
    assert_eq!(work.project_name, "Intern");

    let missing = AddRequest {
        edit_pair: Some(3),
        ..req.clone()
    };
    assert!(matches!(
        AddLogic::apply(&mut loaded, &missing),
        Err(AppError::InvalidPair(3))
    ));
}

#[test]
fn delete_one_or_all_entries() {
    let mut loaded = fixture_loaded(
        &[
            (day(3, 4), times((8, 0), (12, 0), 0)),
            (day(3, 4), times((13, 0), (17, 0), 0)),
        ],
        &[],
    );

    assert!(matches!(
        DeleteLogic::apply(&mut loaded, day(3, 4), Some(5)),
        Err(AppError::InvalidPair(5))
    ));

    assert_eq!(DeleteLogic::apply(&mut loaded, day(3, 4), Some(1)).unwrap(), 1);
    let remaining = loaded.year.month(3).unwrap().day(4);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].row_index, 0);
    assert_eq!(remaining[0].work().unwrap().start.time(), hm(13, 0));

    assert_eq!(DeleteLogic::apply(&mut loaded, day(3, 4), None).unwrap(), 1);
    let cleared = loaded.year.month(3).unwrap().day(4);
    assert_eq!(cleared.len(), 1);
    assert!(cleared[0].is_placeholder());

    assert!(matches!(
        DeleteLogic::apply(&mut loaded, day(3, 4), None),
        Err(AppError::NoEntriesForDate(_))
    ));
}

#[test]
fn list_filters_by_month_and_day() {
    let loaded = fixture_loaded(
        &[
            (day(1, 2), times((8, 0), (12, 0), 0)),
            (day(3, 4), times((8, 0), (16, 0), 30)),
            (day(3, 5), times((9, 0), (17, 0), 30)),
        ],
        &[],
    );

    assert_eq!(ListLogic::select(&loaded.year, ListFilter::All).len(), 3);
    assert_eq!(ListLogic::select(&loaded.year, ListFilter::Month(3)).len(), 2);
    assert_eq!(ListLogic::select(&loaded.year, ListFilter::Day(day(3, 5))).len(), 1);

    let rows = ListLogic::select(&loaded.year, ListFilter::Month(3));
    let rendered = ListLogic::table(&rows).render();
    assert!(rendered.contains("2025-03-04"));
    assert!(rendered.contains("07:30"));
    assert!(rendered.contains("15:00"));
}

#[test]
fn projects_table_filters() {
    let loaded = fixture_loaded(&[], PROJECTS);
    assert_eq!(ProjectsLogic::table(&loaded.projects, None).rows.len(), 2);
    let found = ProjectsLogic::table(&loaded.projects, Some("portal"));
    assert_eq!(found.rows.len(), 1);
    assert_eq!(found.rows[0][0], "4711");
}

#[test]
fn check_reports_a_clean_round_trip() {
    let loaded = fixture_loaded(
        &[
            (day(1, 2), times((8, 0), (12, 0), 0)),
            (day(1, 2), times((12, 30), (16, 0), 0)),
            (day(2, 3), times((8, 15), (16, 45), 45)),
        ],
        &[],
    );

    let report = CheckLogic::run(&loaded, &Config::default()).unwrap();
    assert!(report.is_clean(), "{:?}", report.drift);
    assert_eq!(report.entries, 3);
}

#[test]
fn export_collects_workdays_only() {
    let mut loaded = fixture_loaded(
        &[
            (day(1, 2), times((8, 0), (12, 0), 0)),
            (day(3, 4), times((8, 0), (16, 0), 30)),
        ],
        &[],
    );
    DeleteLogic::apply(&mut loaded, day(1, 2), None).unwrap();

    let all = ExportLogic::collect(&loaded.year, None).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].date, "2025-03-04");
    assert_eq!(all[0].pause, "00:30");
    assert_eq!(all[0].net, "07:30");

    assert!(ExportLogic::collect(&loaded.year, Some(1)).unwrap().is_empty());
    assert!(matches!(
        ExportLogic::collect(&loaded.year, Some(13)),
        Err(AppError::InvalidMonth(_))
    ));
}

#[test]
fn pause_formats_are_parsed() {
    for (input, minutes) in [("30", 30), ("30m", 30), ("45min", 45), ("1h", 60), ("1h30m", 90), ("0:45", 45)] {
        assert_eq!(parse_duration(input).unwrap(), TimeDelta::minutes(minutes), "{input}");
    }
    for input in ["lang", "h", "1:75", ""] {
        assert!(matches!(parse_duration(input), Err(AppError::InvalidDuration(_))), "{input}");
    }
}
