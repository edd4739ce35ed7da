use chrono::NaiveDate;
use noticedesk::domain::notice::{ClientRef, Notice, NoticeStatus};
use noticedesk::domain::storage::FolderSummary;
use noticedesk::domain::types::{ClientId, FolderId, NoticeId};
use noticedesk::domain::client::Client;
use noticedesk::repository::mock::MockRepository;
use noticedesk::services::clients::{self, ClientsQuery};
use noticedesk::services::dashboard::load_dashboard;
use noticedesk::services::notices::{NoticesQuery, list_notices};
use noticedesk::services::storage::build_breadcrumbs;
use noticedesk::services::{ServiceError, notices};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn notice(id: &str, due: Option<NaiveDate>, hearing: Option<NaiveDate>, status: NoticeStatus) -> Notice {
    Notice {
        id: NoticeId::new(id).unwrap(),
        heading: format!("Notice {id}"),
        due_date: due,
        hearing_date: hearing,
        status,
        client: ClientRef {
            id: ClientId::new("c1").unwrap(),
            name: "Acme Traders".to_string(),
        },
    }
}

fn client(id: &str, name: &str) -> Client {
    Client {
        id: ClientId::new(id).unwrap(),
        name: name.to_string(),
        email: Some(format!("{id}@example.com")),
        phone: None,
        created_at: chrono::NaiveDateTime::default(),
    }
}

#[test]
fn load_dashboard_assembles_totals_and_buckets() {
    init_logging();
    let today = date(2024, 3, 15);
    let notices = vec![
        notice("n1", Some(date(2024, 3, 16)), None, NoticeStatus::Pending),
        notice("n2", Some(date(2024, 3, 10)), None, NoticeStatus::Pending),
        notice("n3", Some(date(2024, 3, 12)), Some(date(2024, 3, 13)), NoticeStatus::Completed),
        notice("n4", Some(date(2024, 4, 1)), Some(date(2024, 3, 18)), NoticeStatus::Pending),
    ];

    let mut repo = MockRepository::new();
    repo.expect_count_clients().returning(|| Ok(7));
    let listed = notices.clone();
    repo.expect_list_notices()
        .returning(move |_| Ok((listed.len(), listed.clone())));

    let stats = load_dashboard(&repo, today).unwrap();

    assert_eq!(stats.total_clients, 7);
    assert_eq!(stats.total_notices, 4);
    assert_eq!(stats.pending_notices, 3);
    assert_eq!(stats.completed_notices, 1);

    // Due track, pending only: n1 this week, n4 this month, n2 overdue
    // (the completed n3 is dropped from the display view).
    assert_eq!(stats.due_notices.this_week, 1);
    assert_eq!(stats.due_notices.this_month, 1);
    assert_eq!(stats.due_notices.overdue, 1);

    // Hearing track: n4 this week; n3's past hearing stays despite being
    // completed.
    assert_eq!(stats.hearing_dates.this_week, 1);
    assert_eq!(stats.hearing_dates.overdue, 1);

    assert_eq!(stats.latest_completed_notices.len(), 1);
    assert_eq!(stats.latest_completed_notices[0].id.as_str(), "n3");
    assert_eq!(stats.completion_progress(), 25.0);
}

#[test]
fn load_dashboard_surfaces_repository_failures() {
    init_logging();
    let mut repo = MockRepository::new();
    repo.expect_count_clients().returning(|| {
        Err(noticedesk::repository::errors::RepositoryError::Backend(
            "api unreachable".to_string(),
        ))
    });

    let err = load_dashboard(&repo, date(2024, 3, 15)).unwrap_err();
    assert!(matches!(err, ServiceError::Repository(_)));
}

#[test]
fn list_notices_trims_search_and_paginates() {
    init_logging();
    let mut repo = MockRepository::new();
    repo.expect_list_notices()
        .withf(|query| {
            query.search.as_deref() == Some("gst")
                && query.status == Some(NoticeStatus::Pending)
                && query
                    .pagination
                    .as_ref()
                    .is_some_and(|p| {
                        p.page == 2 && p.per_page == noticedesk::services::DEFAULT_ITEMS_PER_PAGE
                    })
        })
        .returning(|_| Ok((0, Vec::new())));

    let page = list_notices(
        &repo,
        NoticesQuery {
            status: Some(NoticeStatus::Pending),
            search: Some("  gst  ".to_string()),
            page: Some(2),
        },
    )
    .unwrap();
    assert_eq!(page.total, 0);
}

#[test]
fn list_notices_drops_blank_search() {
    init_logging();
    let mut repo = MockRepository::new();
    repo.expect_list_notices()
        .withf(|query| query.search.is_none())
        .returning(|_| Ok((0, Vec::new())));

    list_notices(
        &repo,
        NoticesQuery {
            status: None,
            search: Some("   ".to_string()),
            page: None,
        },
    )
    .unwrap();
}

#[test]
fn list_due_between_passes_the_range_through() {
    init_logging();
    let start = date(2024, 3, 1);
    let end = date(2024, 3, 31);

    let mut repo = MockRepository::new();
    repo.expect_list_notices()
        .withf(move |query| query.due_between == Some((start, end)))
        .returning(|_| {
            Ok((1, vec![notice(
                "n1",
                Some(date(2024, 3, 10)),
                None,
                NoticeStatus::Pending,
            )]))
        });

    let found = notices::list_due_between(&repo, start, end).unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn get_notice_maps_missing_record_to_not_found() {
    init_logging();
    let mut repo = MockRepository::new();
    repo.expect_get_notice_by_id().returning(|_| Ok(None));

    let id = NoticeId::new("missing").unwrap();
    let err = notices::get_notice(&repo, &id).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

#[test]
fn list_clients_trims_search_and_paginates() {
    init_logging();
    let mut repo = MockRepository::new();
    repo.expect_list_clients()
        .withf(|query| {
            query.search.as_deref() == Some("acme")
                && query
                    .pagination
                    .as_ref()
                    .is_some_and(|p| {
                        p.page == 3 && p.per_page == noticedesk::services::DEFAULT_ITEMS_PER_PAGE
                    })
        })
        .returning(|_| Ok((1, vec![client("c1", "Acme Traders")])));

    let page = clients::list_clients(
        &repo,
        ClientsQuery {
            search: Some("  acme  ".to_string()),
            page: Some(3),
        },
    )
    .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.clients[0].name, "Acme Traders");
}

#[test]
fn get_client_looks_up_by_id() {
    init_logging();
    let mut repo = MockRepository::new();
    repo.expect_get_client_by_id()
        .withf(|id| id.as_str() == "c1")
        .returning(|_| Ok(Some(client("c1", "Acme Traders"))));
    repo.expect_get_client_by_id()
        .returning(|_| Ok(None));

    let id = ClientId::new("c1").unwrap();
    let found = clients::get_client(&repo, &id).unwrap();
    assert_eq!(found.name, "Acme Traders");

    let missing = ClientId::new("c2").unwrap();
    let err = clients::get_client(&repo, &missing).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

#[test]
fn breadcrumbs_come_from_one_ancestor_path_call() {
    init_logging();
    let mut repo = MockRepository::new();
    repo.expect_ancestor_path()
        .times(1)
        .returning(|folder| {
            Ok(vec![
                FolderSummary {
                    id: FolderId::new("root").unwrap(),
                    name: "2024".to_string(),
                    parent: None,
                },
                FolderSummary {
                    id: folder.clone(),
                    name: "Appeals".to_string(),
                    parent: Some(FolderId::new("root").unwrap()),
                },
            ])
        });

    let leaf = FolderId::new("f9").unwrap();
    let crumbs = build_breadcrumbs(&repo, Some(&leaf)).unwrap();
    let names: Vec<&str> = crumbs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Home", "2024", "Appeals"]);
}
