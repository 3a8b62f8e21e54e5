//! Tests for the CLI layer

use super::*;
use crate::decode::EnvelopeDecoder;
use crate::pagination::Paginator;
use crate::record::Record;
use crate::session::{
    Command, LoadSummary, Outcome, PageView, SearchResults, Session, SessionConfig,
    SessionSummary, StatsReport,
};
use crate::stats::{CategoryCount, StatsSnapshot};
use crate::transport::{demo_records, InMemoryTransport};
use crate::types::ExportFormat;
use clap::Parser;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use test_case::test_case;

fn plain() {
    colored::control::set_override(false);
}

// ============================================================================
// Menu parsing
// ============================================================================

#[test_case("1", Command::ViewPage ; "view")]
#[test_case("2", Command::NextPage ; "next by number")]
#[test_case("n", Command::NextPage ; "next by letter")]
#[test_case("3", Command::PreviousPage ; "previous by number")]
#[test_case("prev", Command::PreviousPage ; "previous by word")]
#[test_case("7", Command::LoadAll ; "load all")]
#[test_case("8", Command::ShowStats ; "stats")]
#[test_case(" Q ", Command::Quit ; "quit uppercase padded")]
#[test_case("exit", Command::Quit ; "exit")]
fn test_parse_simple_choices(line: &str, expected: Command) {
    assert_eq!(parse_menu_input(line).unwrap(), MenuInput::Run(expected));
}

#[test_case("4", PendingArgument::PageNumber ; "jump")]
#[test_case("5", PendingArgument::PageSize ; "page size")]
#[test_case("6", PendingArgument::SearchTerm ; "search")]
#[test_case("9", PendingArgument::ExportFormat ; "export")]
#[test_case("l", PendingArgument::RecordId ; "lookup")]
fn test_parse_choices_needing_argument(line: &str, expected: PendingArgument) {
    assert_eq!(parse_menu_input(line).unwrap(), MenuInput::Prompt(expected));
}

#[test]
fn test_parse_inline_arguments() {
    assert_eq!(
        parse_menu_input("4 3").unwrap(),
        MenuInput::Run(Command::JumpToPage(3))
    );
    assert_eq!(
        parse_menu_input("5   25").unwrap(),
        MenuInput::Run(Command::ChangePageSize(25))
    );
    assert_eq!(
        parse_menu_input("6 jane doe").unwrap(),
        MenuInput::Run(Command::Search("jane doe".to_string()))
    );
    assert_eq!(
        parse_menu_input("9 json").unwrap(),
        MenuInput::Run(Command::Export(ExportFormat::Json))
    );
    assert_eq!(
        parse_menu_input("lookup PABC123").unwrap(),
        MenuInput::Run(Command::Lookup("PABC123".to_string()))
    );
}

#[test]
fn test_parse_help_and_blank() {
    assert_eq!(parse_menu_input("").unwrap(), MenuInput::Empty);
    assert_eq!(parse_menu_input("   ").unwrap(), MenuInput::Empty);
    assert_eq!(parse_menu_input("?").unwrap(), MenuInput::Help);
    assert_eq!(parse_menu_input("help").unwrap(), MenuInput::Help);
}

#[test]
fn test_parse_invalid_choice() {
    let err = parse_menu_input("42").unwrap_err();
    assert!(err.is_precondition());
    assert!(err.to_string().contains("Invalid choice"));
}

#[test]
fn test_resolve_pending() {
    assert_eq!(
        resolve_pending(PendingArgument::PageNumber, " 7 ").unwrap(),
        Command::JumpToPage(7)
    );
    assert_eq!(
        resolve_pending(PendingArgument::ExportFormat, "c").unwrap(),
        Command::Export(ExportFormat::Csv)
    );

    assert!(resolve_pending(PendingArgument::PageNumber, "two")
        .unwrap_err()
        .is_precondition());
    assert!(resolve_pending(PendingArgument::PageSize, "-5")
        .unwrap_err()
        .is_precondition());
    assert!(resolve_pending(PendingArgument::ExportFormat, "xml").is_err());
    assert!(resolve_pending(PendingArgument::RecordId, "  ").is_err());
}

#[test]
fn test_prompts_are_distinct() {
    let prompts = [
        PendingArgument::PageNumber,
        PendingArgument::PageSize,
        PendingArgument::SearchTerm,
        PendingArgument::ExportFormat,
        PendingArgument::RecordId,
    ]
    .map(PendingArgument::prompt);
    for (i, a) in prompts.iter().enumerate() {
        assert!(a.ends_with(": "));
        for b in &prompts[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn sample_record() -> Record {
    Record::new("PXPGF42", "user")
        .with_name("Earline Greenholt")
        .with_email("earline@example.com")
        .with_role("admin")
        .with_timezone("America/Lima")
        .with_invitation_sent(true)
        .with_unknown_field("license", "full_user")
}

#[test]
fn test_render_page_view() {
    plain();
    let view = PageView {
        page_number: 2,
        offset: 10,
        page_size: 10,
        total: Some(25),
        has_more: true,
        records: vec![sample_record()],
        latency: Some(Duration::from_millis(42)),
    };

    let text = render_outcome(&Outcome::Page(view));
    assert!(text.contains("Page 2 - Detailed View"));
    assert!(text.contains("1. Earline Greenholt (ID: PXPGF42)"));
    assert!(text.contains("Email: earline@example.com"));
    assert!(text.contains("Role: admin | Type: user"));
    assert!(text.contains("Time Zone: America/Lima"));
    assert!(text.contains("Status: Active"));
    assert!(!text.contains("Invitation Pending"));
    assert!(text.contains("Unknown fields: [license]"));
    assert!(text.contains("[← Previous] Page 2 [Next →]"));
    assert!(text.contains("API call took 42 ms"));
}

#[test]
fn test_render_status_labels() {
    plain();
    let pending = Record::new("P2", "user")
        .with_name("Pending Person")
        .with_invitation_sent(false);
    let unknown = Record::new("P3", "user").with_name("No Flag");
    let view = PageView {
        page_number: 1,
        offset: 0,
        page_size: 10,
        total: None,
        has_more: false,
        records: vec![sample_record(), pending, unknown],
        latency: None,
    };

    let text = render_outcome(&Outcome::Page(view));
    assert_eq!(text.matches("Status: Active").count(), 1);
    assert_eq!(text.matches("Status: Invitation Pending").count(), 1);
    assert_eq!(text.matches("Status:").count(), 2);
}

#[test]
fn test_render_empty_page() {
    plain();
    let view = PageView {
        page_number: 1,
        offset: 0,
        page_size: 10,
        total: Some(0),
        has_more: false,
        records: Vec::new(),
        latency: None,
    };
    let text = render_outcome(&Outcome::Page(view));
    assert!(text.contains("No records on current page"));
    assert!(!text.contains("Previous"));
    assert!(!text.contains("Next"));
}

#[test]
fn test_render_search() {
    plain();
    let results = SearchResults {
        term: "earl".to_string(),
        matches: vec![sample_record()],
        complete: false,
        notice: Some("Only 1 loaded records were searched".to_string()),
    };
    let text = render_outcome(&Outcome::Search(results));
    assert!(text.contains("Found 1 matching records"));
    assert!(text.contains("Earline Greenholt (earline@example.com) - ID: PXPGF42"));
    assert!(text.contains("⚠ Only 1 loaded records were searched"));

    let none = SearchResults {
        term: "zed".to_string(),
        matches: Vec::new(),
        complete: true,
        notice: None,
    };
    assert!(render_outcome(&Outcome::Search(none)).contains("No loaded records match 'zed'"));
}

#[test]
fn test_render_load_summary() {
    plain();
    let done = LoadSummary {
        records: 250,
        pages: 3,
        cancelled: false,
    };
    assert_eq!(
        render_outcome(&Outcome::Loaded(done)),
        "✓ Loaded 250 records in 3 pages"
    );

    let partial = LoadSummary {
        records: 100,
        pages: 1,
        cancelled: true,
    };
    assert!(render_outcome(&Outcome::Loaded(partial)).contains("corpus is incomplete"));
}

#[test]
fn test_render_stats_truncates_timezones() {
    plain();
    let by_timezone: Vec<CategoryCount> = (0..12)
        .map(|i| CategoryCount {
            value: format!("Zone/{i:02}"),
            count: 12 - i,
        })
        .collect();
    let report = StatsReport {
        snapshot: StatsSnapshot {
            total_calls: 4,
            average_latency: Some(Duration::from_millis(120)),
            records_observed: 78,
            by_timezone,
            by_role: vec![CategoryCount {
                value: "admin".to_string(),
                count: 78,
            }],
        },
        records_loaded: 78,
    };

    let text = render_outcome(&Outcome::Stats(report));
    assert!(text.contains("API Calls: 4"));
    assert!(text.contains("Average Response Time: 120 ms"));
    assert!(text.contains("Total Records Loaded: 78"));
    assert!(text.contains("Zone/09"));
    assert!(!text.contains("Zone/10"));
    assert!(text.contains("admin"));
}

#[test]
fn test_render_goodbye() {
    plain();
    let text = render_outcome(&Outcome::Goodbye(SessionSummary {
        total_calls: 3,
        records_loaded: 0,
        average_latency: None,
    }));
    assert!(text.contains("API calls made: 3"));
    assert!(text.contains("Records examined: 0"));
    assert!(!text.contains("Avg response time"));
    assert!(text.ends_with("Goodbye!"));
}

#[tokio::test]
async fn test_render_menu_header() {
    plain();
    let transport = Arc::new(InMemoryTransport::new(demo_records(25)));
    let paginator = Paginator::new(transport, Arc::new(EnvelopeDecoder::new()));
    let mut session = Session::new(paginator, SessionConfig::new()).unwrap();

    assert!(render_menu_header(&session).contains("No page loaded yet"));

    session.execute(Command::JumpToPage(2)).await.unwrap();
    let header = render_menu_header(&session);
    assert!(header.contains("Page 2 | Showing 11-20 of 25 records"));
    assert!(header.contains("Demo User 11 (demo.user11@example.com)"));
    assert!(header.contains("... and 7 more"));
    assert!(header.ends_with("Page size: 10"));
}

// ============================================================================
// Command line
// ============================================================================

#[test]
fn test_cli_defaults_to_explore() {
    let cli = Cli::try_parse_from(["pagewise", "--token", "abc"]).unwrap();
    assert_eq!(cli.token.as_deref(), Some("abc"));
    assert!(cli.command.is_none());
    assert!(!cli.verbose);
}

#[test]
fn test_cli_subcommands() {
    let cli = Cli::try_parse_from(["pagewise", "page", "--offset", "20", "--limit", "5"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Page {
            offset: 20,
            limit: Some(5)
        })
    );

    let cli = Cli::try_parse_from(["pagewise", "get", "PABC"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Get {
            id: "PABC".to_string()
        })
    );

    let cli =
        Cli::try_parse_from(["pagewise", "--offline-demo", "30", "dump", "-f", "json"]).unwrap();
    assert_eq!(cli.offline_demo, Some(30));
    assert_eq!(
        cli.command,
        Some(Commands::Dump {
            format: ExportFormat::Json,
            output: None
        })
    );
}

#[test]
fn test_cli_rejects_unknown_export_format() {
    assert!(Cli::try_parse_from(["pagewise", "dump", "--format", "xml"]).is_err());
}

#[test]
fn test_runner_config_overrides() {
    let cli = Cli::try_parse_from([
        "pagewise",
        "--config-json",
        r#"{"collection_key": "teams", "entity_key": "team"}"#,
        "--page-size",
        "25",
        "--base-url",
        "http://localhost:8080",
    ])
    .unwrap();

    let config = Runner::new(cli).load_config().unwrap();
    assert_eq!(config.collection_key, "teams");
    assert_eq!(config.page_size, 25);
    assert_eq!(config.base_url, "http://localhost:8080");
}

#[test]
fn test_runner_rejects_invalid_override() {
    let cli = Cli::try_parse_from(["pagewise", "--page-size", "500"]).unwrap();
    assert!(Runner::new(cli).load_config().is_err());
}

#[tokio::test]
async fn test_runner_requires_token_for_live_api() {
    let cli = Cli::try_parse_from(["pagewise", "--token", "  ", "get", "P1"]).unwrap();
    let err = Runner::new(cli).run().await.unwrap_err();
    assert!(err.to_string().contains("token"));
}

#[tokio::test]
async fn test_runner_dump_offline() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("out").join("users.csv");
    let cli = Cli::try_parse_from([
        "pagewise",
        "--offline-demo",
        "12",
        "--config-json",
        r#"{"pacing_ms": 0}"#,
        "dump",
        "--output",
        path.to_str().unwrap(),
    ])
    .unwrap();

    Runner::new(cli).run().await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 13);
    assert!(written.starts_with("ID,Name,Email,Role,TimeZone,Status,JobTitle"));
}
