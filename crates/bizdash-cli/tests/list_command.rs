mod common;

use common::TestFixture;
use predicates::prelude::*;

fn keys(value: &serde_json::Value) -> Vec<String> {
    value["content"]["table"]["rows"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .map(|r| r["key"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_list_staff_plain() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .arg("staff")
        .arg("--file")
        .arg(fixture.staff())
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("Grace Hopper"))
        .stdout(predicate::str::contains("Staff · page 1 · showing 3 of 3"));
}

#[test]
fn test_list_json_shape() {
    let fixture = TestFixture::new();
    let file = fixture.staff().to_string_lossy().to_string();

    let value = fixture.list_json(&["staff", "--file", &file]);
    let content = &value["content"];
    assert_eq!(content["title"], "Staff");
    assert_eq!(content["page"], 1);
    assert_eq!(content["total"], 3);
    assert_eq!(content["table"]["kind"], "table");
    assert_eq!(content["table"]["rows"][2]["cells"][4], "no");
    assert_eq!(keys(&value), vec!["1", "2", "3"]);
}

#[test]
fn test_search_and_paging() {
    let fixture = TestFixture::new();
    let file = fixture.staff().to_string_lossy().to_string();

    let value = fixture.list_json(&["staff", "--file", &file, "--size", "2", "--page", "2"]);
    assert_eq!(keys(&value), vec!["3"]);
    assert_eq!(value["content"]["has_more"], false);

    let value = fixture.list_json(&["staff", "--file", &file, "--search", "GRACE"]);
    assert_eq!(keys(&value), vec!["2"]);
    assert_eq!(value["content"]["search"], "GRACE");
}

#[test]
fn test_page_below_one_is_ignored() {
    let fixture = TestFixture::new();
    let file = fixture.staff().to_string_lossy().to_string();

    let value = fixture.list_json(&["staff", "--file", &file, "--page", "-3"]);
    assert_eq!(value["content"]["page"], 1);
    assert_eq!(keys(&value).len(), 3);
}

#[test]
fn test_page_size_from_config() {
    let fixture = TestFixture::new();
    fixture.write_config("page_size = 1\n");
    let file = fixture.staff().to_string_lossy().to_string();

    let value = fixture.list_json(&["staff", "--file", &file]);
    assert_eq!(keys(&value), vec!["1"]);
    assert_eq!(value["content"]["has_more"], true);
    assert_eq!(
        value["suggestions"][0]["command"],
        format!("bizdash list staff --file {} --page 2", file)
    );
}

#[test]
fn test_empty_result_shows_presenter_message() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "invoices", "--search", "initech", "--file"])
        .arg(fixture.invoices())
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."))
        .stdout(predicate::str::contains("Try a broader search"));
}

#[test]
fn test_invoices_csv() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--format", "csv", "list", "invoices", "--file"])
        .arg(fixture.invoices())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Invoice,Client,Amount,Status,Issued,Due\n",
        ))
        .stdout(predicate::str::contains(
            "INV-0001,\"Acme, Inc.\",\"1,250.00\",paid,2026-01-05,2026-02-05\n",
        ))
        .stdout(predicate::str::contains(
            "INV-0002,Globex,99.50,sent,2026-02-01,-\n",
        ));
}

#[test]
fn test_unreadable_file_shows_error_state_and_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "staff", "--file", "/nonexistent/staff.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Could not load Staff"))
        .stdout(predicate::str::contains(
            "Something went wrong while loading this list.",
        ))
        .stderr(predicate::str::contains("Failed to load /nonexistent/staff.json"));
}
