use ruport::data::{Item, Role, User};
use ruport::output::UnknownFormat;
use ruport::report::generate_report;

fn inventory() -> Vec<Item> {
    vec![Item::new(1, "A", 300), Item::new(2, "B", 1200)]
}

#[test]
fn test_admin_csv_report() {
    let bob = User::new("Bob", Role::Admin);

    let report = generate_report("CSV", &bob, &inventory()).unwrap();

    assert_eq!(
        report,
        "ID,NOME,VALOR,USUARIO\n\
         1,A,300,Bob\n\
         2,B,1200,Bob\n\
         \n\
         Total,,\n\
         1500,,"
    );
}

#[test]
fn test_admin_html_report_bolds_high_value_rows() {
    let bob = User::new("Bob", Role::Admin);

    let report = generate_report("HTML", &bob, &inventory()).unwrap();

    assert!(report.contains("Usuario: Bob"));
    assert!(report.contains(
        "<tr style=\"font-weight: bold\"><td>2</td><td>B</td><td>1200</td></tr>"
    ));
    assert!(report.contains("<tr><td>1</td><td>A</td><td>300</td></tr>"));
    assert!(report.contains("Total: 1500"));
}

#[test]
fn test_user_reports_hide_items_over_the_limit() {
    let carol = User::new("Carol", Role::User);
    let items = vec![Item::new(1, "Dock", 600), Item::new(2, "Mouse", 100)];

    for format in ["CSV", "HTML"] {
        let report = generate_report(format, &carol, &items).unwrap();

        assert!(report.contains("Mouse"));
        assert!(!report.contains("Dock"));
    }
}

#[test]
fn test_unknown_format_is_rejected() {
    let bob = User::new("Bob", Role::Admin);

    let err = generate_report("XML", &bob, &inventory()).unwrap_err();

    assert_eq!(err, UnknownFormat("XML".to_string()));
}

#[test]
fn test_unrecognized_role_sees_everything_unmarked() {
    let dana = User::new("Dana", Role::Other("AUDITOR".to_string()));

    let report = generate_report("HTML", &dana, &inventory()).unwrap();

    assert!(report.contains("<td>1</td><td>A</td><td>300</td>"));
    assert!(report.contains("<td>2</td><td>B</td><td>1200</td>"));
    assert!(!report.contains("font-weight"));
}

#[test]
fn test_empty_item_list_still_renders() {
    let bob = User::new("Bob", Role::Admin);

    let csv = generate_report("CSV", &bob, &[]).unwrap();
    let html = generate_report("HTML", &bob, &[]).unwrap();

    assert!(csv.ends_with("Total,,\n0,,"));
    assert!(html.contains("Total: 0"));
}

#[test]
fn test_every_csv_row_names_the_requesting_user() {
    let erin = User::new("Erin", Role::Admin);

    let report = generate_report("CSV", &erin, &inventory()).unwrap();
    let data_rows: Vec<&str> = report
        .lines()
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect();

    assert_eq!(data_rows.len(), 2);
    for row in data_rows {
        assert!(row.ends_with(",Erin"));
    }
}

#[test]
fn test_pipeline_does_not_mutate_the_source_items() {
    let bob = User::new("Bob", Role::Admin);
    let items = inventory();

    generate_report("CSV", &bob, &items).unwrap();

    assert!(items.iter().all(|item| item.priority.is_none()));
}
