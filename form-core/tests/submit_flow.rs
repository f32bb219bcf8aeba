//! End-to-end submit flow through the public controller API.

use std::{sync::Arc, time::Duration};

use form_core::{
    ColorTable, Field, FormConfig, FormController, FormSnapshot, Phase, RevealLog, ZipRecord,
    ZipTable, decode_snapshot,
};
use pretty_assertions::assert_eq;

fn zip_table() -> Arc<ZipTable> {
    Arc::new(ZipTable::new(vec![
        ZipRecord::new("10001", "New York", "NY"),
        ZipRecord::new("62701", "Springfield", "IL"),
        ZipRecord::new("94105", "San Francisco", "CA"),
    ]))
}

fn color_table() -> Arc<ColorTable> {
    Arc::new(
        [("Red", "#FF0000"), ("Green", "#00FF00")]
            .into_iter()
            .map(|(n, c)| (n.to_string(), c.to_string()))
            .collect(),
    )
}

fn new_controller() -> (FormController, RevealLog) {
    let log = RevealLog::new();
    let controller = FormController::new(
        zip_table(),
        color_table(),
        Box::new(log.clone()),
        FormConfig::default(),
    );
    (controller, log)
}

#[tokio::test(start_paused = true)]
async fn test_john_smith_submission_round_trips() {
    let (mut form, log) = new_controller();

    form.set_name("JOHN SMITH");
    form.set_email("a@b.com");
    form.set_mobile("1234-567890");
    form.set_dob("01-01-2000");
    form.set_gender("male");
    form.set_zip("62701");
    form.set_color("Red");
    form.set_notes("");

    assert!(form.form_is_valid());
    assert_eq!(form.state().city, "Springfield");
    assert_eq!(form.state().state, "IL");

    let mut pending = form.begin_submit().expect("valid form starts submitting");
    assert_eq!(form.phase(), Phase::Submitting);

    let early = tokio::time::timeout(Duration::from_millis(1999), pending.elapsed()).await;
    assert!(early.is_err(), "delay must not elapse early");
    assert!(log.is_empty());

    pending.elapsed().await.unwrap();
    let encoded = form.finish_submit(pending).unwrap();

    assert_eq!(form.phase(), Phase::Submitted);
    assert_eq!(log.messages(), vec![encoded.clone()]);
    assert_eq!(
        decode_snapshot(&encoded).unwrap(),
        FormSnapshot {
            name: "JOHN SMITH".into(),
            email: "a@b.com".into(),
            mobile: "1234-567890".into(),
            dob: "01-01-2000".into(),
            gender: "male".into(),
            zip: "62701".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            color: "Red".into(),
            notes: "".into(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_full_lifecycle_submit_show_reset_and_resubmit() {
    let (mut form, log) = new_controller();
    form.set_name("ANNE O'NEIL");
    form.set_email("anne@example.org");
    form.set_mobile("0000-111111");
    form.set_dob("31-12-1999");
    form.set_gender("female");
    form.set_zip("94105");
    form.set_color("Green");
    form.set_notes("call after 5");

    form.submit().await.unwrap().expect("submitted");
    assert_eq!(form.show_data(), Some(1));
    assert_eq!(form.show_data(), Some(2));
    assert_eq!(form.show_data(), Some(3));
    assert_eq!(form.state().click_count, 3);

    assert!(form.reset());
    for field in Field::all() {
        assert_eq!(form.state().value(*field), "", "{field} should be cleared");
    }
    assert_eq!(form.state().click_count, 0);
    assert_eq!(form.show_data(), None);

    form.set_name("ANNE");
    form.set_email("anne@example.org");
    form.set_mobile("0000-111111");
    form.set_dob("31-12-1999");
    form.set_gender("female");
    form.set_color("Red");
    let encoded = form.submit().await.unwrap().expect("second submission");

    let snapshot = decode_snapshot(&encoded).unwrap();
    assert_eq!(snapshot.name, "ANNE");
    assert_eq!(snapshot.zip, "");
    assert_eq!(snapshot.city, "");
    assert_eq!(log.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_form_never_submits() {
    let (mut form, log) = new_controller();
    form.set_name("john smith");
    form.set_email("a@b.com");
    form.set_mobile("1234-567890");
    form.set_dob("01-01-2000");
    form.set_gender("male");
    form.set_color("Red");

    assert_eq!(form.submit().await.unwrap(), None);

    assert_eq!(form.phase(), Phase::Editing);
    assert!(!form.state().loading);
    assert!(log.is_empty());
}

#[test]
fn test_short_zip_clears_previous_location() {
    let (mut form, _) = new_controller();
    form.set_zip("10001");
    assert_eq!(form.state().city, "New York");

    for zip in ["1000", "100", "10", "1", ""] {
        form.set_zip(zip);
        assert_eq!(form.state().city, "", "zip {zip:?}");
        assert_eq!(form.state().state, "", "zip {zip:?}");
    }
}
