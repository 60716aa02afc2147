//! End-to-end submission flows through the event loop.

use geoform_form::events::{self, Event};
use geoform_form::{FieldId, FieldSource, Form, MemoryFields, SubmissionController, SubmissionState};
use geoform_geo::{AddressCandidate, Coordinate, GeoError};

type Lookup = fn(Coordinate, usize) -> geoform_geo::Result<Vec<AddressCandidate>>;

const REJECTED: &str = "Form not submitted. One or more fields are null or blank.";

fn googleplex(_: Coordinate, max_results: usize) -> geoform_geo::Result<Vec<AddressCandidate>> {
    assert_eq!(max_results, 1);
    Ok(vec![AddressCandidate {
        lines: vec!["1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA".into()],
        sub_thoroughfare: Some("1600".into()),
        thoroughfare: Some("Amphitheatre Pkwy".into()),
        locality: Some("Mountain View".into()),
        admin_area: Some("CA".into()),
        postal_code: Some("94043".into()),
    }])
}

fn no_candidates(_: Coordinate, _: usize) -> geoform_geo::Result<Vec<AddressCandidate>> {
    Ok(Vec::new())
}

fn unreachable_backend(_: Coordinate, _: usize) -> geoform_geo::Result<Vec<AddressCandidate>> {
    Err(GeoError::Io(std::io::Error::other("grpc unavailable")))
}

async fn submit_once(
    lookup: Lookup,
    first: &str,
    last: &str,
) -> SubmissionController<Lookup, MemoryFields, Vec<String>> {
    let controller =
        SubmissionController::new(lookup, MemoryFields::with_names(first, last), Vec::new());
    let (tx, rx) = events::channel();
    tx.deliver_location(&Some(Coordinate::new(37.422, -122.084)));
    tx.submit();
    drop(tx);
    events::run(controller, rx).await
}

#[tokio::test]
async fn submits_geocoded_form() {
    let controller = submit_once(googleplex, "Ada", "Lovelace").await;

    let expected = "Form submitted:\n{\n  \"first\": \"Ada\",\n  \"last\": \"Lovelace\",\n  \"street\": \"1600 Amphitheatre Pkwy\",\n  \"city\": \"Mountain View\",\n  \"state\": \"CA\",\n  \"zip\": \"94043\"\n}";
    assert_eq!(controller.messages(), &vec![expected.to_string()]);
    assert_eq!(controller.state(), SubmissionState::Submitted);

    let json = expected.strip_prefix("Form submitted:\n").unwrap();
    let parsed: Form = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, controller.current_form());
}

#[tokio::test]
async fn rejects_when_geocoder_finds_nothing() {
    let controller = submit_once(no_candidates, "Ada", "Lovelace").await;

    assert_eq!(controller.messages(), &vec![REJECTED.to_string()]);
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.current_form().street, "");
}

#[tokio::test]
async fn rejects_blank_first_name() {
    let controller = submit_once(googleplex, "", "Lovelace").await;

    assert_eq!(controller.messages(), &vec![REJECTED.to_string()]);
    assert_eq!(controller.fields().read_text(FieldId::Zip), "94043");
}

#[tokio::test]
async fn geocoding_failure_is_not_surfaced() {
    let controller = submit_once(unreachable_backend, "Ada", "Lovelace").await;

    assert_eq!(controller.messages(), &vec![REJECTED.to_string()]);
}

#[tokio::test]
async fn later_fix_enables_resubmission() {
    let controller = SubmissionController::new(
        googleplex as Lookup,
        MemoryFields::with_names("Ada", "Lovelace"),
        Vec::new(),
    );
    let (tx, rx) = events::channel();
    tx.submit();
    tx.send(Event::LocationFixed(Coordinate::new(37.422, -122.084)));
    tx.submit();
    drop(tx);

    let controller = events::run(controller, rx).await;
    let messages = controller.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], REJECTED);
    assert!(messages[1].starts_with("Form submitted:\n"));
    assert_eq!(controller.state(), SubmissionState::Submitted);
}
