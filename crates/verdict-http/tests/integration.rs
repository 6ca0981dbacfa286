use verdict::{Outcome, OutcomeError, OutcomeExt, PagedOutcome, codes};
use verdict_http::{HttpReply, HttpStatus, JSON_CONTENT_TYPE, status_code_for};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct Order {
    id: String,
    total_cents: u64,
}

fn order(id: &str) -> Order {
    Order {
        id: id.to_string(),
        total_cents: 1250,
    }
}

#[test]
fn test_typed_success_reply() {
    let reply = HttpReply::from_outcome(&Outcome::success_with(order("o-1"))).unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.content_type, JSON_CONTENT_TYPE);

    let back: Outcome<Order> = reply.to_outcome().unwrap();
    assert_eq!(back.data(), Some(&order("o-1")));
}

#[test]
fn test_validation_failure_reply() {
    let outcome = Outcome::failure_of::<Order>()
        .with_code(codes::VALIDATION_FAILED)
        .with_error(
            OutcomeError::new("total must be positive", codes::INVALID_PROPERTY_VALUE)
                .with_source("total_cents"),
        );
    let reply = HttpReply::from_outcome(&outcome).unwrap();
    assert_eq!(reply.status, 400);

    let back: Outcome<Order> = reply.to_outcome().unwrap();
    assert!(back.failed_because(codes::INVALID_PROPERTY_VALUE));
    assert_eq!(back.errors()[0].source(), "total_cents");
    assert_eq!(back.trace_code(), outcome.trace_code());
}

#[test]
fn test_unexpected_error_is_500() {
    let outcome = Outcome::from_exception(std::io::Error::other("disk full"));
    assert_eq!(HttpStatus::for_outcome(&outcome), HttpStatus::InternalServerError);

    let reply = HttpReply::from_outcome(&outcome).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(json["code"], codes::OPERATION_FAILED_EXCEPTION);
    assert_eq!(json["errors"][0]["message"], "disk full");
}

#[test]
fn test_paged_reply() {
    let page = Outcome::paged_success([order("o-1"), order("o-2")], 1, 2, 7);
    let reply = HttpReply::from_outcome(&page).unwrap();
    assert_eq!(reply.status, 200);

    let back: PagedOutcome<Order> = reply.to_outcome().unwrap();
    assert_eq!(back.count(), 2);
    assert_eq!(back.page_count(), 4);
}

#[test]
fn test_status_for_paged_failure() {
    let page = Outcome::paged_failure::<Order>().with_code(codes::UNAUTHORIZED);
    assert_eq!(status_code_for(&page), 401);
}
