use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_categorized_then_ranges_are_exclusive() {
    let ok = HttpStatusCode(200);
    let bad_request = HttpStatusCode(400);
    let internal = HttpStatusCode(500);

    assert!(ok.is_success());
    assert!(!ok.is_client_error());

    assert!(bad_request.is_client_error());
    assert!(!bad_request.is_server_error());

    assert!(internal.is_server_error());
    assert!(!internal.is_success());
}

#[test]
fn given_u16_when_converted_then_displays_plain_number() {
    let status = HttpStatusCode::from(404);

    assert_eq!(status, HttpStatusCode(404));
    assert_eq!(status.to_string(), "404");
    assert_eq!(status.as_u16(), 404);
}

#[test]
fn given_401_when_compared_then_matches_unauthorized_const() {
    assert_eq!(HttpStatusCode::from(401), HttpStatusCode::UNAUTHORIZED);
    assert!(HttpStatusCode::UNAUTHORIZED.is_client_error());
}
