use super::*;

#[test]
fn test_body_encodes_content_as_base64() {
    let request = FileCreateRequest {
        path: "LICENSE.md".to_string(),
        message: "Add LICENSE.md".to_string(),
        content: "hello".to_string(),
    };

    let body = request.body();
    assert_eq!(body.message, "Add LICENSE.md");
    assert_eq!(body.content, "aGVsbG8=");
}

#[test]
fn test_body_serialization_has_only_message_and_content() {
    let request = FileCreateRequest {
        path: "README.md".to_string(),
        message: "Add README.md".to_string(),
        content: String::new(),
    };

    let value = serde_json::to_value(request.body()).expect("Failed to serialize");
    let object = value.as_object().expect("Expected an object");
    assert_eq!(object.len(), 2);
    assert_eq!(object["content"], "");
}

#[test]
fn test_response_is_created_only_for_201() {
    let created = FileCreateResponse {
        status: 201,
        body: "{}".to_string(),
    };
    assert!(created.is_created());

    for status in [200, 404, 409, 422, 500] {
        let response = FileCreateResponse {
            status,
            body: String::new(),
        };
        assert!(!response.is_created(), "status {status} is not created");
    }
}
