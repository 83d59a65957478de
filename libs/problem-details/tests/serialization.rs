#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::StatusCode;
use problem_details::{Problem, ProblemBuilder};
use serde::Serialize;

#[derive(Serialize)]
struct FieldError {
    message: &'static str,
    path: &'static str,
}

/// The widget document used across the wire-shape tests: all five base
/// fields set, no extensions yet.
fn widget_builder() -> ProblemBuilder {
    let mut builder = Problem::builder();
    builder
        .type_url("test.html", "https://api.example.org/problem")
        .status(StatusCode::BAD_REQUEST)
        .title("Bad Request")
        .detail("error occurred")
        .instance("https://api.example.org/widget/example-instance");
    builder
}

#[test]
fn status_only_document() {
    let json = Problem::from_status(StatusCode::BAD_REQUEST).to_json().unwrap();

    assert_eq!(json, r#"{"type":"about:blank","status":400,"title":"Bad Request"}"#);
}

#[test]
fn full_base_field_document() {
    let json = widget_builder().build().to_json().unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"type":"https://api.example.org/problem/test.html","#,
            r#""status":400,"title":"Bad Request","detail":"error occurred","#,
            r#""instance":"https://api.example.org/widget/example-instance"}"#
        )
    );
}

#[test]
fn string_list_extension_document() {
    let mut builder = widget_builder();
    builder.extension("errors", vec!["error1", "error2"]).unwrap();

    let json = builder.build().to_json().unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"type":"https://api.example.org/problem/test.html","#,
            r#""status":400,"title":"Bad Request","detail":"error occurred","#,
            r#""instance":"https://api.example.org/widget/example-instance","#,
            r#""errors":["error1","error2"]}"#
        )
    );
}

#[test]
fn nested_object_extension_document() {
    let mut builder = widget_builder();
    builder
        .extension(
            "error",
            FieldError {
                message: "error",
                path: "class/name",
            },
        )
        .unwrap();

    let json = builder.build().to_json().unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"type":"https://api.example.org/problem/test.html","#,
            r#""status":400,"title":"Bad Request","detail":"error occurred","#,
            r#""instance":"https://api.example.org/widget/example-instance","#,
            r#""error":{"message":"error","path":"class/name"}}"#
        )
    );
}

#[test]
fn object_list_extension_document() {
    let mut builder = widget_builder();
    builder
        .extension(
            "errors",
            vec![
                FieldError {
                    message: "error1",
                    path: "class/name",
                },
                FieldError {
                    message: "error2",
                    path: "class/lastName",
                },
            ],
        )
        .unwrap();

    let json = builder.build().to_json().unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"type":"https://api.example.org/problem/test.html","#,
            r#""status":400,"title":"Bad Request","detail":"error occurred","#,
            r#""instance":"https://api.example.org/widget/example-instance","#,
            r#""errors":[{"message":"error1","path":"class/name"},"#,
            r#"{"message":"error2","path":"class/lastName"}]}"#
        )
    );
}

#[test]
fn extensions_keep_insertion_order() {
    let mut builder = Problem::builder();
    builder.extension("zebra", 1).unwrap();
    builder.extension("alpha", 2).unwrap();
    builder.extension("mango", 3).unwrap();

    let json = builder.build().to_json().unwrap();

    assert_eq!(json, r#"{"type":"about:blank","zebra":1,"alpha":2,"mango":3}"#);
}

#[test]
fn base_fields_precede_extensions_regardless_of_set_order() {
    let mut builder = Problem::builder();
    builder.extension("code", "X-100").unwrap();
    builder.title("Late Title").status(StatusCode::BAD_GATEWAY);

    let json = builder.build().to_json().unwrap();

    assert_eq!(
        json,
        r#"{"type":"about:blank","status":502,"title":"Late Title","code":"X-100"}"#
    );
}

#[test]
fn equal_input_yields_identical_bytes() {
    let mut builder = widget_builder();
    builder.extension("errors", vec!["error1"]).unwrap();

    let first = builder.build();
    let second = builder.build();

    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(first.to_json().unwrap(), first.to_json().unwrap());
}

#[test]
fn documents_cannot_be_parsed_back() {
    let document = widget_builder().build().to_json().unwrap();

    let err = serde_json::from_str::<Problem>(&document).unwrap_err();

    assert!(err.to_string().contains("not supported"));
}
