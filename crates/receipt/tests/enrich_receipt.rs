use posdelivery_receipt::{PrintRequest, ReceiptConfig, ReceiptError, ReceiptLocale};
use proptest::prelude::*;
use serde_json::{Value, json};

fn request(order: Value, base: Value) -> PrintRequest {
    serde_json::from_value(json!({ "order": order, "base": base })).expect("valid request")
}

fn delivery_request() -> PrintRequest {
    serde_json::from_value(json!({
        "order": {
            "id": 311,
            "name": "Order 00007-002-0031",
            "partner_id": 25,
            "general_note": "Casa esquinera, reja verde",
            "date_order": "2025-11-08 03:43:39",
            "lines": [
                { "product_name": "Bandeja paisa", "note": "sin chicharrón" },
                { "product_name": "Jugo de lulo", "note": false }
            ]
        },
        "base": {
            "name": "Order 00007-002-0031",
            "amount_total": 48500,
            "cashier": "Marta",
            "orderlines": [
                { "productName": "Bandeja paisa", "qty": "1", "customerNote": "" },
                { "productName": "Jugo de lulo", "qty": "2", "customerNote": "sin hielo" }
            ]
        },
        "partners": [
            {
                "id": 25,
                "name": "Carlos Restrepo",
                "street": "Calle 10 # 43-12",
                "street2": false,
                "city": "Medellín",
                "state_id": [3, "Antioquia"],
                "zip": "050021",
                "country_id": [49, "Colombia"],
                "phone": false,
                "mobile": "3104567890",
                "vat": false,
                "document_type": "cc",
                "document_number": "71234567"
            }
        ]
    }))
    .expect("valid request")
}

#[test]
fn full_delivery_receipt() {
    let enrichment = delivery_request().enrich(ReceiptConfig::default());
    assert!(enrichment.is_clean());

    let receipt = enrichment.receipt.to_json().unwrap();
    assert_eq!(receipt["name"], json!("Order 00007-002-0031"));
    assert_eq!(receipt["amount_total"], json!(48500));
    assert_eq!(receipt["cashier"], json!("Marta"));
    assert_eq!(receipt["generalNote"], json!("Casa esquinera, reja verde"));
    assert_eq!(receipt["creationDate"], json!("07/11/2025, 10:43:39 p. m."));

    assert_eq!(
        receipt["partner"],
        json!({
            "name": "Carlos Restrepo",
            "street": "Calle 10 # 43-12",
            "street2": "",
            "city": "Medellín",
            "state_id": "Antioquia",
            "zip": "050021",
            "country_id": "Colombia",
            "phone": "",
            "mobile": "3104567890",
            "vat": "",
            "document_type": "cc",
            "document_type_label": "Cédula de Ciudadanía",
            "document_number": "71234567",
            "address": "Calle 10 # 43-12, Medellín, Antioquia, 050021",
            "contact_phone": "3104567890"
        })
    );

    let lines = receipt["orderlines"].as_array().unwrap();
    assert_eq!(lines[0]["internalNote"], json!("sin chicharrón"));
    assert_eq!(lines[0]["qty"], json!("1"));
    assert!(lines[1].get("internalNote").is_none());
    assert_eq!(lines[1]["customerNote"], json!("sin hielo"));
}

#[test]
fn timezone_and_locale_are_configurable() {
    let config = ReceiptConfig::new("en-US", "America/New_York").unwrap();
    let receipt = delivery_request().enrich(config).receipt;
    // 2025-11-08 03:43:39 UTC is 22:43:39 EST the previous day.
    assert_eq!(receipt.creation_date.as_deref(), Some("11/07/2025, 10:43:39 PM"));

    let config = ReceiptConfig::default()
        .with_locale(ReceiptLocale::Iso)
        .with_timezone(chrono_tz::Tz::UTC);
    let receipt = delivery_request().enrich(config).receipt;
    assert_eq!(receipt.creation_date.as_deref(), Some("2025-11-08 03:43:39"));
}

#[test]
fn walk_in_order_prints_without_customer() {
    let req = request(
        json!({ "lines": [{ "product_name": "Tinto" }] }),
        json!({ "orderlines": [{ "productName": "Tinto" }] }),
    );
    let receipt = req.enrich(ReceiptConfig::default()).receipt.to_json().unwrap();
    let keys = receipt.as_object().unwrap();
    assert!(!keys.contains_key("partner"));
    assert!(!keys.contains_key("generalNote"));
    assert!(!keys.contains_key("creationDate"));
    assert!(receipt["orderlines"][0].get("internalNote").is_none());
}

#[test]
fn unparseable_date_blanks_only_the_date() {
    let req = request(
        json!({ "general_note": "ok", "date_order": "08-11-2025" }),
        json!({ "orderlines": [] }),
    );
    let enrichment = req.enrich(ReceiptConfig::default());
    assert_eq!(enrichment.field_errors.len(), 1);
    assert!(matches!(
        &enrichment.field_errors[0],
        ReceiptError::Format { field: "date_order", value, .. } if value == "08-11-2025"
    ));
    assert!(enrichment.receipt.creation_date.is_none());
    assert_eq!(enrichment.receipt.general_note.as_deref(), Some("ok"));
}

#[test]
fn null_orderlines_still_print() {
    let req = request(
        json!({ "general_note": "Llamar al llegar", "lines": [{ "product_name": "Tinto", "note": "x" }] }),
        json!({ "name": "Order 0009", "orderlines": null }),
    );
    let enrichment = req.enrich(ReceiptConfig::default());
    assert!(enrichment.is_clean());

    let receipt = enrichment.receipt.to_json().unwrap();
    assert_eq!(receipt["name"], json!("Order 0009"));
    assert_eq!(receipt["orderlines"], json!([]));
    assert_eq!(receipt["generalNote"], json!("Llamar al llegar"));
}

fn optional_text() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Bool(false)),
        "[a-zA-Z ]{0,10}".prop_map(Value::String),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: whatever the partner carries, every printed partner field is a
    /// string, never null.
    #[test]
    fn partner_block_never_contains_null(
        name in optional_text(),
        street in optional_text(),
        city in optional_text(),
        phone in optional_text(),
        has_state in any::<bool>(),
    ) {
        let state = if has_state { json!([1, "Antioquia"]) } else { json!(false) };
        let req = request(
            json!({ "partner": {
                "name": name, "street": street, "city": city,
                "phone": phone, "state_id": state
            }}),
            json!({}),
        );
        let receipt = req.enrich(ReceiptConfig::default()).receipt.to_json().unwrap();
        let block = receipt["partner"].as_object().unwrap();
        for (key, value) in block {
            prop_assert!(value.is_string(), "field {} was {:?}", key, value);
        }
        let expected_state = if has_state { "Antioquia" } else { "" };
        prop_assert_eq!(&block["state_id"], &json!(expected_state));
    }

    /// Property: notes land on the line with the same index and nowhere else.
    #[test]
    fn internal_notes_follow_line_positions(
        notes in prop::collection::vec(proptest::option::of("[a-z]{1,8}"), 0..6),
        printed in 0usize..8,
    ) {
        let lines: Vec<Value> = notes
            .iter()
            .map(|n| json!({ "product_name": "p", "note": n }))
            .collect();
        let base_lines: Vec<Value> = (0..printed).map(|i| json!({ "idx": i })).collect();
        let req = request(json!({ "lines": lines }), json!({ "orderlines": base_lines }));

        let receipt = req.enrich(ReceiptConfig::default()).receipt;
        prop_assert_eq!(receipt.orderlines.len(), printed);
        for (i, line) in receipt.orderlines.iter().enumerate() {
            let expected = notes.get(i).cloned().flatten();
            prop_assert_eq!(&line.internal_note, &expected);
            prop_assert_eq!(line.get("idx"), Some(&json!(i)));
        }
    }
}
