use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};

use products_client::{
    CreateProductRequest, ProductsApi, ProductsClient, ProductsClientConfig, ProductsError,
};

const PRODUCT_RESOURCE: &str = "/v1/api/products";
const PAYMENT_RESOURCE: &str = "/v1/api/payments";
const API_TOKEN: &str = "ABC1234567890DEF";

fn products_client(server: &ServerGuard, token: &str) -> ProductsClient {
    ProductsClient::new(ProductsClientConfig::new(server.url(), token)).expect("valid test config")
}

fn valid_create_product_request() -> CreateProductRequest {
    CreateProductRequest::new("540", "pay-api-token", "A Product Name", 1050)
        .with_description("About this product")
        .with_return_url("http://some.return.url/")
}

fn product_response(external_id: &str) -> Value {
    json!({
        "external_id": external_id,
        "gateway_account_id": 540,
        "service_name": "Example Service",
        "name": "A Product Name",
        "description": "About this product",
        "price": 1050,
        "return_url": "http://some.return.url/",
        "_links": [
            {"href": format!("http://products.url/v1/api/products/{}", external_id), "method": "GET", "rel": "self"},
            {"href": format!("http://products-ui.url/pay/{}", external_id), "method": "POST", "rel": "pay"}
        ]
    })
}

fn payment_response(external_id: &str, product_external_id: &str) -> Value {
    json!({
        "external_id": external_id,
        "product_external_id": product_external_id,
        "amount": 1050,
        "status": "CREATED",
        "govuk_status": "created",
        "reference_number": "ABC1234DEF",
        "next_url": format!("https://card.gateway/secure/{}", external_id),
        "_links": [
            {"href": format!("http://products.url/v1/api/payments/{}", external_id), "method": "GET", "rel": "self"},
            {"href": format!("https://card.gateway/secure/{}", external_id), "method": "GET", "rel": "next"}
        ]
    })
}

#[tokio::test]
async fn test_create_product_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PRODUCT_RESOURCE)
        .match_header("authorization", format!("Bearer {}", API_TOKEN).as_str())
        .match_header("x-request-id", Matcher::Regex("^[0-9a-f-]{36}$".to_string()))
        .match_body(Matcher::Json(json!({
            "gateway_account_id": "540",
            "pay_api_token": "pay-api-token",
            "name": "A Product Name",
            "price": 1050,
            "description": "About this product",
            "return_url": "http://some.return.url/"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(product_response("product-externalId").to_string())
        .create_async()
        .await;

    let request = valid_create_product_request();
    let product = products_client(&server, API_TOKEN)
        .create_product(&request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(product.external_id, "product-externalId");
    assert_eq!(product.name, request.name);
    assert_eq!(product.description, request.description);
    assert_eq!(product.price, request.price);
    assert_eq!(product.return_url.as_deref(), Some("http://some.return.url/"));
    assert_eq!(
        product.pay_link.unwrap().href,
        "http://products-ui.url/pay/product-externalId"
    );
    assert_eq!(
        product.self_link.unwrap().href,
        "http://products.url/v1/api/products/product-externalId"
    );
}

#[tokio::test]
async fn test_create_product_accepts_external_service_id() {
    let mut server = Server::new_async().await;
    let mut body = product_response("ignored");
    let fields = body.as_object_mut().unwrap();
    fields.remove("external_id");
    fields.insert("external_service_id".to_string(), json!("product-externalId"));

    let _mock = server
        .mock("POST", PRODUCT_RESOURCE)
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let product = products_client(&server, API_TOKEN)
        .create_product(&valid_create_product_request())
        .await
        .unwrap();
    assert_eq!(product.external_id, "product-externalId");
}

#[tokio::test]
async fn test_create_product_with_both_id_keys() {
    let mut server = Server::new_async().await;
    let mut body = product_response("product-externalId");
    body["external_service_id"] = json!("product-externalId");

    let _mock = server
        .mock("POST", PRODUCT_RESOURCE)
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let product = products_client(&server, API_TOKEN)
        .create_product(&valid_create_product_request())
        .await
        .unwrap();
    assert_eq!(product.external_id, "product-externalId");
    assert_eq!(product.price, 1050);
}

#[tokio::test]
async fn test_create_product_unauthorized() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PRODUCT_RESOURCE)
        .match_header("authorization", "Bearer invalid-api-key")
        .with_status(401)
        .create_async()
        .await;

    let err = products_client(&server, "invalid-api-key")
        .create_product(&valid_create_product_request())
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), Some(401));
    assert!(matches!(err, ProductsError::Upstream { status_code: 401, .. }));
}

#[tokio::test]
async fn test_create_product_bad_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PRODUCT_RESOURCE)
        .match_body(Matcher::PartialJson(json!({"pay_api_token": ""})))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors":["pay_api_token must not be empty"]}"#)
        .create_async()
        .await;

    let request = CreateProductRequest::new("540", "", "A Product Name", 1050);
    let err = products_client(&server, API_TOKEN)
        .create_product(&request)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.error_code(), Some(400));
}

#[tokio::test]
async fn test_create_product_invalid_request_is_not_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PRODUCT_RESOURCE)
        .expect(0)
        .create_async()
        .await;

    let request = CreateProductRequest::new("", "pay-api-token", "A Product Name", 1050);
    let err = products_client(&server, API_TOKEN)
        .create_product(&request)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, ProductsError::InvalidRequest(_)));
    assert_eq!(err.error_code(), None);
}

#[tokio::test]
async fn test_create_product_malformed_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PRODUCT_RESOURCE)
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"external_id":"product-externalId","name":"No price"}"#)
        .create_async()
        .await;

    let err = products_client(&server, API_TOKEN)
        .create_product(&valid_create_product_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ProductsError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_get_product_by_external_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/api/products/product-externalId")
        .match_header("authorization", format!("Bearer {}", API_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(product_response("product-externalId").to_string())
        .create_async()
        .await;

    let product = products_client(&server, API_TOKEN)
        .get_product_by_external_id("product-externalId")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(product.external_id, "product-externalId");
    assert_eq!(product.gateway_account_id, "540");
    assert_eq!(product.service_name.as_deref(), Some("Example Service"));
}

#[tokio::test]
async fn test_get_product_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api/products/missing")
        .with_status(404)
        .create_async()
        .await;

    let err = products_client(&server, API_TOKEN)
        .get_product_by_external_id("missing")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.error_code(), Some(404));
}

#[tokio::test]
async fn test_get_products_by_gateway_account_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PRODUCT_RESOURCE)
        .match_query(Matcher::UrlEncoded("gatewayAccountId".into(), "540".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([product_response("first"), product_response("second")]).to_string())
        .create_async()
        .await;

    let products = products_client(&server, API_TOKEN)
        .get_products_by_gateway_account_id("540")
        .await
        .unwrap();

    mock.assert_async().await;
    let ids: Vec<&str> = products.iter().map(|p| p.external_id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[tokio::test]
async fn test_get_products_by_gateway_account_id_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", PRODUCT_RESOURCE)
        .match_query(Matcher::UrlEncoded("gatewayAccountId".into(), "999".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let products = products_client(&server, API_TOKEN)
        .get_products_by_gateway_account_id("999")
        .await
        .unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_create_payment_without_override() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PAYMENT_RESOURCE)
        .match_body(Matcher::Json(json!({"external_product_id": "product-externalId"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(payment_response("payment-externalId", "product-externalId").to_string())
        .create_async()
        .await;

    let payment = products_client(&server, API_TOKEN)
        .create_payment("product-externalId", None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(payment.external_id, "payment-externalId");
    assert_eq!(payment.product_external_id.as_deref(), Some("product-externalId"));
    assert_eq!(payment.next_url(), Some("https://card.gateway/secure/payment-externalId"));
}

#[tokio::test]
async fn test_create_payment_with_price_override() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PAYMENT_RESOURCE)
        .match_body(Matcher::Json(json!({"external_product_id": "product-externalId", "amount": 2000})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(payment_response("payment-externalId", "product-externalId").to_string())
        .create_async()
        .await;

    products_client(&server, API_TOKEN)
        .create_payment("product-externalId", Some(2000))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_payment_by_payment_external_id() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api/payments/payment-externalId")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payment_response("payment-externalId", "product-externalId").to_string())
        .create_async()
        .await;

    let payment = products_client(&server, API_TOKEN)
        .get_payment_by_payment_external_id("payment-externalId")
        .await
        .unwrap();

    assert_eq!(payment.amount, 1050);
    assert_eq!(payment.reference_number.as_deref(), Some("ABC1234DEF"));
}

#[tokio::test]
async fn test_get_payment_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api/payments/missing")
        .with_status(404)
        .create_async()
        .await;

    let err = products_client(&server, API_TOKEN)
        .get_payment_by_payment_external_id("missing")
        .await
        .unwrap_err();
    assert!(matches!(err, ProductsError::NotFound { resource: "Payment", .. }));
}

#[tokio::test]
async fn test_get_payments_by_product_external_id() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api/products/product-externalId/payments")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                payment_response("payment-1", "product-externalId"),
                payment_response("payment-2", "product-externalId")
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let payments = products_client(&server, API_TOKEN)
        .get_payments_by_product_external_id("product-externalId")
        .await
        .unwrap();

    assert_eq!(payments.len(), 2);
    assert_eq!(payments[1].external_id, "payment-2");
}

#[tokio::test]
async fn test_server_error_is_propagated() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/api/products/product-externalId/payments")
        .with_status(503)
        .create_async()
        .await;

    let err = products_client(&server, API_TOKEN)
        .get_payments_by_product_external_id("product-externalId")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), Some(503));
}
