//! API Gateway proxy entrypoint sharing the HTTP route's behaviour.

use lambda_runtime::LambdaEvent;
use serde_json::{Value, json};

use crate::product::{ProductResponse, get_product_details};
use crate::server::{AppState, MISSING_NAME, requested_name};

/// Reads the string value of `key` from the payload root,
/// `queryStringParameters` or `pathParameters`, in that order.
pub fn parse_payload(event: &LambdaEvent<Value>, key: &str) -> Option<String> {
    event
        .payload
        .get(key)
        .or_else(|| {
            event
                .payload
                .get("queryStringParameters")
                .and_then(|qs| qs.get(key))
        })
        .or_else(|| {
            event
                .payload
                .get("pathParameters")
                .and_then(|pp| pp.get(key))
        })
        .and_then(|v| v.as_str().map(str::to_string))
}

fn proxy_response(status: u16, body: &ProductResponse) -> Value {
    json!({
        "statusCode": status,
        "headers": { "content-type": "application/json" },
        "body": serde_json::to_string(body).unwrap_or_default(),
    })
}

pub async fn handle_event(state: &AppState, event: LambdaEvent<Value>) -> Value {
    let name = parse_payload(&event, "name");
    let Some(name) = requested_name(name.as_deref()) else {
        return proxy_response(400, &ProductResponse::error(MISSING_NAME));
    };

    let response = get_product_details(&state.client, &state.config, &state.layout, name).await;
    proxy_response(200, &response)
}
