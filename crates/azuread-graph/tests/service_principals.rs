use std::sync::Arc;

use azuread_graph::{
    Credentials, DirectoryObject, GraphClient, GraphClientOptions, GraphError, Query,
    ServicePrincipal, ServicePrincipalsApi, ServicePrincipalsClient, StatusCode,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SP_ID: &str = "22222222-2222-2222-2222-222222222222";

fn service_principals(server: &MockServer) -> ServicePrincipalsClient {
    let options = GraphClientOptions {
        graph_endpoint: Some(server.uri()),
        ..Default::default()
    };
    let client = GraphClient::new(Credentials::access_token("test-token"), &options).unwrap();
    ServicePrincipalsClient::new(Arc::new(client))
}

#[tokio::test]
async fn get_returns_service_principal_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1.0/servicePrincipals/{SP_ID}")))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": SP_ID,
            "displayName": "Example",
            "preferredTokenSigningKeyThumbprint": "FF00"
        })))
        .mount(&server)
        .await;

    let (sp, status) = service_principals(&server)
        .get(SP_ID, &Query::default())
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(sp.id(), Some(SP_ID));
    assert_eq!(sp.preferred_thumbprint(), "FF00");
}

#[tokio::test]
async fn get_forwards_odata_select() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1.0/servicePrincipals/{SP_ID}")))
        .and(query_param("$select", "id,preferredTokenSigningKeyThumbprint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": SP_ID })))
        .expect(1)
        .mount(&server)
        .await;

    let query = Query::new().with_select(["id", "preferredTokenSigningKeyThumbprint"]);
    let (sp, _) = service_principals(&server).get(SP_ID, &query).await.unwrap();
    assert_eq!(sp.preferred_thumbprint(), "");
}

#[tokio::test]
async fn get_missing_object_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1.0/servicePrincipals/{SP_ID}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "Request_ResourceNotFound",
                "message": format!("Resource '{SP_ID}' does not exist or one of its queried reference-property objects are not present.")
            }
        })))
        .mount(&server)
        .await;

    let err = service_principals(&server)
        .get(SP_ID, &Query::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, GraphError::Api { ref code, .. } if code == "Request_ResourceNotFound"));
}

#[tokio::test]
async fn update_sends_thumbprint_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("/v1.0/servicePrincipals/{SP_ID}")))
        .and(body_json(json!({ "preferredTokenSigningKeyThumbprint": "FF00" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let status = service_principals(&server)
        .update(&ServicePrincipal {
            directory_object: DirectoryObject::with_id(SP_ID),
            preferred_token_signing_key_thumbprint: Some("FF00".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn update_with_empty_thumbprint_sends_null() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("/v1.0/servicePrincipals/{SP_ID}")))
        .and(body_json(json!({ "preferredTokenSigningKeyThumbprint": null })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    service_principals(&server)
        .update(&ServicePrincipal {
            directory_object: DirectoryObject::with_id(SP_ID),
            preferred_token_signing_key_thumbprint: Some("".into()),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn update_failure_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": "Authorization_RequestDenied",
                "message": "Insufficient privileges to complete the operation."
            }
        })))
        .mount(&server)
        .await;

    let err = service_principals(&server)
        .update(&ServicePrincipal {
            directory_object: DirectoryObject::with_id(SP_ID),
            preferred_token_signing_key_thumbprint: Some("FF00".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert!(err.to_string().contains("Insufficient privileges"));
}

#[tokio::test]
async fn update_requires_id() {
    let server = MockServer::start().await;

    let err = service_principals(&server)
        .update(&ServicePrincipal::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GraphError::InvalidRequest(_)));
}

#[tokio::test]
async fn unauthorized_response_forces_new_token() {
    const TENANT: &str = "44444444-4444-4444-4444-444444444444";

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/{TENANT}/oauth2/v2.0/token")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3599,
            "access_token": "granted-token"
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1.0/servicePrincipals/{SP_ID}")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": "InvalidAuthenticationToken",
                "message": "Access token has expired or is not yet valid."
            }
        })))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1.0/servicePrincipals/{SP_ID}")))
        .and(header("Authorization", "Bearer granted-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": SP_ID })))
        .mount(&server)
        .await;

    let options = GraphClientOptions {
        graph_endpoint: Some(server.uri()),
        login_endpoint: Some(server.uri()),
        ..Default::default()
    };
    let credentials = Credentials::client_secret(TENANT, "app-id", "secret");
    let client = GraphClient::new(credentials, &options).unwrap();
    let service_principals = ServicePrincipalsClient::new(Arc::new(client));

    let err = service_principals
        .get(SP_ID, &Query::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

    let (sp, _) = service_principals
        .get(SP_ID, &Query::default())
        .await
        .unwrap();
    assert_eq!(sp.id(), Some(SP_ID));
}
