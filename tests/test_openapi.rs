//! The OpenAPI document is generated from the route annotations; make sure
//! every route the router serves is described.

use catalog_api::transport;
use utoipa::OpenApi;

#[test]
fn openapi_document_describes_every_route() {
    let doc = serde_json::to_value(transport::http::ApiDoc::openapi()).unwrap();
    let paths = doc["paths"].as_object().unwrap();

    for (path, methods) in [
        ("/health", vec!["get"]),
        ("/api/products", vec!["get", "post"]),
        ("/api/products/{id}", vec!["get", "patch", "delete"]),
        ("/api/users", vec!["get", "post"]),
        ("/api/users/{id}", vec!["get", "patch", "delete"]),
    ] {
        let entry = paths
            .get(path)
            .unwrap_or_else(|| panic!("missing path {path}"));
        for method in methods {
            assert!(
                entry.get(method).is_some(),
                "missing {method} on {path}"
            );
        }
    }

    let schemas = doc["components"]["schemas"].as_object().unwrap();
    for schema in ["Product", "User", "NewProduct", "ProductPatch", "NewUser", "UserPatch", "ErrorBody"] {
        assert!(schemas.contains_key(schema), "missing schema {schema}");
    }
}
