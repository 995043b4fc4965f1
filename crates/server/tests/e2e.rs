use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use server::{routes, ServerState};

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn create_customer(&self, company_id: &str, first_name: &str) -> anyhow::Result<String> {
        let res = self.client.post(self.url("/customers")).json(&customer_body(company_id, first_name)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
        let body = res.json::<Value>().await?;
        Ok(body["id"].as_str().unwrap_or_default().to_string())
    }

    async fn create_company(&self, name: &str) -> anyhow::Result<String> {
        let res = self.client.post(self.url("/companies")).json(&company_body(name)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
        let body = res.json::<Value>().await?;
        Ok(body["id"].as_str().unwrap_or_default().to_string())
    }
}

/// Single-connection in-memory SQLite with the production migrations applied.
async fn migrated_db() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = migrated_db().await?;
    let app = routes::build_router(ServerState::new(db), CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new() })
}

fn address() -> Value {
    json!({
        "line1": "1 Infinite Loop",
        "city": "Cupertino",
        "region": "CA",
        "postalCode": "95014",
        "country": "US"
    })
}

fn company_body(name: &str) -> Value {
    json!({"name": name, "email": "hello@example.com", "address": address()})
}

fn customer_body(company_id: &str, first_name: &str) -> Value {
    json!({
        "companyId": company_id,
        "firstName": first_name,
        "lastName": "Lovelace",
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "address": address()
    })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_company_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = app.create_company("Acme").await?;
    assert!(id.starts_with("com_"));
    assert_eq!(id.len(), 25);

    let res = app.client.get(app.url(&format!("/companies/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["name"], "Acme");
    assert_eq!(body["address"]["postalCode"], "95014");

    let res = app.client
        .patch(app.url(&format!("/companies/{id}")))
        .json(&json!({"name": "Acme Corp"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let body = app.client.get(app.url(&format!("/companies/{id}"))).send().await?.json::<Value>().await?;
    assert_eq!(body["name"], "Acme Corp");
    assert_eq!(body["email"], "hello@example.com");

    let res = app.client.delete(app.url(&format!("/companies/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = app.client.delete(app.url(&format!("/companies/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["type"], "resource_not_found");
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], format!("Cannot delete Company. ID {id} does not exist."));
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_company_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.get(app.url("/companies/com_aaaaaaaaaaaaaaaaaaaaa")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Cannot retrieve Company. ID com_aaaaaaaaaaaaaaaaaaaaa does not exist.");
    Ok(())
}

#[tokio::test]
async fn e2e_validation_errors_are_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.client
        .post(app.url("/companies"))
        .json(&json!({"name": "", "email": "hello@example.com", "address": address()}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["type"], "invalid_request");
    assert_eq!(body["status"], 400);

    let res = app.client
        .post(app.url("/companies"))
        .json(&json!({"name": "Acme", "email": "not-an-email", "address": address()}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = app.client.get(app.url("/companies/bogus")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = app.client.get(app.url("/companies?limit=0")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_list_pagination_and_filter() -> anyhow::Result<()> {
    let app = start_server().await?;
    let mut ids = Vec::new();
    for name in ["A", "B", "C", "D", "E"] {
        ids.push(app.create_company(name).await?);
        // distinct created_at values keep the default order deterministic
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let all = app.client.get(app.url("/companies")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(all.len(), 5);

    let page = app.client.get(app.url("/companies?limit=2&page=2")).send().await?.json::<Vec<Value>>().await?;
    let names: Vec<_> = page.iter().map(|c| c["name"].as_str().unwrap_or_default()).collect();
    assert_eq!(names, vec!["C", "D"]);

    // page without limit has no effect
    let ignored = app.client.get(app.url("/companies?page=2")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(ignored.len(), 5);

    let filtered = app.client.get(app.url("/companies?name=E")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["id"], ids[4].as_str());
    Ok(())
}

#[tokio::test]
async fn e2e_customer_requires_existing_company() -> anyhow::Result<()> {
    let app = start_server().await?;

    let orphan = json!({
        "companyId": "com_aaaaaaaaaaaaaaaaaaaaa",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "address": address()
    });
    let res = app.client.post(app.url("/customers")).json(&orphan).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let company_id = app.create_company("Analytical Engines").await?;
    let mut body = orphan.clone();
    body["companyId"] = json!(company_id);
    let res = app.client.post(app.url("/customers")).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let id = res.json::<Value>().await?["id"].as_str().unwrap_or_default().to_string();
    assert!(id.starts_with("cus_"));

    let listed = app.client
        .get(app.url(&format!("/customers?companyId={company_id}")))
        .send().await?
        .json::<Vec<Value>>().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["firstName"], "Ada");

    let res = app.client
        .patch(app.url(&format!("/customers/{id}")))
        .json(&json!({"lastName": "Byron"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let fetched = app.client.get(app.url(&format!("/customers/{id}"))).send().await?.json::<Value>().await?;
    assert_eq!(fetched["lastName"], "Byron");
    assert_eq!(fetched["firstName"], "Ada");
    Ok(())
}

#[tokio::test]
async fn e2e_nested_address_patch_is_merged() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = app.create_company("Acme").await?;

    let res = app.client
        .patch(app.url(&format!("/companies/{id}")))
        .json(&json!({"address": {"city": "Palo Alto"}}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let body = app.client.get(app.url(&format!("/companies/{id}"))).send().await?.json::<Value>().await?;
    assert_eq!(body["address"]["city"], "Palo Alto");
    assert_eq!(body["address"]["line1"], "1 Infinite Loop");
    assert_eq!(body["address"]["postalCode"], "95014");
    Ok(())
}

#[tokio::test]
async fn e2e_moving_customer_to_missing_company_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let company_id = app.create_company("Acme").await?;
    let id = app.create_customer(&company_id, "Ada").await?;

    let missing = "com_bbbbbbbbbbbbbbbbbbbbb";
    let res = app.client
        .patch(app.url(&format!("/customers/{id}")))
        .json(&json!({"companyId": missing}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], format!("Cannot retrieve Company. ID {missing} does not exist."));

    let fetched = app.client.get(app.url(&format!("/customers/{id}"))).send().await?.json::<Value>().await?;
    assert_eq!(fetched["companyId"], company_id.as_str());
    Ok(())
}

#[tokio::test]
async fn e2e_deleting_company_removes_its_customers() -> anyhow::Result<()> {
    let app = start_server().await?;
    let doomed = app.create_company("Doomed").await?;
    let kept = app.create_company("Kept").await?;
    let gone = app.create_customer(&doomed, "Ada").await?;
    app.create_customer(&doomed, "Grace").await?;
    let stays = app.create_customer(&kept, "Alan").await?;

    let res = app.client.delete(app.url(&format!("/companies/{doomed}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = app.client.get(app.url(&format!("/customers/{gone}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let orphans = app.client
        .get(app.url(&format!("/customers?companyId={doomed}")))
        .send().await?
        .json::<Vec<Value>>().await?;
    assert!(orphans.is_empty());

    let remaining = app.client.get(app.url("/customers")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], stays.as_str());
    Ok(())
}
