//! End-to-end tests: configuration JSON -> graph -> resolution -> server file.

use std::fs;

use apigraph_codegen::{generate, EmitOptions};
use apigraph_core::ApiGraph;
use apigraph_policy::{resolve, Resolution};
use apigraph_storage::{load_nodes, InMemorySource};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn resolve_json(json: &str) -> Resolution {
    let nodes = load_nodes(&InMemorySource::new(json)).expect("config should load");
    resolve(&ApiGraph::build(nodes))
}

/// A designer export with a public auth section, a protected user section,
/// and an admin area reachable from two places.
const BLOG_CONFIG: &str = r#"{
  "nodes": [
    {"id": 1, "source": null, "target": [2, 3, 4], "name": "App",
     "properties": {"type": "entry", "allowed_origins": ["*"], "log_requests": true}},

    {"id": 2, "source": 1, "target": [5, 6, 7], "name": "Auth",
     "properties": {"auth_required": true}},
    {"id": 5, "source": 2, "name": "Login", "properties": {"endpoint": "/login", "method": "POST"}},
    {"id": 6, "source": 2, "name": "Signup", "properties": {"endpoint": "/signup", "method": "POST"}},
    {"id": 7, "source": 2, "name": "Signout", "properties": {"endpoint": "/signout", "method": "POST"}},

    {"id": 3, "source": 1, "target": [8, 9], "name": "Members",
     "properties": {"auth_required": true}},
    {"id": 8, "source": 3, "name": "Profile", "properties": {"endpoint": "/user", "method": "GET"}},
    {"id": 9, "source": 3, "target": 10, "name": "Admin Gate",
     "properties": {"admin_required": true}},
    {"id": 10, "source": 9, "name": "Dashboard", "properties": {"endpoint": "/admin", "method": "GET"}},

    {"id": 4, "source": 1, "target": [11, 12, 13], "name": "Public"},
    {"id": 11, "source": 4, "name": "Home", "properties": {"endpoint": "/home", "method": "GET"}},
    {"id": 12, "source": 4, "name": "Blogs", "properties": {"endpoint": "/blogs", "method": "get"}},
    {"id": 13, "source": 4, "target": 10, "name": "Stats",
     "properties": {"endpoint": "/stats", "method": "GET", "auth_required": false}}
  ]
}"#;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn home_scenario_end_to_end() {
    let resolution = resolve_json(
        r#"{"nodes": [
            {"id": 1, "source": null, "target": 2, "properties": {"type": "entry"}},
            {"id": 2, "source": 1, "target": 3, "properties": {"endpoint": "/home", "method": "GET"}},
            {"id": 3, "source": 2}
        ]}"#,
    );

    let record = resolution.routes.get("/home").expect("route present");
    assert_eq!(record.method, "get");
    assert_eq!(record.name, "Unnamed Route");
    assert!(!record.auth);
    assert!(!record.admin);
}

#[test]
fn blog_config_resolves_expected_policies() {
    let resolution = resolve_json(BLOG_CONFIG);
    let routes = &resolution.routes;

    assert!(resolution.globals.cors);
    assert!(resolution.globals.logging);

    for public in ["/login", "/signup", "/signout", "/home", "/blogs", "/stats"] {
        let record = routes.get(public).unwrap();
        assert!(!record.auth, "{public} should not need auth");
        assert!(!record.admin, "{public} should not need admin");
    }

    let user = routes.get("/user").unwrap();
    assert!(user.auth);
    assert!(!user.admin);

    // Reached via Members (auth + admin) and via Stats (auth downgraded): the
    // merge keeps the stricter policy.
    let admin = routes.get("/admin").unwrap();
    assert!(admin.auth);
    assert!(admin.admin);
    assert_eq!(admin.name, "Dashboard");

    let order: Vec<&str> = routes.iter().map(|(e, _)| e).collect();
    assert_eq!(
        order,
        vec!["/login", "/signup", "/signout", "/user", "/home", "/blogs", "/stats", "/admin"]
    );
}

#[test]
fn generated_server_file_matches_policies() {
    let resolution = resolve_json(BLOG_CONFIG);
    let dir = tempfile::tempdir().unwrap();
    let options = EmitOptions {
        output_path: dir.path().join("server.js"),
        port: 4000,
    };

    let result = generate(&resolution, &options).unwrap();
    assert_eq!(result.route_count, 8);

    let source = fs::read_to_string(&options.output_path).unwrap();
    assert_eq!(result.bytes_written, source.len() as u64);
    assert!(source.contains(r#"const cors = require("cors");"#));
    assert!(source.contains(
        r#"app.post("/login", (req, res) => res.json({ message: "Login successful" }));"#
    ));
    assert!(source.contains(
        r#"app.get("/user", authMiddleware, (req, res) => res.json({ message: "User data" }));"#
    ));
    assert!(source.contains(
        r#"app.get("/admin", authMiddleware, adminMiddleware, (req, res) => res.json({ message: "Admin data" }));"#
    ));
    assert!(source.contains(
        r#"app.get("/stats", (req, res) => res.json({ message: "Response from Stats" }));"#
    ));
    assert!(source.contains("app.listen(4000,"));
}

#[test]
fn graph_without_entries_yields_bare_server() {
    let resolution = resolve_json(
        r#"{"nodes": [
            {"id": "a", "source": "b", "target": "b",
             "properties": {"endpoint": "/home", "method": "GET", "allowed_origins": "*"}},
            {"id": "b", "source": "a", "target": "a"}
        ]}"#,
    );
    assert!(resolution.routes.is_empty());
    assert!(!resolution.globals.cors);
    assert!(!resolution.globals.logging);
}
