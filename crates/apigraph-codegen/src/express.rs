//! Express.js reference emitter.
//!
//! Renders a [`Resolution`] into a single `server.js`: JSON body parsing is
//! always installed, CORS only when a node asked for it, and the auth/admin
//! middlewares only when at least one route uses them. Each route gets a
//! handler returning a fixed JSON message.

use apigraph_policy::Resolution;

use crate::Emitter;

/// Port the generated server listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 3000;

/// Canned response messages for well-known endpoints.
const KNOWN_MESSAGES: [(&str, &str); 9] = [
    ("/login", "Login successful"),
    ("/signup", "Signup successful"),
    ("/signout", "Signout successful"),
    ("/user", "User data"),
    ("/admin", "Admin data"),
    ("/home", "Welcome to Home Page"),
    ("/about", "About us"),
    ("/news", "Latest news"),
    ("/blogs", "Blogs list"),
];

/// Response message for a route handler.
pub fn response_message(endpoint: &str, name: &str) -> String {
    KNOWN_MESSAGES
        .iter()
        .find(|(known, _)| *known == endpoint)
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| format!("Response from {}", name))
}

/// Escapes text for a double-quoted JavaScript string literal.
fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Member access on `app` for a route method: `app.get` for identifiers,
/// `app["..."]` for anything else.
fn app_method(method: &str) -> String {
    let mut chars = method.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        format!("app.{}", method)
    } else {
        format!(r#"app["{}"]"#, js_string(method))
    }
}

/// Emits an Express application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressEmitter {
    pub port: u16,
}

impl ExpressEmitter {
    pub fn new(port: u16) -> Self {
        ExpressEmitter { port }
    }
}

impl Default for ExpressEmitter {
    fn default() -> Self {
        ExpressEmitter::new(DEFAULT_PORT)
    }
}

impl Emitter for ExpressEmitter {
    fn emit(&self, resolution: &Resolution) -> String {
        let routes = &resolution.routes;
        let globals = resolution.globals;
        let mut lines: Vec<String> = Vec::new();

        lines.push("// Auto-generated server implementation".into());
        lines.push(r#"const express = require("express");"#.into());
        if globals.cors {
            lines.push(r#"const cors = require("cors");"#.into());
        }
        lines.push("const app = express();".into());
        lines.push(String::new());

        if globals.cors {
            lines.push(r#"app.use(cors({ origin: "*" }));"#.into());
        }
        lines.push("app.use(express.json());".into());
        lines.push(String::new());

        if routes.any_auth() {
            lines.extend(
                [
                    "const authMiddleware = (req, res, next) => {",
                    "  if (!req.headers.authorization) {",
                    r#"    return res.status(401).json({ message: "Unauthorized" });"#,
                    "  }",
                    "  next();",
                    "};",
                    "",
                ]
                .map(String::from),
            );
        }

        if routes.any_admin() {
            lines.extend(
                [
                    "const adminMiddleware = (req, res, next) => {",
                    r#"  if (req.headers.authorization !== "admin") {"#,
                    r#"    return res.status(403).json({ message: "Forbidden" });"#,
                    "  }",
                    "  next();",
                    "};",
                    "",
                ]
                .map(String::from),
            );
        }

        for (endpoint, record) in routes.iter() {
            let mut middlewares = String::new();
            if record.auth {
                middlewares.push_str("authMiddleware, ");
            }
            if record.admin {
                middlewares.push_str("adminMiddleware, ");
            }
            let message = response_message(endpoint, &record.name);
            lines.push(format!(
                r#"{}("{}", {}(req, res) => res.json({{ message: "{}" }}));"#,
                app_method(&record.method),
                js_string(endpoint),
                middlewares,
                js_string(&message),
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            r#"app.listen({port}, () => console.log("Server running on port {port}"));"#,
            port = self.port
        ));

        let mut source = lines.join("\n");
        source.push('\n');
        source
    }
}
