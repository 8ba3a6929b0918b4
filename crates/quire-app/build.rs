//! Bakes `.env` / environment configuration into `env.rs` constants.
//!
//! The app runs in the browser, so there is no process environment to read at
//! runtime. Values are fixed at build time.

use std::{env, fs, path::PathBuf};

const VARS: &[(&str, &str)] = &[
    ("QUIRE_API_URL", "http://localhost:8000/api"),
    ("QUIRE_APP_NAME", "Quire"),
];

fn main() {
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let mut out = String::new();
    for (name, default) in VARS {
        println!("cargo:rerun-if-env-changed={name}");
        let value = env::var(name).unwrap_or_else(|_| default.to_string());
        out.push_str(&format!("pub const {name}: &str = {value:?};\n"));
    }

    let dest = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR set by cargo")).join("env.rs");
    fs::write(dest, out).expect("failed to write env.rs");
}
