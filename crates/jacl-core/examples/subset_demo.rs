//! Subset Matching Demo
//!
//! Walks through the matcher surface:
//! 1. Single record subset against a typed value
//! 2. Positional and keyed collection pairing
//! 3. Overlay functions
//! 4. Persisting a matcher and reloading it

use jacl_core::logging_facility::{init, Profile};
use jacl_core::{cmp, cmps, key, not_exists, size_is, MatcherEnvelope};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct User {
    id: u32,
    name: &'static str,
    email: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);
    println!("=== jacl Subset Demo ===\n");

    let users = vec![
        User { id: 1, name: "ada", email: "ada@example.com" },
        User { id: 2, name: "bob", email: "bob@example.com" },
    ];

    // ===== Part 1: Single =====
    println!("## Part 1: Single\n");
    let m = cmp(&json!({"name": "ada"}))?;
    m.cmp(&users[0])?;
    println!("users[0] contains {{\"name\": \"ada\"}}");
    if let Err(err) = m.cmp(&users[1]) {
        println!("users[1]: {} ({})", err, err.code());
    }

    // ===== Part 2: Pairing =====
    println!("\n## Part 2: Pairing\n");
    let positional = cmps().item(&json!({"id": 1})).build()?;
    positional.cmp(&users)?;
    println!("positional: first item has id 1");

    let keyed = cmps().func(key(["id"])).item(&json!({"id": 2, "name": "bob"})).build()?;
    keyed.cmp(&users)?;
    println!("keyed: an item with id 2 is named bob");

    // ===== Part 3: Overlays =====
    println!("\n## Part 3: Overlays\n");
    let overlays = cmps().func(size_is(2)).func(not_exists(["deleted_at"])).build()?;
    overlays.cmp(&users)?;
    println!("two users, none deleted");
    if let Err(err) = overlays.cmp(&users[..1]) {
        println!("one user: {}", err);
    }

    // ===== Part 4: Persistence =====
    println!("\n## Part 4: Persistence\n");
    let stored = serde_json::to_string_pretty(&keyed.into_envelope())?;
    println!("{}", stored);
    let reloaded: MatcherEnvelope = serde_json::from_str(&stored)?;
    reloaded.cmp(&users)?;
    println!("reloaded matcher still passes");

    Ok(())
}
