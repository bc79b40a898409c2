//! Detour — a minimal conversational agent SDK with marker-based tool
//! dispatch.
//!
//! An [`Agent`](agent::Agent) holds a system prompt, a set of named tools,
//! and an owned conversation transcript. Each call to `run` issues one
//! provider request; when the model's reply contains the literal `TOOL:` and
//! `ARGS:` markers the agent takes a detour, invoking the named tool and
//! feeding the result back for a second, final response.
//!
//! # Quick Start
//!
//! ```no_run
//! use detour::prelude::*;
//!
//! # async fn example() {
//! let config = DetourConfig {
//!     api_key: "sk-...".into(),
//!     ..Default::default()
//! };
//! let mut agent = Agent::new(config.into_provider())
//!     .with_system_prompt("You are a helpful assistant.");
//! let reply = agent.run("Hello!").await;
//! println!("{reply}");
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod provider;
pub mod tools;
pub mod types;
