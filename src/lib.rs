//! Robots exclusion protocol parsing and matching.
//!
//! ```
//! let matcher = rusty_robots::parse(b"User-agent: *\nDisallow: /private\n");
//! assert!(!matcher.single_agent_allowed_by_robots("FooBot", "https://example.com/private/x"));
//! assert!(matcher.single_agent_allowed_by_robots("FooBot", "https://example.com/public"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod robots;

pub use error::RobotsError;
pub use robots::{RobotsTxtMatcher, RobotsTxtParser, RobotsTxtSource, parse};
