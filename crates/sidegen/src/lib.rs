//! sidegen: translate Selenium IDE `.side` recordings into Selenide test classes.
//!
//! The crate is a pure translation engine. Given an already-parsed [`Suite`],
//! [`generate`] produces the ordered lines of one Java test class in the
//! Selenide / JUnit 5 idiom: a fixed import header, one class, a `setup`
//! method derived from the suite's base URL, and one `@Test` method per
//! recorded test with one statement per recorded command.
//!
//! The engine performs no I/O. Reading `.side` files and writing `.java`
//! files belongs to the `sidegen-cli` crate.
//!
//! # Example
//!
//! ```
//! use sidegen::prelude::*;
//!
//! let suite = Suite::from_json(r#"{
//!     "name": "Login Suite",
//!     "url": "https://example.com",
//!     "tests": [{
//!         "name": "Login",
//!         "commands": [
//!             { "command": "open", "target": "/login", "value": "" },
//!             { "command": "click", "target": "id=submit", "value": "" }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let lines = generate(&suite).unwrap();
//! assert!(lines.iter().any(|l| l.contains(r#"open("/login")"#)));
//! assert!(lines.iter().any(|l| l.contains(r##"$("#submit").click()"##)));
//! ```

pub mod emit;
pub mod error;
pub mod ident;
pub mod locator;
pub mod suite;
pub mod value;

pub use emit::generate;
pub use error::{GenError, Result};
pub use ident::Identifier;
pub use suite::{SideCommand, SideTest, Suite};

/// Convenience re-exports for downstream users.
pub mod prelude {
    pub use crate::emit::generate;
    pub use crate::error::{GenError, Result};
    pub use crate::ident::Identifier;
    pub use crate::suite::{SideCommand, SideTest, Suite};
}
