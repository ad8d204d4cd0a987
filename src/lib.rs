//! Minimal HTML document builder
//!
//! Compose nested tag structures with [`Element`], aggregate them into a
//! [`Document`], and render the result to a string or a file. No escaping
//! or validation is performed; the output is only as well-formed as the
//! caller's composition.
//!
//! ```
//! use htmldoc::{Document, Element};
//!
//! let paragraph = Element::new("p").text("hi").inline();
//! let mut div = Element::new("div");
//! div.absorb(&paragraph);
//!
//! let mut doc = Document::new();
//! doc.absorb(&div);
//! assert_eq!(
//!     doc.render().unwrap(),
//!     "<html>\n<div>\n        <p>hi</p>\n</div>\n</html>\n",
//! );
//! ```

pub mod document;
pub mod element;
pub mod errors;

// Re-export commonly used types
pub use document::Document;
pub use element::Element;
pub use errors::RenderError;
