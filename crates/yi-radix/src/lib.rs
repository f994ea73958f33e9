//! Compressed prefix tree (radix / Patricia trie) over string keys.
//!
//! The tree answers two kinds of queries:
//!
//! - exact lookup of a key ([`RadixTree::get`], [`RadixTree::find`]);
//! - prefix discovery: every stored key that is a prefix of a probe string
//!   ([`RadixTree::find_all`]). Running it once per suffix of a text finds
//!   every stored key occurring in that text.
//!
//! Nodes are kept in a `Vec` arena and addressed by `u32` index instead of
//! boxed pointers.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`RadixNode`] and [`RadixEdge`] |
//! | [`radix`] | `insert`, `find`, `find_all`, `remove` over a tree |
//! | [`tree`] | [`RadixTree`], the owning wrapper |
//!
//! ```
//! use yi_radix::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("cat", 1).unwrap();
//! tree.insert("catalog", 2).unwrap();
//!
//! assert_eq!(tree.get("cat"), Some(&1));
//! assert_eq!(tree.find_all("catalogue"), vec![&1, &2]);
//! ```

pub mod error;
pub mod node;
pub mod radix;
pub mod tree;

pub use error::RadixError;
pub use node::{RadixEdge, RadixNode};
pub use tree::RadixTree;
