//! Generic containers.
//!
//! The associative containers ([`OrderedSet`], [`OrderedMultiset`],
//! [`OrderedMap`]) are adapters over one red-black tree, [`RbTree`]. The
//! sequence containers ([`Vector`], [`Array`], [`List`], [`Stack`],
//! [`Queue`]) are independent of it.

use inner::doc_inline_reexport;

doc_inline_reexport! {
    ops,
    tree,
    seq,
}
