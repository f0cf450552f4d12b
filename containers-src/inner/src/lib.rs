/// Re-exports each member crate both as a module and flattened into the
/// category crate, so that rustdoc shows the items inline.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
