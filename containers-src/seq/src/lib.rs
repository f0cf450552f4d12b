use inner::doc_inline_reexport;

doc_inline_reexport! {
    vector,
    fixed_array,
    linked_list,
    stack,
    queue,
}
