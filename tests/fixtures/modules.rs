// Hand-assembled WebAssembly binaries used by the end to end tests.
//
// Each fixture is the smallest module that exercises one path of a bootstrap run.
// Section layout: id, byte length, then the section contents.

#![allow(dead_code)]

/// `wasm_main` writes "hello" through `env.log`, reading it from its exported memory.
pub const LOGGING_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x01, 0x09, 0x02, 0x60, 0x02, 0x7f, 0x7f, 0x00, 0x60, 0x00, 0x00, // types: (i32, i32) -> (), () -> ()
    0x02, 0x0b, 0x01, 0x03, 0x65, 0x6e, 0x76, 0x03, 0x6c, 0x6f, 0x67, 0x00, 0x00, // import env.log
    0x03, 0x02, 0x01, 0x01, // one function of type 1
    0x05, 0x03, 0x01, 0x00, 0x01, // one page of memory
    0x07, 0x16, 0x02, // two exports
    0x06, 0x6d, 0x65, 0x6d, 0x6f, 0x72, 0x79, 0x02, 0x00, // "memory"
    0x09, 0x77, 0x61, 0x73, 0x6d, 0x5f, 0x6d, 0x61, 0x69, 0x6e, 0x00, 0x01, // "wasm_main"
    0x0a, 0x0a, 0x01, 0x08, 0x00, 0x41, 0x00, 0x41, 0x05, 0x10, 0x00, 0x0b, // log(0, 5)
    0x0b, 0x0b, 0x01, 0x00, 0x41, 0x00, 0x0b, 0x05, 0x68, 0x65, 0x6c, 0x6c, 0x6f, // "hello" at 0
];

/// Valid module with no exports at all.
pub const EMPTY_MODULE: &[u8] = &[0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00];

/// Right preamble, garbage sections.
pub const CORRUPT_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff,
];

/// What a static file server returns for a missing file.
pub const NOT_FOUND_PAGE: &[u8] = b"<!DOCTYPE html><html><body>404 Not Found</body></html>";

/// Imports `env.missing`, which the host does not provide.
pub const UNRESOLVED_IMPORT_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x01, 0x04, 0x01, 0x60, 0x00, 0x00, // types: () -> ()
    0x02, 0x0f, 0x01, 0x03, 0x65, 0x6e, 0x76, 0x07, 0x6d, 0x69, 0x73, 0x73, 0x69, 0x6e, 0x67,
    0x00, 0x00, // import env.missing
];

/// Start section hits `unreachable`.
pub const START_TRAP_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x01, 0x04, 0x01, 0x60, 0x00, 0x00, // types: () -> ()
    0x03, 0x02, 0x01, 0x00, // one function of type 0
    0x08, 0x01, 0x00, // start: function 0
    0x0a, 0x05, 0x01, 0x03, 0x00, 0x00, 0x0b, // unreachable
];

/// `wasm_main` hits `unreachable`.
pub const TRAPPING_ENTRY_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x01, 0x04, 0x01, 0x60, 0x00, 0x00, // types: () -> ()
    0x03, 0x02, 0x01, 0x00, // one function of type 0
    0x07, 0x0d, 0x01, 0x09, 0x77, 0x61, 0x73, 0x6d, 0x5f, 0x6d, 0x61, 0x69, 0x6e, 0x00, 0x00, // "wasm_main"
    0x0a, 0x05, 0x01, 0x03, 0x00, 0x00, 0x0b, // unreachable
];

/// `wasm_main` returns the i32 42.
pub const VALUE_RETURNING_ENTRY_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x01, 0x05, 0x01, 0x60, 0x00, 0x01, 0x7f, // types: () -> i32
    0x03, 0x02, 0x01, 0x00, // one function of type 0
    0x07, 0x0d, 0x01, 0x09, 0x77, 0x61, 0x73, 0x6d, 0x5f, 0x6d, 0x61, 0x69, 0x6e, 0x00, 0x00, // "wasm_main"
    0x0a, 0x06, 0x01, 0x04, 0x00, 0x41, 0x2a, 0x0b, // i32.const 42
];

/// `wasm_main` takes an i32.
pub const PARAMETERIZED_ENTRY_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x01, 0x05, 0x01, 0x60, 0x01, 0x7f, 0x00, // types: (i32) -> ()
    0x03, 0x02, 0x01, 0x00, // one function of type 0
    0x07, 0x0d, 0x01, 0x09, 0x77, 0x61, 0x73, 0x6d, 0x5f, 0x6d, 0x61, 0x69, 0x6e, 0x00, 0x00, // "wasm_main"
    0x0a, 0x04, 0x01, 0x02, 0x00, 0x0b, // empty body
];

/// Exports its memory under the name `wasm_main`.
pub const MEMORY_NAMED_ENTRY_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x05, 0x03, 0x01, 0x00, 0x01, // one page of memory
    0x07, 0x0d, 0x01, 0x09, 0x77, 0x61, 0x73, 0x6d, 0x5f, 0x6d, 0x61, 0x69, 0x6e, 0x02, 0x00, // "wasm_main"
];

/// `wasm_main` calls `env.log(-1, 5)`: the pointer lies past the end of its memory.
pub const OUT_OF_RANGE_LOG_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x01, 0x09, 0x02, 0x60, 0x02, 0x7f, 0x7f, 0x00, 0x60, 0x00, 0x00, // types: (i32, i32) -> (), () -> ()
    0x02, 0x0b, 0x01, 0x03, 0x65, 0x6e, 0x76, 0x03, 0x6c, 0x6f, 0x67, 0x00, 0x00, // import env.log
    0x03, 0x02, 0x01, 0x01, // one function of type 1
    0x05, 0x03, 0x01, 0x00, 0x01, // one page of memory
    0x07, 0x16, 0x02, // two exports
    0x06, 0x6d, 0x65, 0x6d, 0x6f, 0x72, 0x79, 0x02, 0x00, // "memory"
    0x09, 0x77, 0x61, 0x73, 0x6d, 0x5f, 0x6d, 0x61, 0x69, 0x6e, 0x00, 0x01, // "wasm_main"
    0x0a, 0x0a, 0x01, 0x08, 0x00, 0x41, 0x7f, 0x41, 0x05, 0x10, 0x00, 0x0b, // log(-1, 5)
];

/// `wasm_main` calls `env.log(0, 5)` but the module has no memory to read from.
pub const MEMORYLESS_LOG_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x01, 0x09, 0x02, 0x60, 0x02, 0x7f, 0x7f, 0x00, 0x60, 0x00, 0x00, // types: (i32, i32) -> (), () -> ()
    0x02, 0x0b, 0x01, 0x03, 0x65, 0x6e, 0x76, 0x03, 0x6c, 0x6f, 0x67, 0x00, 0x00, // import env.log
    0x03, 0x02, 0x01, 0x01, // one function of type 1
    0x07, 0x0d, 0x01, 0x09, 0x77, 0x61, 0x73, 0x6d, 0x5f, 0x6d, 0x61, 0x69, 0x6e, 0x00, 0x01, // "wasm_main"
    0x0a, 0x0a, 0x01, 0x08, 0x00, 0x41, 0x00, 0x41, 0x05, 0x10, 0x00, 0x0b, // log(0, 5)
];

/// `wasm_main` calls `env.log(0, -1)`: a length of u32::MAX that must be capped.
/// One page is exactly `MAX_LOG_LINE` bytes, so the capped read fits.
pub const OVERSIZED_LOG_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
    0x01, 0x09, 0x02, 0x60, 0x02, 0x7f, 0x7f, 0x00, 0x60, 0x00, 0x00, // types: (i32, i32) -> (), () -> ()
    0x02, 0x0b, 0x01, 0x03, 0x65, 0x6e, 0x76, 0x03, 0x6c, 0x6f, 0x67, 0x00, 0x00, // import env.log
    0x03, 0x02, 0x01, 0x01, // one function of type 1
    0x05, 0x03, 0x01, 0x00, 0x01, // one page of memory
    0x07, 0x16, 0x02, // two exports
    0x06, 0x6d, 0x65, 0x6d, 0x6f, 0x72, 0x79, 0x02, 0x00, // "memory"
    0x09, 0x77, 0x61, 0x73, 0x6d, 0x5f, 0x6d, 0x61, 0x69, 0x6e, 0x00, 0x01, // "wasm_main"
    0x0a, 0x0a, 0x01, 0x08, 0x00, 0x41, 0x00, 0x41, 0x7f, 0x10, 0x00, 0x0b, // log(0, -1)
    0x0b, 0x0b, 0x01, 0x00, 0x41, 0x00, 0x0b, 0x05, 0x68, 0x65, 0x6c, 0x6c, 0x6f, // "hello" at 0
];
