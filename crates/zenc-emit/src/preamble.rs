//! The fixed C preamble every emitted translation unit opens with: the
//! standard headers the lowering rules depend on, plus the option/result
//! tagged-union helper. Non-goals bound functionality, not the ambient
//! shape of the output — this is emitted unconditionally, whether or not
//! the program actually constructs a `Some`/`None`/`Ok`/`Err`.

pub const PREAMBLE: &str = "\
#include <stdio.h>
#include <stdlib.h>
#include <stdbool.h>
#include <string.h>

typedef struct ZenOption {
    bool is_some;
    long value;
} ZenOption;

typedef struct ZenResult {
    bool is_ok;
    long value;
} ZenResult;

";
