//! Unrecoverable identity failures.
//!
//! Neither failure returns or unwinds: each emits one `tracing` event and
//! aborts the process.

use crate::extract::SignatureError;
use crate::signature::{Environment, SignatureFraming};

#[cold]
#[inline(never)]
pub(crate) fn malformed_signature(
    framing: SignatureFraming,
    raw: &str,
    error: SignatureError,
) -> ! {
    tracing::error!(
        signature = raw,
        prefix = framing.prefix(),
        suffix = framing.suffix(),
        %error,
        "malformed type signature; aborting"
    );
    std::process::abort()
}

#[cold]
#[inline(never)]
pub(crate) fn unsupported_target(environment: Environment) -> ! {
    tracing::error!(
        %environment,
        "type identity requested on a target without type names; aborting"
    );
    std::process::abort()
}
